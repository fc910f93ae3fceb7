//! Shared types: poses, colors, and opaque primitive handles.

mod types;

pub use types::{Color, Pose, PrimitiveId};
