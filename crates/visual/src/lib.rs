//! Frustum visual: one camera frustum drawn into a host scene.
//!
//! # Invariants
//! - A visual holds either no primitives or exactly its fill/outline pair.
//! - Every update fully replaces the pair before returning; the old pair is
//!   never left registered.
//! - The host scene is shared, not owned.

mod error;
mod options;
mod visual;

pub use error::{ConfigError, VisualError};
pub use options::{DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR, FrustumConfig, FrustumOptions};
pub use visual::{
    FILL_COLOR, FrustumVisual, OUTLINE_COLOR, PrimitivePair, SharedScene, VisualState,
};

pub fn crate_info() -> &'static str {
    "frustumview-visual v0.1.0"
}
