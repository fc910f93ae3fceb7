//! Host scene interface: the pieces a frustum visual consumes from a 3D engine.
//!
//! # Invariants
//! - Shapes and geometries are validated on construction; a built geometry is
//!   never degenerate.
//! - Renderers read the render list; only `PrimitiveCollection` mutates it.
//!
//! The in-memory `ScenePrimitives` stands in for an engine's primitive
//! collection. Real engines implement `PrimitiveCollection` over their own
//! scene graph without changing consumers.

mod error;
mod frustum;
mod geometry;
mod primitive;
mod renderer;
mod scene;

pub use error::RenderError;
pub use frustum::PerspectiveFrustum;
pub use geometry::{
    FRUSTUM_EDGE_INDICES, FRUSTUM_TRIANGLE_INDICES, FrustumGeometry, FrustumOutlineGeometry,
    Geometry, GeometryInstance, VertexFormat,
};
pub use primitive::{PerInstanceColorAppearance, Primitive};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{PrimitiveCollection, SceneEvent, ScenePrimitives};

pub fn crate_info() -> &'static str {
    "frustumview-render v0.1.0"
}
