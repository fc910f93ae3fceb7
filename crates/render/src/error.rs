/// Errors raised while building geometry or touching a primitive collection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("field of view must be finite and within (0, pi) radians, got {0}")]
    InvalidFieldOfView(f64),
    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),
    #[error("near/far must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidNearFar { near: f64, far: f64 },
    #[error("geometry origin must be finite")]
    InvalidOrigin,
    #[error("geometry orientation must be a finite, non-zero quaternion")]
    InvalidOrientation,
    #[error("primitive needs at least one geometry instance")]
    EmptyPrimitive,
    #[error("scene backend error: {0}")]
    Backend(String),
}
