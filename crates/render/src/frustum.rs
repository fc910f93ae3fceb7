//! Perspective frustum shape.
//!
//! The shape is pose-free: it only knows field of view, aspect ratio and the
//! near/far distances. Geometries pair it with an origin and orientation.
//!
//! Local axes follow the globe-viewer convention: +Z is the view direction,
//! +Y is up, and right is `direction × up` (which is -X for the identity
//! rotation).

use glam::{DMat4, DQuat, DVec3};

use crate::error::RenderError;

/// Perspective projection volume.
///
/// `fov` is the angle across the *larger* viewport dimension, so a wide
/// frustum (`aspect_ratio >= 1`) spreads `fov` horizontally and a tall one
/// spreads it vertically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveFrustum {
    fov: f64,
    aspect_ratio: f64,
    near: f64,
    far: f64,
}

impl PerspectiveFrustum {
    /// Build a shape from a field of view in radians.
    pub fn new(fov: f64, aspect_ratio: f64, near: f64, far: f64) -> Result<Self, RenderError> {
        if !fov.is_finite() || fov <= 0.0 || fov >= std::f64::consts::PI {
            return Err(RenderError::InvalidFieldOfView(fov));
        }
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(RenderError::InvalidAspectRatio(aspect_ratio));
        }
        if !near.is_finite() || !far.is_finite() || near <= 0.0 || near >= far {
            return Err(RenderError::InvalidNearFar { near, far });
        }
        Ok(Self {
            fov,
            aspect_ratio,
            near,
            far,
        })
    }

    /// Field of view in radians across the larger dimension.
    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    /// Vertical field of view in radians.
    pub fn fovy(&self) -> f64 {
        if self.aspect_ratio < 1.0 {
            self.fov
        } else {
            2.0 * ((self.fov * 0.5).tan() / self.aspect_ratio).atan()
        }
    }

    /// Half-height of the near plane.
    pub fn top(&self) -> f64 {
        self.near * (self.fovy() * 0.5).tan()
    }

    /// Half-width of the near plane.
    pub fn right(&self) -> f64 {
        self.aspect_ratio * self.top()
    }

    /// Right-handed projection matrix matching this shape.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fovy(), self.aspect_ratio, self.near, self.far)
    }

    /// World-space corners for the given apex and rotation.
    ///
    /// Order: near plane bottom-left, bottom-right, top-right, top-left, then
    /// the far plane in the same order. `orientation` must be normalized.
    pub fn corners(&self, origin: DVec3, orientation: DQuat) -> [DVec3; 8] {
        let direction = orientation * DVec3::Z;
        let up = orientation * DVec3::Y;
        let right = direction.cross(up);

        let plane = |distance: f64| {
            let scale = distance / self.near;
            let t = self.top() * scale;
            let r = self.right() * scale;
            let center = origin + direction * distance;
            [
                center - right * r - up * t,
                center + right * r - up * t,
                center + right * r + up * t,
                center - right * r + up * t,
            ]
        };

        let n = plane(self.near);
        let f = plane(self.far);
        [n[0], n[1], n[2], n[3], f[0], f[1], f[2], f[3]]
    }
}
