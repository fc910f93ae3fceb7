//! Frustum geometries and per-instance wrappers.

use frustumview_common::Color;
use glam::{DQuat, DVec3};

use crate::error::RenderError;
use crate::frustum::PerspectiveFrustum;

/// Vertex attributes a solid geometry should carry.
///
/// Flat per-instance color needs positions only; lit appearances would add
/// normals here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexFormat {
    #[default]
    PositionOnly,
}

/// Triangle list over [`PerspectiveFrustum::corners`]: two per face, six faces.
pub const FRUSTUM_TRIANGLE_INDICES: [u16; 36] = [
    0, 2, 1, 0, 3, 2, // near
    4, 5, 6, 4, 6, 7, // far
    0, 4, 7, 0, 7, 3, // left
    1, 2, 6, 1, 6, 5, // right
    0, 1, 5, 0, 5, 4, // bottom
    3, 7, 6, 3, 6, 2, // top
];

/// Line list over [`PerspectiveFrustum::corners`]: near loop, far loop, side edges.
pub const FRUSTUM_EDGE_INDICES: [u16; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, //
    4, 5, 5, 6, 6, 7, 7, 4, //
    0, 4, 1, 5, 2, 6, 3, 7,
];

/// Check the pose and return the normalized rotation.
fn validate_pose(origin: DVec3, orientation: DQuat) -> Result<DQuat, RenderError> {
    if !origin.is_finite() {
        return Err(RenderError::InvalidOrigin);
    }
    if !orientation.is_finite() || orientation.length_squared() == 0.0 {
        return Err(RenderError::InvalidOrientation);
    }
    Ok(orientation.normalize())
}

/// Closed solid volume of a frustum.
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumGeometry {
    frustum: PerspectiveFrustum,
    origin: DVec3,
    orientation: DQuat,
    vertex_format: VertexFormat,
}

impl FrustumGeometry {
    pub fn new(
        frustum: PerspectiveFrustum,
        origin: DVec3,
        orientation: DQuat,
        vertex_format: VertexFormat,
    ) -> Result<Self, RenderError> {
        let orientation = validate_pose(origin, orientation)?;
        Ok(Self {
            frustum,
            origin,
            orientation,
            vertex_format,
        })
    }

    pub fn frustum(&self) -> &PerspectiveFrustum {
        &self.frustum
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    pub fn vertex_format(&self) -> VertexFormat {
        self.vertex_format
    }

    pub fn corners(&self) -> [DVec3; 8] {
        self.frustum.corners(self.origin, self.orientation)
    }

    pub fn indices(&self) -> &'static [u16] {
        &FRUSTUM_TRIANGLE_INDICES
    }
}

/// Wireframe of a frustum's twelve edges.
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumOutlineGeometry {
    frustum: PerspectiveFrustum,
    origin: DVec3,
    orientation: DQuat,
}

impl FrustumOutlineGeometry {
    pub fn new(
        frustum: PerspectiveFrustum,
        origin: DVec3,
        orientation: DQuat,
    ) -> Result<Self, RenderError> {
        let orientation = validate_pose(origin, orientation)?;
        Ok(Self {
            frustum,
            origin,
            orientation,
        })
    }

    pub fn frustum(&self) -> &PerspectiveFrustum {
        &self.frustum
    }

    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    pub fn corners(&self) -> [DVec3; 8] {
        self.frustum.corners(self.origin, self.orientation)
    }

    pub fn indices(&self) -> &'static [u16] {
        &FRUSTUM_EDGE_INDICES
    }
}

/// Any geometry a primitive can draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Frustum(FrustumGeometry),
    FrustumOutline(FrustumOutlineGeometry),
}

impl Geometry {
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Frustum(_) => "frustum",
            Geometry::FrustumOutline(_) => "frustum-outline",
        }
    }

    pub fn frustum(&self) -> &PerspectiveFrustum {
        match self {
            Geometry::Frustum(g) => g.frustum(),
            Geometry::FrustumOutline(g) => g.frustum(),
        }
    }

    pub fn origin(&self) -> DVec3 {
        match self {
            Geometry::Frustum(g) => g.origin(),
            Geometry::FrustumOutline(g) => g.origin(),
        }
    }

    pub fn orientation(&self) -> DQuat {
        match self {
            Geometry::Frustum(g) => g.orientation(),
            Geometry::FrustumOutline(g) => g.orientation(),
        }
    }

    pub fn corners(&self) -> [DVec3; 8] {
        match self {
            Geometry::Frustum(g) => g.corners(),
            Geometry::FrustumOutline(g) => g.corners(),
        }
    }
}

impl From<FrustumGeometry> for Geometry {
    fn from(g: FrustumGeometry) -> Self {
        Geometry::Frustum(g)
    }
}

impl From<FrustumOutlineGeometry> for Geometry {
    fn from(g: FrustumOutlineGeometry) -> Self {
        Geometry::FrustumOutline(g)
    }
}

/// A geometry plus its per-instance color attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryInstance {
    pub geometry: Geometry,
    pub color: Color,
}

impl GeometryInstance {
    pub fn new(geometry: impl Into<Geometry>, color: Color) -> Self {
        Self {
            geometry: geometry.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn shape() -> PerspectiveFrustum {
        PerspectiveFrustum::new(30f64.to_radians(), 1.0, 10.0, 100.0).unwrap()
    }

    #[test]
    fn triangle_indices_cover_every_corner() {
        assert_eq!(FRUSTUM_TRIANGLE_INDICES.len() % 3, 0);
        let used: HashSet<u16> = FRUSTUM_TRIANGLE_INDICES.iter().copied().collect();
        assert_eq!(used, (0..8).collect::<HashSet<u16>>());
    }

    #[test]
    fn edge_indices_are_twelve_distinct_edges() {
        let edges: HashSet<(u16, u16)> = FRUSTUM_EDGE_INDICES
            .chunks(2)
            .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
            .collect();
        assert_eq!(edges.len(), 12);
    }

    #[test]
    fn geometry_normalizes_orientation() {
        let q = DQuat::from_xyzw(0.0, 0.0, 0.0, 2.0);
        let g = FrustumGeometry::new(shape(), DVec3::ZERO, q, VertexFormat::PositionOnly).unwrap();
        assert!((g.orientation().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn geometry_rejects_zero_orientation() {
        let q = DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            FrustumOutlineGeometry::new(shape(), DVec3::ZERO, q),
            Err(RenderError::InvalidOrientation)
        );
    }

    #[test]
    fn geometry_rejects_non_finite_origin() {
        let origin = DVec3::new(f64::NAN, 0.0, 0.0);
        assert_eq!(
            FrustumGeometry::new(shape(), origin, DQuat::IDENTITY, VertexFormat::PositionOnly),
            Err(RenderError::InvalidOrigin)
        );
    }

    #[test]
    fn fill_and_outline_share_corners() {
        let origin = DVec3::new(1.0, 2.0, 3.0);
        let rot = DQuat::from_rotation_x(0.3);
        let fill = FrustumGeometry::new(shape(), origin, rot, VertexFormat::PositionOnly).unwrap();
        let line = FrustumOutlineGeometry::new(shape(), origin, rot).unwrap();
        assert_eq!(fill.corners(), line.corners());
        assert_eq!(fill.indices().len(), 36);
        assert_eq!(line.indices().len(), 24);
    }

    #[test]
    fn instance_wraps_geometry() {
        let line = FrustumOutlineGeometry::new(shape(), DVec3::X, DQuat::IDENTITY).unwrap();
        let inst = GeometryInstance::new(line, Color::RED.with_alpha(0.5));
        assert_eq!(inst.geometry.kind(), "frustum-outline");
        assert_eq!(inst.geometry.origin(), DVec3::X);
        assert_eq!(inst.color.a, 0.5);
    }
}
