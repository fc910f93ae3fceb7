use crate::error::RenderError;
use crate::geometry::GeometryInstance;

/// Shading for instances that carry their own color attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerInstanceColorAppearance {
    /// Geometry is a closed volume, so back faces can be culled.
    pub closed: bool,
    /// Unlit shading.
    pub flat: bool,
}

impl PerInstanceColorAppearance {
    pub const fn new(closed: bool, flat: bool) -> Self {
        Self { closed, flat }
    }
}

impl Default for PerInstanceColorAppearance {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// A renderable built from geometry instances sharing one appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    geometry_instances: Vec<GeometryInstance>,
    appearance: PerInstanceColorAppearance,
    asynchronous: bool,
}

impl Primitive {
    /// `asynchronous: false` asks the host to tessellate before the next frame.
    pub fn new(
        geometry_instances: Vec<GeometryInstance>,
        appearance: PerInstanceColorAppearance,
        asynchronous: bool,
    ) -> Result<Self, RenderError> {
        if geometry_instances.is_empty() {
            return Err(RenderError::EmptyPrimitive);
        }
        Ok(Self {
            geometry_instances,
            appearance,
            asynchronous,
        })
    }

    pub fn geometry_instances(&self) -> &[GeometryInstance] {
        &self.geometry_instances
    }

    pub fn appearance(&self) -> PerInstanceColorAppearance {
        self.appearance
    }

    pub fn asynchronous(&self) -> bool {
        self.asynchronous
    }
}
