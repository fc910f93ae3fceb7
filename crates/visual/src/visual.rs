use std::cell::RefCell;
use std::rc::Rc;

use frustumview_common::{Color, Pose};
use frustumview_render::{
    FrustumGeometry, FrustumOutlineGeometry, GeometryInstance, PerInstanceColorAppearance,
    PerspectiveFrustum, Primitive, PrimitiveCollection, RenderError, VertexFormat,
};
use glam::{DQuat, DVec3};

use crate::error::VisualError;
use crate::options::FrustumOptions;

/// A host scene shared between the application and its visuals.
pub type SharedScene<H> = Rc<RefCell<H>>;

/// Tint of the solid volume.
pub const FILL_COLOR: Color = Color::RED.with_alpha(0.1);
/// Tint of the wireframe outline.
pub const OUTLINE_COLOR: Color = Color::RED.with_alpha(0.5);

const FILL_APPEARANCE: PerInstanceColorAppearance = PerInstanceColorAppearance::new(true, true);
const OUTLINE_APPEARANCE: PerInstanceColorAppearance =
    PerInstanceColorAppearance::new(false, true);

/// Whether a visual currently has primitives in its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Unregistered,
    Registered,
}

/// The two primitives a visual keeps registered: solid volume and outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitivePair<T> {
    pub fill: T,
    pub outline: T,
}

/// A camera frustum drawn into a host scene.
///
/// Owns its pose, its projection parameters, and the handles of the
/// primitives it registered. The host is shared and never destroyed here;
/// dropping a visual leaves whatever is registered in place, so call
/// [`clear`](Self::clear) first to take it off screen.
///
/// # Invariants
/// - `registered` is `None` or exactly the fill/outline pair built from the
///   current pose and parameters.
/// - Field of view, near, far, and aspect ratio never change after `new`.
pub struct FrustumVisual<H: PrimitiveCollection> {
    host: SharedScene<H>,
    pose: Pose,
    fov_degrees: f64,
    near: f64,
    far: f64,
    aspect_ratio: f64,
    registered: Option<PrimitivePair<H::Handle>>,
}

impl<H: PrimitiveCollection> FrustumVisual<H> {
    /// Store the options and register the frustum with the host.
    ///
    /// Fails with [`VisualError::MissingOption`] if a required option is
    /// unset, or with the host's geometry error for a degenerate shape. The
    /// host is untouched on failure.
    pub fn new(options: FrustumOptions<H>) -> Result<Self, VisualError> {
        let host = options.host.ok_or(VisualError::MissingOption("host"))?;
        let position = options
            .position
            .ok_or(VisualError::MissingOption("position"))?;
        let orientation = options
            .orientation
            .ok_or(VisualError::MissingOption("orientation"))?;
        let aspect_ratio = options
            .aspect_ratio
            .ok_or(VisualError::MissingOption("aspect_ratio"))?;

        let mut visual = Self {
            host,
            pose: Pose::new(position, orientation),
            fov_degrees: options.fov_degrees,
            near: options.near,
            far: options.far,
            aspect_ratio,
            registered: None,
        };
        visual.rebuild()?;
        Ok(visual)
    }

    /// Move the frustum and rebuild its primitives.
    ///
    /// The pose is only stored once the new pair is registered. A degenerate
    /// pose or a busy host leaves the visual exactly as it was. If the host
    /// refuses one of the new primitives, the old pair is already gone: the
    /// visual is left `Unregistered` at its previous pose.
    pub fn update(&mut self, position: DVec3, orientation: DQuat) -> Result<(), VisualError> {
        let pose = Pose::new(position, orientation);
        let (fill, outline) = self.build_primitives(pose)?;
        self.swap(pose, fill, outline)
    }

    /// Replace whatever is registered with primitives for the current state.
    ///
    /// Equivalent to [`clear`](Self::clear) followed by [`add`](Self::add).
    pub fn rebuild(&mut self) -> Result<(), VisualError> {
        self.add()
    }

    /// Build primitives for the current pose and register them.
    ///
    /// A pair that is already registered is removed first, so the host
    /// never holds more than one pair for this visual.
    pub fn add(&mut self) -> Result<(), VisualError> {
        let (fill, outline) = self.build_primitives(self.pose)?;
        self.swap(self.pose, fill, outline)
    }

    /// Remove both primitives from the host. No-op when nothing is registered.
    ///
    /// Fails with [`VisualError::HostBusy`], keeping the pair registered, if
    /// the shared scene is borrowed elsewhere.
    pub fn clear(&mut self) -> Result<(), VisualError> {
        if self.registered.is_none() {
            return Ok(());
        }
        let mut host = self
            .host
            .try_borrow_mut()
            .map_err(|_| VisualError::HostBusy)?;
        let Some(pair) = self.registered.take() else {
            return Ok(());
        };
        for handle in [&pair.fill, &pair.outline] {
            if !host.remove(handle) {
                tracing::warn!(?handle, "frustum primitive was already gone from the host");
            }
        }
        tracing::debug!(fill = ?pair.fill, outline = ?pair.outline, "frustum deregistered");
        Ok(())
    }

    pub fn state(&self) -> VisualState {
        if self.registered.is_some() {
            VisualState::Registered
        } else {
            VisualState::Unregistered
        }
    }

    pub fn is_registered(&self) -> bool {
        self.registered.is_some()
    }

    /// Handles of the registered pair, if any.
    pub fn registered(&self) -> Option<&PrimitivePair<H::Handle>> {
        self.registered.as_ref()
    }

    pub fn host(&self) -> &SharedScene<H> {
        &self.host
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> DVec3 {
        self.pose.position
    }

    pub fn orientation(&self) -> DQuat {
        self.pose.orientation
    }

    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Projection shape built from the construction-time parameters.
    pub fn shape(&self) -> Result<PerspectiveFrustum, RenderError> {
        PerspectiveFrustum::new(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// World-space corners of the current frustum.
    pub fn corners(&self) -> Result<[DVec3; 8], RenderError> {
        let geometry = FrustumOutlineGeometry::new(
            self.shape()?,
            self.pose.position,
            self.pose.orientation,
        )?;
        Ok(geometry.corners())
    }

    /// Describe the fill and outline primitives for `pose` without touching the host.
    fn build_primitives(&self, pose: Pose) -> Result<(Primitive, Primitive), RenderError> {
        let shape = self.shape()?;
        tracing::trace!(
            fov = shape.fov(),
            aspect_ratio = shape.aspect_ratio(),
            near = shape.near(),
            far = shape.far(),
            "frustum shape"
        );

        let volume = FrustumGeometry::new(
            shape,
            pose.position,
            pose.orientation,
            VertexFormat::PositionOnly,
        )?;
        let outline = FrustumOutlineGeometry::new(shape, pose.position, pose.orientation)?;

        let fill = Primitive::new(
            vec![GeometryInstance::new(volume, FILL_COLOR)],
            FILL_APPEARANCE,
            false,
        )?;
        let outline = Primitive::new(
            vec![GeometryInstance::new(outline, OUTLINE_COLOR)],
            OUTLINE_APPEARANCE,
            false,
        )?;
        Ok((fill, outline))
    }

    /// Deregister the old pair and register the new one, fill first.
    ///
    /// `pose` becomes the visual's pose only when both adds succeed.
    fn swap(&mut self, pose: Pose, fill: Primitive, outline: Primitive) -> Result<(), VisualError> {
        let _span = tracing::debug_span!("frustum_swap").entered();
        self.clear()?;

        let mut host = self
            .host
            .try_borrow_mut()
            .map_err(|_| VisualError::HostBusy)?;
        let fill = host.add(fill)?;
        let outline = match host.add(outline) {
            Ok(handle) => handle,
            Err(e) => {
                if !host.remove(&fill) {
                    tracing::warn!(handle = ?fill, "frustum fill vanished before rollback");
                }
                return Err(e.into());
            }
        };
        tracing::debug!(
            ?fill,
            ?outline,
            x = pose.position.x,
            y = pose.position.y,
            z = pose.position.z,
            "frustum registered"
        );
        self.pose = pose;
        self.registered = Some(PrimitivePair { fill, outline });
        Ok(())
    }
}
