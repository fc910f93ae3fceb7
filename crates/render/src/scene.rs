use frustumview_common::PrimitiveId;

use crate::error::RenderError;
use crate::primitive::Primitive;

/// The render list of a host scene.
///
/// Anything that can accept primitives and later drop them by handle can host
/// a visual. Engines implement this over their own scene graph; tests
/// implement it over a counter.
pub trait PrimitiveCollection {
    /// Opaque handle returned by `add`.
    type Handle: Clone + std::fmt::Debug;

    /// Register a primitive for drawing.
    fn add(&mut self, primitive: Primitive) -> Result<Self::Handle, RenderError>;

    /// Deregister a primitive. Returns false if the handle was not registered.
    fn remove(&mut self, handle: &Self::Handle) -> bool;
}

/// A record of every change to the render list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Added { id: PrimitiveId },
    Removed { id: PrimitiveId },
}

/// In-memory render list.
///
/// Keeps primitives in insertion order, which is also draw order.
#[derive(Debug, Clone, Default)]
pub struct ScenePrimitives {
    primitives: Vec<(PrimitiveId, Primitive)>,
    /// Append-only log of adds and removes.
    event_log: Vec<SceneEvent>,
}

impl ScenePrimitives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.primitives.iter().any(|(pid, _)| *pid == id)
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, p)| p)
    }

    /// Registered primitives in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives.iter().map(|(id, p)| (*id, p))
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[SceneEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.event_log)
    }
}

impl PrimitiveCollection for ScenePrimitives {
    type Handle = PrimitiveId;

    fn add(&mut self, primitive: Primitive) -> Result<PrimitiveId, RenderError> {
        let id = PrimitiveId::new();
        self.primitives.push((id, primitive));
        self.event_log.push(SceneEvent::Added { id });
        tracing::trace!(id = %id.short(), count = self.primitives.len(), "primitive added");
        Ok(id)
    }

    fn remove(&mut self, handle: &PrimitiveId) -> bool {
        let Some(index) = self.primitives.iter().position(|(id, _)| id == handle) else {
            return false;
        };
        self.primitives.remove(index);
        self.event_log.push(SceneEvent::Removed { id: *handle });
        tracing::trace!(id = %handle.short(), count = self.primitives.len(), "primitive removed");
        true
    }
}
