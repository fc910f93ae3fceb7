use crate::scene::ScenePrimitives;

/// Renderer-agnostic interface over a scene's render list.
///
/// The renderer reads registered primitives and produces output. It never
/// adds or removes primitives; the render list is owned by the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given render list.
    fn render(&self, scene: &ScenePrimitives) -> Self::Output;
}

/// Text renderer for CLI output, logging, and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &ScenePrimitives) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "=== Scene (primitives={}, events={}) ===\n",
            scene.len(),
            scene.events().len()
        ));

        for (id, primitive) in scene.iter() {
            let appearance = primitive.appearance();
            for instance in primitive.geometry_instances() {
                let o = instance.geometry.origin();
                let shape = instance.geometry.frustum();
                out.push_str(&format!(
                    "  [{}] {:<15} {} closed={} flat={} async={} apex=({:.2}, {:.2}, {:.2}) fov={:.4} aspect={:.3} near={} far={}\n",
                    id.short(),
                    instance.geometry.kind(),
                    instance.color,
                    appearance.closed,
                    appearance.flat,
                    primitive.asynchronous(),
                    o.x,
                    o.y,
                    o.z,
                    shape.fov(),
                    shape.aspect_ratio(),
                    shape.near(),
                    shape.far()
                ));
            }
        }

        out
    }
}
