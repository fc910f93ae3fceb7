use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use frustumview_render::{DebugTextRenderer, Renderer, SceneEvent, ScenePrimitives};
use frustumview_visual::{FrustumConfig, FrustumOptions, FrustumVisual};
use glam::{DQuat, DVec3};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frustumview-cli", about = "CLI tool for frustum visuals")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build a frustum and move it along X, dumping the scene each step
    Demo {
        /// Number of updates to apply
        #[arg(short, long, default_value = "3")]
        steps: u32,
        /// Distance moved along X per update
        #[arg(long, default_value = "10")]
        step_x: f64,
        /// Width/height of the frustum
        #[arg(short, long, default_value = "1.0")]
        aspect: f64,
        /// Field of view in degrees
        #[arg(short, long, default_value = "30")]
        fov: f64,
    },
    /// Load a frustum config file and print its corners and scene dump
    Inspect {
        /// Path to a JSON frustum config
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Info => {
            println!("frustumview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", frustumview_render::crate_info());
            println!("visual: {}", frustumview_visual::crate_info());
        }
        Commands::Demo {
            steps,
            step_x,
            aspect,
            fov,
        } => {
            let scene = Rc::new(RefCell::new(ScenePrimitives::new()));
            let renderer = DebugTextRenderer::new();
            let mut visual = FrustumVisual::new(
                FrustumOptions::new()
                    .host(scene.clone())
                    .position(DVec3::ZERO)
                    .orientation(DQuat::IDENTITY)
                    .fov_degrees(fov)
                    .aspect_ratio(aspect),
            )?;
            tracing::info!(steps, step_x, "frustum demo started");
            print!("{}", renderer.render(&scene.borrow()));

            for step in 1..=steps {
                let position = DVec3::new(step_x * f64::from(step), 0.0, 0.0);
                visual.update(position, DQuat::IDENTITY)?;

                let events = scene.borrow_mut().drain_events();
                let added = events
                    .iter()
                    .filter(|e| matches!(e, SceneEvent::Added { .. }))
                    .count();
                println!(
                    "step {step}: removed={} added={}",
                    events.len() - added,
                    added
                );
                print!("{}", renderer.render(&scene.borrow()));
            }

            visual.clear()?;
            println!(
                "After clear: state={:?}, primitives={}",
                visual.state(),
                scene.borrow().len()
            );
        }
        Commands::Inspect { config } => {
            let cfg = FrustumConfig::load(&config)?;
            tracing::info!(path = %config.display(), "loaded frustum config");

            let scene = Rc::new(RefCell::new(ScenePrimitives::new()));
            let visual = FrustumVisual::new(cfg.into_options(scene.clone()))?;

            let shape = visual.shape()?;
            println!(
                "Frustum: fov={:.2}deg ({:.6} rad) fovy={:.6} aspect={} near={} far={}",
                visual.fov_degrees(),
                shape.fov(),
                shape.fovy(),
                shape.aspect_ratio(),
                shape.near(),
                shape.far()
            );
            let projection = shape.projection_matrix();
            println!("Projection:");
            for row in 0..4 {
                let r = projection.row(row);
                println!("  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]", r.x, r.y, r.z, r.w);
            }
            for (i, c) in visual.corners()?.iter().enumerate() {
                let plane = if i < 4 { "near" } else { "far " };
                println!("  {plane} [{i}] ({:.3}, {:.3}, {:.3})", c.x, c.y, c.z);
            }
            print!("{}", DebugTextRenderer::new().render(&scene.borrow()));
        }
    }

    Ok(())
}
