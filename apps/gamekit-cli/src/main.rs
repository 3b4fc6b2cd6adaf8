use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use gamekit_demos::{Demo, DemoOptions, FrameLoop, InputScript};
use gamekit_geometry::{GeometrySpec, Mesh, presets};
use gamekit_input::{Controller, load_bindings, standard_bindings};
use gamekit_kernel::{Arena, ArenaConfig};
use gamekit_render::{DebugTextRenderer, JsonRenderer, NullRenderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gamekit", about = "3D game tutorial toolkit")]
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
    /// Assemble a geometry and summarise the mesh
    Geometry {
        /// Built-in preset name
        #[arg(short, long, conflicts_with = "spec")]
        preset: Option<String>,
        /// Geometry spec file (.json, .yaml)
        #[arg(short, long)]
        spec: Option<PathBuf>,
    },
    /// List the tutorial demos
    Demos,
    /// Run one demo headless
    Run {
        /// Demo name (see `demos`)
        demo: String,
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Input script (YAML list of {frame, key, pressed})
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Arena config (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Key binding table (YAML or JSON)
        #[arg(short, long)]
        bindings: Option<PathBuf>,
        /// Frame output format
        #[arg(short, long, value_enum, default_value = "text")]
        render: RenderFormat,
        /// Print every Nth frame
        #[arg(long, default_value = "1")]
        every: u64,
    },
    /// Run the arena twice with the same seed and compare state hashes
    Verify {
        #[arg(short, long, default_value = "600")]
        frames: u64,
        #[arg(short, long, default_value = "42")]
        seed: u64,
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RenderFormat {
    Text,
    Json,
    None,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Info => {
            println!("gamekit v{}", env!("CARGO_PKG_VERSION"));
            println!("geometry presets: {}", presets::PRESET_NAMES.join(", "));
            println!("standard bindings: {}", standard_bindings().len());
            println!("demos: {}", Demo::ALL.len());
            println!("render: {}", gamekit_render::crate_info());
            println!("scenes: {}", gamekit_demos::crate_info());
        }
        Commands::Geometry { preset, spec } => {
            let (label, mesh) = match (preset, spec) {
                (Some(name), _) => {
                    let mesh = presets::by_name(&name).with_context(|| {
                        let known = presets::PRESET_NAMES.join(", ");
                        format!("unknown preset '{name}' (one of: {known})")
                    })?;
                    (name, mesh)
                }
                (None, Some(path)) => {
                    let spec = GeometrySpec::load(&path)
                        .with_context(|| format!("loading geometry spec {}", path.display()))?;
                    println!("parts: {}", spec.parts.len());
                    (path.display().to_string(), gamekit_geometry::make_geometry(&spec))
                }
                (None, None) => bail!("pass --preset or --spec"),
            };
            print_mesh_summary(&label, &mesh);
        }
        Commands::Demos => {
            for demo in Demo::ALL {
                println!("{:<16} {}", demo.name(), demo.description());
            }
        }
        Commands::Run {
            demo,
            frames,
            seed,
            input,
            config,
            bindings,
            render,
            every,
        } => {
            let demo: Demo = demo.parse()?;
            let options = DemoOptions {
                seed,
                config: load_config(config.as_deref())?,
            };
            let controller = match bindings {
                Some(path) => Controller::new(
                    load_bindings(&path)
                        .with_context(|| format!("loading bindings {}", path.display()))?,
                ),
                None => Controller::standard(),
            };
            let script = load_script(input.as_deref())?;

            tracing::info!(%demo, frames, seed, events = script.len(), "running demo");
            let mut frame_loop = FrameLoop::new(demo.build(&options), controller, script);
            let every = every.max(1);

            for _ in 0..frames {
                let number = frame_loop.frame();
                let show = number % every == 0 || number + 1 == frames;
                match render {
                    RenderFormat::Text => {
                        let out = frame_loop.tick(&DebugTextRenderer::new());
                        if show {
                            print!("{out}");
                        }
                    }
                    RenderFormat::Json => {
                        let out = frame_loop.tick(&JsonRenderer)?;
                        if show {
                            println!("{out}");
                        }
                    }
                    RenderFormat::None => frame_loop.tick(&NullRenderer),
                }
            }
            println!("Ran {} frames of {demo}", frame_loop.frame());
        }
        Commands::Verify {
            frames,
            seed,
            input,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let script = load_script(input.as_deref())?;
            println!("Determinism check: seed={seed}, frames={frames}");

            let (h1, score1) = run_arena(config.clone(), seed, &script, frames);
            let (h2, score2) = run_arena(config, seed, &script, frames);
            println!("Run 1: hash={h1:#018x} score={score1}");
            println!("Run 2: hash={h2:#018x} score={score2}");
            if h1 != h2 {
                bail!("MISMATCH: runs diverged");
            }
            println!("Match: OK");
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ArenaConfig> {
    match path {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading arena config {}", path.display())),
        None => Ok(ArenaConfig::default()),
    }
}

fn load_script(path: Option<&Path>) -> anyhow::Result<InputScript> {
    match path {
        Some(path) => InputScript::load(path)
            .with_context(|| format!("loading input script {}", path.display())),
        None => Ok(InputScript::new()),
    }
}

/// Drive a bare arena with the standard controls and return its final hash
/// and score.
fn run_arena(config: ArenaConfig, seed: u64, script: &InputScript, frames: u64) -> (u64, i64) {
    let mut arena = Arena::new(config, seed);
    let mut controller = Controller::standard();
    let mut events = 0;
    for frame in 0..frames {
        for event in script.events_at(frame) {
            controller.handle(event);
        }
        arena.step(&controller.snapshot());
        events += arena.drain_events().len();
    }
    tracing::debug!(seed, frames, events, "arena run finished");
    (arena.state_hash(), arena.score())
}

fn print_mesh_summary(label: &str, mesh: &Mesh) {
    println!("geometry: {label}");
    println!("vertices: {}", mesh.vertex_count());
    println!("triangles: {}", mesh.triangle_count());
    let sphere = mesh.bounding_sphere();
    println!(
        "bounding sphere: center=({:.3}, {:.3}, {:.3}) radius={:.3}",
        sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius
    );
    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "bounding box: min=({:.3}, {:.3}, {:.3}) max=({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
    println!("vertex buffer: {} bytes", mesh.vertex_bytes().len());
}
