use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use foldtrace::{RenderThreading, SceneConfig};

#[derive(Parser, Debug)]
#[command(name = "foldtrace", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the fractal scene to a PNG.
    Render(RenderArgs),
    /// Print the canonical scene configuration as JSON.
    Scene,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output image width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Output image height in pixels.
    #[arg(long, default_value_t = 384)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Optional scene JSON (defaults to the canonical scene).
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Render scanlines on a worker pool (pass `--parallel false` for
    /// sequential rendering).
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    parallel: bool,

    /// Override worker thread count (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Scene => cmd_scene(),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = match &args.scene {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        None => SceneConfig::default(),
    };

    let threading = RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let frame = foldtrace::render(&scene, args.width, args.height, &threading)?;
    foldtrace::write_png(&frame, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_scene() -> anyhow::Result<()> {
    let scene = SceneConfig::default();
    let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
    println!("{json}");
    Ok(())
}
