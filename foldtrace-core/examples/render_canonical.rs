use foldtrace::{RenderThreading, SceneConfig, render, write_png};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let scene = SceneConfig::default();
    let frame = render(&scene, 512, 384, &RenderThreading::default())?;
    write_png(&frame, "target/canonical.png")?;

    eprintln!("wrote target/canonical.png");
    Ok(())
}
