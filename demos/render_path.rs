//! Builds a sample conveyor path and writes it as a PNG.
//!
//! Usage:
//! ```text
//! cargo run --example render_path                  # writes path.png
//! cargo run --example render_path -- out/loop.png  # custom output
//! RUST_LOG=geopath=trace cargo run --example render_path
//! ```

use geopath::{ArcTessellation, PathBuilder, RenderStyle, Rgba, Turn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("render_path=info".parse().unwrap_or_default())
        .add_directive("geopath=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "path.png".to_owned());

    let mut path = PathBuilder::new();
    path.set_orientation_deg(-15.0)?;
    path.add_linear(120.0)?;
    path.add_rounded_l_shape(80.0, 90.0, 30.0, ArcTessellation::MinArcLength(4.0), Turn::Right)?;
    path.add_s_shape(40.0, 60.0, 40.0, 50.0, Turn::Left)?;
    path.add_rounded_u_shape(70.0, 80.0, 50.0, ArcTessellation::Segments(16), Turn::Right)?;
    path.add_linear_offset_delta(30.0, -20.0)?;

    tracing::info!(
        points = path.count(),
        length = path.length(),
        outline = path.shape(12.0).len(),
        "path built"
    );

    let style = RenderStyle {
        background: Rgba::rgb(255, 255, 255),
        ..RenderStyle::default()
    };
    let pixmap = path.to_pixmap(&style).ok_or("path could not be rendered")?;
    pixmap.save_png(&output)?;
    tracing::info!(%output, "written");
    Ok(())
}
