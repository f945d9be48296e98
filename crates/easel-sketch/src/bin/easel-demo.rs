//! Easel Demo - Main Entry Point
//!
//! `easel-demo` opens a window; `easel-demo --out frame.png [--frames N]`
//! renders headlessly and writes the last frame.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::PathBuf;

use anyhow::{bail, Context};
use easel_sketch::{
    Arc, ArcMode, BlendMode, Color, Graphics, Point, Polygon, Rectangle, Runner, ShapeMode,
    Sketch, SketchConfig, SketchContext, StrokeCap,
};
use tracing_subscriber::EnvFilter;

/// Orbiting shapes, a clipped curve and a caption
struct Orbit {
    angle: f32,
}

impl Sketch for Orbit {
    fn setup(&mut self, g: &mut SketchContext) {
        g.stroke_cap(StrokeCap::Round);
        g.text_size(18.0);
    }

    fn draw(&mut self, g: &mut SketchContext) {
        let center = g.center();
        let (width, height) = (g.width(), g.height());
        let caption = format!("frame {}", g.frame_count());
        self.angle = (self.angle + 0.03) % TAU;

        g.background(Color::gray(24));

        // Sun
        g.no_stroke();
        g.fill(Color::rgb(250, 190, 60));
        g.circle_centered(center, 40.0);

        // Orbiting planet
        g.push();
        g.translate(center);
        g.rotate(self.angle);
        g.fill(Color::rgb(80, 160, 250));
        g.circle_centered(Point::new(120.0, 0.0), 14.0);
        g.pop();

        // Swept arc behind the planet
        g.no_fill();
        g.stroke(Color::rgba(80, 160, 250, 120));
        g.stroke_weight(3.0);
        g.arc(Arc::new(center, 120.0, 120.0, self.angle - FRAC_PI_2, self.angle).with_mode(ArcMode::Open));

        // Curve clipped to a hexagon
        g.no_stroke();
        g.fill(Color::rgba(255, 255, 255, 30));
        g.polygon(Polygon::regular(Point::new(80.0, 80.0), 60.0, 6));
        g.clip();
        g.stroke(Color::rgb(240, 90, 120));
        g.stroke_weight(4.0);
        g.no_fill();
        g.begin_shape();
        for i in 0..8 {
            let x = 20.0 + i as f32 * 18.0;
            let y = 80.0 + (self.angle * 3.0 + i as f32).sin() * 40.0;
            g.curve_vertex(Point::new(x, y));
        }
        g.end_shape(ShapeMode::Open);
        g.end_clip();

        // Additive corner marker
        g.blend_mode(BlendMode::Lighter);
        g.no_stroke();
        g.fill(Color::rgba(60, 60, 120, 255));
        g.rectangle(Rectangle::new(width - 60.0, 20.0, 40.0, 40.0));
        g.rectangle(Rectangle::new(width - 50.0, 30.0, 40.0, 40.0));
        g.blend_mode(BlendMode::SourceOver);

        g.fill(Color::WHITE);
        g.text(&caption, Point::new(16.0, height - 36.0));
    }
}

struct Args {
    out: Option<PathBuf>,
    frames: u64,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args { out: None, frames: 1 };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => {
                let path = iter.next().context("--out needs a path")?;
                args.out = Some(PathBuf::from(path));
            }
            "--frames" => {
                let value = iter.next().context("--frames needs a number")?;
                args.frames = value.parse().with_context(|| format!("invalid frame count: {}", value))?;
            }
            other => bail!("unknown argument: {}", other),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let config = SketchConfig::new(480, 360).with_title("Easel Demo");
    let sketch = Orbit { angle: 0.0 };

    match args.out {
        Some(path) => {
            let mut runner = Runner::new(sketch, &config)?;
            let frames = runner.run_frames(args.frames.max(1));
            runner
                .context()
                .surface()
                .pixmap()
                .save_png(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Wrote frame {} to {}", frames, path.display());
        }
        None => run_window(sketch, config)?,
    }

    Ok(())
}

#[cfg(feature = "window")]
fn run_window(sketch: Orbit, config: SketchConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Easel demo...");
    easel_sketch::run_windowed(sketch, config)?;
    Ok(())
}

#[cfg(not(feature = "window"))]
fn run_window(_sketch: Orbit, _config: SketchConfig) -> anyhow::Result<()> {
    bail!("built without the `window` feature; use --out <file.png>")
}
