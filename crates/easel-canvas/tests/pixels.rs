//! End-to-end rendering through the tiny-skia rasterizer.

use easel_canvas::{
    Canvas, CanvasConfig, Color, Graphics, ImageSource, Point, Rectangle, SkiaRasterizer,
};

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 255, 0);

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas::new(width, height).unwrap()
}

fn pixel(canvas: &Canvas, x: u32, y: u32) -> Color {
    canvas.rasterizer().pixel(x, y).unwrap()
}

#[test]
fn test_zero_sized_canvas_is_an_error() {
    assert!(Canvas::new(0, 0).is_err());
}

#[test]
fn test_nothing_is_drawn_before_dispatch() {
    let mut canvas = canvas(20, 20);
    canvas.background(RED);
    assert_eq!(pixel(&canvas, 10, 10), Color::CLEAR);

    canvas.dispatch();
    assert_eq!(pixel(&canvas, 10, 10), RED);
}

#[test]
fn test_config_background_is_applied_up_front() {
    let config = CanvasConfig::new(8, 8).with_background(Color::WHITE);
    let canvas = Canvas::from_config(&config).unwrap();
    assert_eq!(pixel(&canvas, 4, 4), Color::WHITE);
}

#[test]
fn test_filled_rectangle() {
    let mut canvas = canvas(40, 40);
    canvas.background(Color::WHITE);
    canvas.no_stroke();
    canvas.fill(RED);
    canvas.rectangle(Rectangle::new(10.0, 10.0, 20.0, 20.0));
    canvas.dispatch();

    assert_eq!(pixel(&canvas, 20, 20), RED);
    assert_eq!(pixel(&canvas, 5, 5), Color::WHITE);
}

#[test]
fn test_clip_restricts_later_drawing() {
    let mut canvas = canvas(40, 40);
    canvas.no_stroke();
    canvas.fill(RED);
    canvas.rectangle(Rectangle::new(0.0, 0.0, 20.0, 40.0));
    canvas.clip();
    canvas.fill(GREEN);
    canvas.rectangle(Rectangle::new(0.0, 0.0, 40.0, 40.0));
    canvas.end_clip();
    canvas.dispatch();

    assert_eq!(pixel(&canvas, 10, 10), GREEN);
    assert_eq!(pixel(&canvas, 30, 10), Color::CLEAR);
}

#[test]
fn test_translate_inside_push_does_not_leak() {
    let mut canvas = canvas(40, 40);
    canvas.no_stroke();
    canvas.fill(RED);
    canvas.push();
    canvas.translate(Point::new(20.0, 20.0));
    canvas.rectangle(Rectangle::new(0.0, 0.0, 10.0, 10.0));
    canvas.pop();
    canvas.fill(GREEN);
    canvas.rectangle(Rectangle::new(0.0, 0.0, 10.0, 10.0));
    canvas.dispatch();

    assert_eq!(pixel(&canvas, 25, 25), RED);
    assert_eq!(pixel(&canvas, 5, 5), GREEN);
}

#[test]
fn test_image_composites_another_canvas() {
    let mut source = canvas(10, 10);
    source.background(RED);
    source.dispatch();

    let mut target = canvas(30, 30);
    target.translate(Point::new(15.0, 15.0));
    target.image(&source);
    target.dispatch();

    assert_eq!(pixel(&target, 20, 20), RED);
    assert_eq!(pixel(&target, 5, 5), Color::CLEAR);
}

#[test]
fn test_image_snapshot_is_taken_when_issued() {
    let mut source = canvas(4, 4);
    source.background(RED);
    source.dispatch();

    let mut target = canvas(4, 4);
    target.image(&source);

    // Later frames of the source do not change the queued snapshot
    source.background(GREEN);
    source.dispatch();
    target.dispatch();

    assert_eq!(pixel(&target, 1, 1), RED);
}

#[test]
fn test_snapshot_survives_later_frames() {
    let mut canvas = canvas(4, 4);
    canvas.background(RED);
    canvas.dispatch();
    let snapshot = canvas.snapshot().unwrap();

    canvas.background(GREEN);
    canvas.dispatch();
    assert_eq!(snapshot.pixel(0, 0), Some(RED));
    assert_eq!(pixel(&canvas, 0, 0), GREEN);
}

#[test]
fn test_text_renders_glyphs() {
    let engine = easel_text::TextEngine::with_system_fonts();
    if engine.fonts().is_empty() {
        return;
    }

    let raster = SkiaRasterizer::new(120, 60)
        .unwrap()
        .with_text_engine(std::sync::Arc::new(engine));
    let mut canvas = Canvas::with_rasterizer(raster, &CanvasConfig::new(120, 60));
    canvas.background(Color::WHITE);
    canvas.fill(Color::BLACK);
    canvas.no_stroke();
    canvas.text_size(40.0);
    canvas.text("HH", Point::new(5.0, 5.0));
    canvas.dispatch();

    assert!(canvas.diagnostics().is_empty());
    let inked = (0..60)
        .flat_map(|y| (0..120).map(move |x| (x, y)))
        .filter(|&(x, y)| pixel(&canvas, x, y).r < 128)
        .count();
    assert!(inked > 0);
}
