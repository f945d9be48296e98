//! tiny-skia rasterizer
//!
//! Paints into an RGBA pixmap. The pixmap is shared with the snapshots taken
//! from it and copied on the first write after a snapshot.

use std::sync::Arc;

use easel_text::{TextEngine, DEFAULT_FONT_SIZE};
use tiny_skia::{FillRule, Mask, Paint, Path, Pixmap, PixmapPaint, Transform};

use crate::color::Color;
use crate::compositing::BlendMode;
use crate::config::CanvasConfig;
use crate::geometry::Size;
use crate::image::{Image, ImageSource};
use crate::raster::{Rasterizer, TextRun};
use crate::style::StrokeStyle;
use crate::{CanvasError, Result};

/// Saved graphics state
#[derive(Clone)]
struct GraphicsState {
    transform: Transform,
    clip: Option<Mask>,
    blend_mode: BlendMode,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
            clip: None,
            blend_mode: BlendMode::default(),
        }
    }
}

/// Rasterizer backed by a tiny-skia pixmap
pub struct SkiaRasterizer {
    pixmap: Arc<Pixmap>,
    current: GraphicsState,
    stack: Vec<GraphicsState>,
    anti_alias: bool,
    /// Loaded on first use unless provided
    text: Option<Arc<TextEngine>>,
}

impl SkiaRasterizer {
    /// Transparent surface of the given size
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap: Arc::new(pixmap),
            current: GraphicsState::default(),
            stack: Vec::new(),
            anti_alias: true,
            text: None,
        })
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        let mut raster = Self::new(config.width, config.height)?;
        raster.anti_alias = config.anti_alias;
        if config.background.is_visible() {
            raster.clear(config.background);
        }
        Ok(raster)
    }

    /// Share an already loaded text engine
    pub fn with_text_engine(mut self, engine: Arc<TextEngine>) -> Self {
        self.text = Some(engine);
        self
    }

    /// Text engine in use, if one was provided or already loaded
    pub fn loaded_text_engine(&self) -> Option<Arc<TextEngine>> {
        self.text.clone()
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Unpremultiplied color at a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Number of saved states
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn transform(&self) -> Transform {
        self.current.transform
    }

    pub fn is_clipped(&self) -> bool {
        self.current.clip.is_some()
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = self.anti_alias;
        paint.blend_mode = self.current.blend_mode.to_skia();
        paint
    }

    fn text_engine(&mut self) -> Arc<TextEngine> {
        let engine = self.text.get_or_insert_with(|| {
            tracing::info!("Loading system fonts");
            Arc::new(TextEngine::with_system_fonts())
        });
        Arc::clone(engine)
    }

    fn fill_with(&mut self, path: &Path, color: Color, transform: Transform) {
        let paint = self.paint(color);
        let mask = self.current.clip.as_ref();
        Arc::make_mut(&mut self.pixmap).fill_path(path, &paint, FillRule::Winding, transform, mask);
    }

    fn stroke_with(&mut self, path: &Path, color: Color, style: &StrokeStyle, transform: Transform) {
        let paint = self.paint(color);
        let stroke = style.to_skia();
        let mask = self.current.clip.as_ref();
        Arc::make_mut(&mut self.pixmap).stroke_path(path, &paint, &stroke, transform, mask);
    }
}

impl Rasterizer for SkiaRasterizer {
    fn size(&self) -> Size {
        Size::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.fill_with(path, color, self.current.transform);
    }

    fn stroke_path(&mut self, path: &Path, color: Color, style: &StrokeStyle) {
        self.stroke_with(path, color, style, self.current.transform);
    }

    fn clip_path(&mut self, path: &Path) {
        let transform = self.current.transform;
        let anti_alias = self.anti_alias;
        if let Some(mask) = self.current.clip.as_mut() {
            mask.intersect_path(path, FillRule::Winding, anti_alias, transform);
            return;
        }

        if let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) {
            mask.fill_path(path, FillRule::Winding, anti_alias, transform);
            self.current.clip = Some(mask);
        }
    }

    fn reset_clip(&mut self) {
        self.current.clip = None;
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current.transform = self.current.transform.pre_translate(dx, dy);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.current.transform = self.current.transform.pre_scale(sx, sy);
    }

    fn rotate(&mut self, angle: f32) {
        // tiny-skia rotates in degrees
        self.current.transform = self.current.transform.pre_concat(Transform::from_rotate(angle.to_degrees()));
    }

    fn save(&mut self) {
        self.stack.push(self.current.clone());
    }

    fn restore(&mut self) -> Result<()> {
        self.current = self.stack.pop().ok_or(CanvasError::EmptySaveStack)?;
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.current.blend_mode = mode;
    }

    fn clear(&mut self, color: Color) {
        Arc::make_mut(&mut self.pixmap).fill(color.to_skia());
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        if run.content.is_empty() || !run.paint.is_visible() {
            return Ok(());
        }

        let size = if run.size.is_finite() && run.size > 0.0 {
            run.size
        } else {
            tracing::warn!("Invalid text size {}, using {}", run.size, DEFAULT_FONT_SIZE);
            DEFAULT_FONT_SIZE
        };

        let engine = self.text_engine();
        let layout = engine.layout(&run.content, run.family.as_deref(), size)?;
        let Some(path) = layout.path else {
            return Ok(());
        };

        let transform = self.current.transform.pre_translate(run.origin.x, run.origin.y);
        if let Some(fill) = run.paint.fill {
            self.fill_with(&path, fill, transform);
        }
        if let Some((color, width)) = run.paint.stroke() {
            self.stroke_with(&path, color, &StrokeStyle::new(width), transform);
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &Image) {
        let paint = PixmapPaint {
            blend_mode: self.current.blend_mode.to_skia(),
            ..PixmapPaint::default()
        };
        let transform = self.current.transform;
        let mask = self.current.clip.as_ref();
        Arc::make_mut(&mut self.pixmap).draw_pixmap(0, 0, image.pixmap().as_ref(), &paint, transform, mask);
    }

    fn snapshot(&self) -> Option<Image> {
        Some(Image::new(Arc::clone(&self.pixmap)))
    }
}

impl ImageSource for SkiaRasterizer {
    fn snapshot(&self) -> Option<Image> {
        Rasterizer::snapshot(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rectangle, ToPath};

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Path {
        Rectangle::new(x, y, w, h).to_path().unwrap()
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            SkiaRasterizer::new(0, 10),
            Err(CanvasError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_rect() {
        let mut raster = SkiaRasterizer::new(50, 50).unwrap();
        raster.fill_path(&rect(10.0, 10.0, 20.0, 20.0), RED);

        assert_eq!(raster.pixel(15, 15), Some(RED));
        assert_eq!(raster.pixel(5, 5), Some(Color::CLEAR));
    }

    #[test]
    fn test_translate_moves_geometry() {
        let mut raster = SkiaRasterizer::new(50, 50).unwrap();
        raster.translate(20.0, 0.0);
        raster.fill_path(&rect(0.0, 0.0, 10.0, 10.0), RED);

        assert_eq!(raster.pixel(25, 5), Some(RED));
        assert_eq!(raster.pixel(5, 5), Some(Color::CLEAR));
    }

    #[test]
    fn test_clip_limits_fill() {
        let mut raster = SkiaRasterizer::new(40, 40).unwrap();
        raster.clip_path(&rect(0.0, 0.0, 20.0, 40.0));
        raster.fill_path(&rect(0.0, 0.0, 40.0, 40.0), BLUE);

        assert_eq!(raster.pixel(10, 10), Some(BLUE));
        assert_eq!(raster.pixel(30, 10), Some(Color::CLEAR));
    }

    #[test]
    fn test_second_clip_intersects() {
        let mut raster = SkiaRasterizer::new(40, 40).unwrap();
        raster.clip_path(&rect(0.0, 0.0, 20.0, 40.0));
        raster.clip_path(&rect(0.0, 0.0, 40.0, 20.0));
        raster.fill_path(&rect(0.0, 0.0, 40.0, 40.0), BLUE);

        assert_eq!(raster.pixel(10, 10), Some(BLUE));
        assert_eq!(raster.pixel(10, 30), Some(Color::CLEAR));
        assert_eq!(raster.pixel(30, 10), Some(Color::CLEAR));
    }

    #[test]
    fn test_restore_pops_clip_and_transform() {
        let mut raster = SkiaRasterizer::new(40, 40).unwrap();
        raster.save();
        raster.translate(5.0, 5.0);
        raster.clip_path(&rect(0.0, 0.0, 5.0, 5.0));
        raster.restore().unwrap();

        assert!(!raster.is_clipped());
        assert_eq!(raster.transform(), Transform::identity());
        assert!(matches!(raster.restore(), Err(CanvasError::EmptySaveStack)));
    }

    #[test]
    fn test_clear_ignores_clip() {
        let mut raster = SkiaRasterizer::new(20, 20).unwrap();
        raster.clip_path(&rect(0.0, 0.0, 5.0, 5.0));
        raster.clear(RED);
        assert_eq!(raster.pixel(19, 19), Some(RED));
    }

    #[test]
    fn test_snapshot_is_copy_on_write() {
        let mut raster = SkiaRasterizer::new(10, 10).unwrap();
        raster.clear(RED);
        let before = Rasterizer::snapshot(&raster).unwrap();

        raster.clear(BLUE);
        assert_eq!(before.pixel(0, 0), Some(RED));
        assert_eq!(raster.pixel(0, 0), Some(BLUE));
    }

    #[test]
    fn test_draw_image_at_current_origin() {
        let mut source = SkiaRasterizer::new(4, 4).unwrap();
        source.clear(RED);
        let image = Rasterizer::snapshot(&source).unwrap();

        let mut raster = SkiaRasterizer::new(20, 20).unwrap();
        raster.translate(10.0, 10.0);
        raster.draw_image(&image);

        assert_eq!(raster.pixel(11, 11), Some(RED));
        assert_eq!(raster.pixel(1, 1), Some(Color::CLEAR));
    }
}
