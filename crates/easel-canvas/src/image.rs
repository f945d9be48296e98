//! Images
//!
//! Snapshots of a canvas surface that other canvases can composite.

use std::sync::Arc;

use tiny_skia::Pixmap;

use crate::color::Color;

/// Immutable snapshot of a surface.
///
/// Cloning is cheap: the pixel buffer is shared. The canvas the snapshot was
/// taken from copies its buffer on the next write.
#[derive(Debug, Clone)]
pub struct Image {
    pixels: Arc<Pixmap>,
}

impl Image {
    pub fn new(pixels: Arc<Pixmap>) -> Self {
        Self { pixels }
    }

    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self::new(Arc::new(pixmap))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixels
    }

    /// Premultiplied RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixels.data()
    }

    /// Unpremultiplied color at a pixel, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixels.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Whether two snapshots share the same pixel buffer
    pub fn shares_pixels(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.shares_pixels(other)
            || (self.width() == other.width()
                && self.height() == other.height()
                && self.data() == other.data())
    }
}

/// Anything that can provide a snapshot for the `image` command
pub trait ImageSource {
    /// `None` when there is no surface to read
    fn snapshot(&self) -> Option<Image>;
}

impl ImageSource for Image {
    fn snapshot(&self) -> Option<Image> {
        Some(self.clone())
    }
}

impl ImageSource for Pixmap {
    fn snapshot(&self) -> Option<Image> {
        Some(Image::from_pixmap(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_is_demultiplied() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(255, 0, 0, 255));
        let image = Image::from_pixmap(pixmap);

        assert_eq!(image.pixel(1, 1), Some(Color::rgb(255, 0, 0)));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn test_clone_shares_pixels() {
        let image = Image::from_pixmap(Pixmap::new(1, 1).unwrap());
        let copy = image.snapshot().unwrap();
        assert!(copy.shares_pixels(&image));
    }
}
