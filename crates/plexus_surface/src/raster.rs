//! CPU raster backend on top of tiny-skia.
//!
//! Renders the same command vocabulary the recording surface captures into
//! an RGBA `Pixmap`. Used by the demo binary and anywhere a real image is
//! wanted without a GPU.

use plexus_shared::{Color, Vec2};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::surface::Surface;

/// A surface backed by a tiny-skia pixmap.
pub struct RasterSurface {
    pixmap: Pixmap,
    backdrop: Color,
}

impl RasterSurface {
    /// Creates a raster surface of the given pixel size.
    ///
    /// Returns `None` for a zero-sized viewport, which callers treat the
    /// same way as a missing 2D context: no surface, no field loop.
    #[must_use]
    pub fn new(width: u32, height: u32, backdrop: Color) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        Some(Self { pixmap, backdrop })
    }

    /// The rendered pixels.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// The rendered pixels as premultiplied RGBA bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    fn skia_color(color: Color) -> tiny_skia::Color {
        let [r, g, b, a] = color.to_rgba8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(Self::skia_color(color));
        paint.anti_alias = true;
        paint
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> (f32, f32) {
        (self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn resize(&mut self, width: f32, height: f32) {
        // A failed reallocation keeps the old pixmap; the field reads the
        // old size back and stays consistent with it.
        if let Some(pixmap) = Pixmap::new(width as u32, height as u32) {
            self.pixmap = pixmap;
        }
    }

    fn clear(&mut self) {
        self.pixmap.fill(Self::skia_color(self.backdrop));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.push_circle(center.x, center.y, radius);
        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &Self::paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &Self::paint(color),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }
}
