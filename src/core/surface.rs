use glam::Vec2;

/// Straight RGB colour with a separate alpha, rendered as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], alpha: f32) -> Self {
        Self { rgb, alpha }
    }

    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

/// Minimal 2D raster surface used by the background renderers.
///
/// Coordinates are surface-local pixels. The browser implementation wraps a
/// `CanvasRenderingContext2d`; tests use a recording stub.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Rgba);
    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f32, color: Rgba);
    fn fill_text(&mut self, text: &str, at: Vec2, font: &str, color: Rgba);
}
