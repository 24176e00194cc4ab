//! Drawing seam for the spark field

use super::particle::Rgba;

/// Something sparks can be drawn on.
///
/// The browser implements this on a 2D canvas context.
pub trait Surface {
    /// Wipe a `width × height` area starting at the origin
    fn clear(&mut self, width: f64, height: f64);

    /// Filled circle with a coloured glow of `glow_blur` pixels
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: Rgba, glow: Rgba, glow_blur: f64);
}

/// Discards everything; used for headless simulation
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f64, _height: f64) {}

    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _fill: Rgba, _glow: Rgba, _glow_blur: f64) {}
}
