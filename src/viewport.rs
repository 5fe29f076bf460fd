use crate::constants::MAX_PIXEL_RATIO;

/// CSS-pixel size of the visible page area plus the capped device pixel ratio.
///
/// Only the resize wiring writes this; everything else reads a copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        let pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    // Divisors: a collapsed window must not produce NaN positions.
    #[inline]
    pub fn safe_width(&self) -> f32 {
        self.width.max(1.0)
    }

    #[inline]
    pub fn safe_height(&self) -> f32 {
        self.height.max(1.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.safe_width() / self.safe_height()
    }

    /// Canvas backing-store size in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.safe_width() * self.pixel_ratio) as u32;
        let h = (self.safe_height() * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }
}
