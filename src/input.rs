use crate::viewport::Viewport;
use glam::Vec2;

/// Latest scroll offset and cursor position, as read once per frame.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct InputSnapshot {
    /// Page scroll in CSS pixels, never negative.
    pub scroll_y: f32,
    /// Cursor relative to viewport center, roughly in \[-0.5, 0.5\].
    pub cursor: Vec2,
}

/// Input written by the pointer/scroll listeners and read by the frame loop.
///
/// Each field has a single writer; the loop only ever takes a snapshot.
#[derive(Default, Clone, Copy, Debug)]
pub struct InputState {
    scroll_y: f32,
    cursor: Vec2,
}

impl InputState {
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, viewport: &Viewport) {
        self.cursor = normalize_cursor(client_x, client_y, viewport);
    }

    pub fn on_scroll(&mut self, scroll_y: f32) {
        // rubber-band overscroll reports negative offsets on some hosts
        if scroll_y.is_finite() {
            self.scroll_y = scroll_y.max(0.0);
        }
    }

    #[inline]
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            scroll_y: self.scroll_y,
            cursor: self.cursor,
        }
    }
}

/// Map client pixels to a centered, resolution-independent coordinate.
///
/// (0, 0) is the viewport center, negative is left/up. Positions outside the
/// viewport are passed through unclamped.
#[inline]
pub fn normalize_cursor(client_x: f32, client_y: f32, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        client_x / viewport.safe_width() - 0.5,
        client_y / viewport.safe_height() - 0.5,
    )
}
