/// Result of feeding one scroll reading to the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionUpdate {
    pub previous: i32,
    pub index: i32,
    pub crossed: bool,
}

/// Turns continuous scroll into a discrete section index and reports changes.
///
/// The index is not clamped to the number of sections; callers look sections
/// up with a bounds check.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    current: i32,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> SectionUpdate {
        let previous = self.current;
        let index = section_index(scroll_y, viewport_height);
        let crossed = index != previous;
        if crossed {
            self.current = index;
        }
        SectionUpdate {
            previous,
            index,
            crossed,
        }
    }
}

/// `round(scroll_y / viewport_height)` with halves rounding up.
#[inline]
pub fn section_index(scroll_y: f32, viewport_height: f32) -> i32 {
    let ratio = scroll_y / viewport_height.max(1.0);
    if !ratio.is_finite() {
        return 0;
    }
    (ratio + 0.5).floor() as i32
}
