// Host-side tests for scroll -> section mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sections {
    include!("../src/sections.rs");
}

use sections::*;

#[test]
fn scroll_sequence_crosses_once_into_second_section() {
    let mut tracker = SectionTracker::new();
    let h = 800.0;

    let a = tracker.update(0.0, h);
    let b = tracker.update(750.0, h);
    let c = tracker.update(850.0, h);

    assert_eq!([a.index, b.index, c.index], [0, 1, 1]);
    assert!(!a.crossed);
    assert!(b.crossed);
    assert_eq!(b.previous, 0);
    assert!(!c.crossed);
    assert_eq!(tracker.current(), 1);
}

#[test]
fn mapping_is_non_decreasing_in_scroll() {
    let h = 777.0;
    let mut last = section_index(0.0, h);
    for step in 1..2000 {
        let s = step as f32 * 3.7;
        let idx = section_index(s, h);
        assert!(idx >= last, "index went from {} to {} at scroll {}", last, idx, s);
        last = idx;
    }
}

#[test]
fn crossing_fires_exactly_once_per_index_change() {
    let mut tracker = SectionTracker::new();
    let h = 600.0;
    let scrolls = [0.0, 100.0, 299.0, 301.0, 310.0, 500.0, 900.0, 905.0, 1250.0, 200.0, 199.0];
    let mut crossings = 0;
    let mut expected = 0;
    let mut prev = 0;
    for s in scrolls {
        let u = tracker.update(s, h);
        let idx = section_index(s, h);
        if idx != prev {
            expected += 1;
            prev = idx;
        }
        assert_eq!(u.crossed, u.index != u.previous);
        if u.crossed {
            crossings += 1;
        }
    }
    assert_eq!(crossings, expected);
    assert_eq!(crossings, 3);
}

#[test]
fn halfway_rounds_up() {
    assert_eq!(section_index(400.0, 800.0), 1);
    assert_eq!(section_index(399.9, 800.0), 0);
    assert_eq!(section_index(1200.0, 800.0), 2);
}

#[test]
fn index_is_not_clamped_past_the_last_section() {
    let mut tracker = SectionTracker::new();
    let u = tracker.update(800.0 * 7.0, 800.0);
    assert!(u.crossed);
    assert_eq!(u.index, 7);
}

#[test]
fn degenerate_heights_do_not_panic() {
    assert_eq!(section_index(0.0, 0.0), 0);
    assert_eq!(section_index(f32::NAN, 800.0), 0);
    assert_eq!(section_index(f32::INFINITY, 800.0), 0);
    // zero height falls back to a 1px divisor
    assert_eq!(section_index(3.0, 0.0), 3);
}
