// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Layout and camera distances should be positive
    assert!(OBJECT_DISTANCE > 0.0);
    assert!(CAMERA_Z > 0.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);

    // Parallax stays a small fraction of a section
    assert!(PARALLAX_AMPLITUDE > 0.0 && PARALLAX_AMPLITUDE < OBJECT_DISTANCE);
    assert!(PARALLAX_SMOOTHING_PER_SEC > 0.0);

    assert!(SPIN_RATE_X > 0.0 && SPIN_RATE_Y > 0.0);
    assert!(SECTION_TWEEN_DURATION_SEC > 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The camera must sit in front of the objects and inside the far plane
    assert!(CAMERA_Z < CAMERA_ZFAR);

    // Sections alternate sides of the page
    for pair in SECTION_X_OFFSETS.windows(2) {
        assert!(pair[0] * pair[1] < 0.0);
    }

    // Particles are tiny compared to the section objects
    assert!(PARTICLE_SIZE < 0.1 * OBJECT_DISTANCE);
    assert!(PARTICLE_COUNT <= MAX_PARTICLE_COUNT);

    // The section spin dominates the continuous spin over its duration
    assert!(SECTION_TWEEN_DELTA.x > SPIN_RATE_X * SECTION_TWEEN_DURATION_SEC);
    assert!(LIGHT_DIRECTION.length() > 0.0);
}
