use glam::Vec3;

/// Layout, camera and animation tuning constants.
///
/// These constants express intended behavior (e.g., spacing, rates, easing
/// durations) and keep magic numbers out of the frame loop.
// Scene layout
pub const OBJECT_DISTANCE: f32 = 4.0; // world-space gap between adjacent sections
pub const SECTION_X_OFFSETS: [f32; 3] = [2.0, -2.0, 2.0]; // alternate left/right of the copy

// Camera (base camera sits inside the parallax group)
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Pointer parallax
pub const PARALLAX_AMPLITUDE: f32 = 0.4;
pub const PARALLAX_SMOOTHING_PER_SEC: f32 = 5.0; // exponential approach rate

// Continuous spin applied to every section object (radians per second)
pub const SPIN_RATE_X: f32 = 0.1;
pub const SPIN_RATE_Y: f32 = 0.13;

// One-shot spin fired when a section becomes active
pub const SECTION_TWEEN_DURATION_SEC: f32 = 1.5;
pub const SECTION_TWEEN_DELTA: Vec3 = Vec3::new(6.0, 3.0, 1.5);

// Particle backdrop
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent centered on the origin
pub const PARTICLE_SIZE: f32 = 0.03; // world-space quad size
pub const MAX_PARTICLE_COUNT: usize = 20_000;

// Material and light
pub const DEFAULT_MATERIAL_COLOR: &str = "#ffeded";
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(1.0, 1.0, 0.0);
pub const LIGHT_INTENSITY: f32 = 1.0;

// Display
pub const MAX_PIXEL_RATIO: f32 = 2.0;
pub const DEFAULT_SEED: u64 = 42;
