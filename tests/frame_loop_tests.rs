// Host-side tests for the per-frame orchestration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}
mod clock {
    include!("../src/clock.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod frame_loop {
    include!("../src/frame_loop.rs");
}
mod input {
    include!("../src/input.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod sections {
    include!("../src/sections.rs");
}
mod tween {
    include!("../src/tween.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}

use camera::Camera;
use constants::*;
use frame_loop::*;
use glam::{Vec2, Vec3};
use input::InputSnapshot;
use scene::{Scene, SceneParams};
use tween::{RotationTween, TweenEngine, TweenHandle, TweenQueue};
use viewport::Viewport;

#[derive(Default)]
struct RecordingRenderer {
    eyes: Vec<Vec3>,
    rotations: Vec<Vec<Vec3>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        self.eyes.push(camera.eye);
        self.rotations
            .push(scene.sections.iter().map(|s| s.rotation).collect());
    }
}

#[derive(Default)]
struct RecordingTweens {
    calls: Vec<(usize, RotationTween)>,
}

impl TweenEngine for RecordingTweens {
    fn animate(&mut self, target: usize, tween: RotationTween) -> TweenHandle {
        self.calls.push((target, tween));
        TweenHandle(self.calls.len() as u64)
    }
}

fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0, 1.0)
}

fn frame(elapsed_sec: f64, scroll_y: f32, cursor: Vec2) -> FrameInput {
    FrameInput {
        elapsed_sec,
        input: InputSnapshot { scroll_y, cursor },
        viewport: viewport(),
    }
}

fn landing() -> Scene {
    Scene::landing(&SceneParams::default())
}

#[test]
fn loop_starts_idle_and_runs_after_first_tick() {
    let mut fl = FrameLoop::default();
    assert_eq!(fl.state(), LoopState::Idle);
    let mut scene = landing();
    let mut tweens = RecordingTweens::default();
    let mut renderer = RecordingRenderer::default();
    let out = fl.tick(frame(0.5, 0.0, Vec2::ZERO), &mut scene, &mut tweens, &mut renderer);
    assert_eq!(fl.state(), LoopState::Running);
    assert_eq!(out.dt_sec, 0.0);
    assert_eq!(fl.frames(), 1);
    assert_eq!(renderer.eyes.len(), 1);
}

#[test]
fn first_tick_moves_nothing_but_scroll_translation() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut renderer = RecordingRenderer::default();
    fl.tick(
        frame(3.0, 1600.0, Vec2::new(0.5, 0.5)),
        &mut scene,
        &mut RecordingTweens::default(),
        &mut renderer,
    );
    assert_eq!(fl.rig().parallax_offset(), Vec2::ZERO);
    assert!((fl.rig().world_position().y + 2.0 * OBJECT_DISTANCE).abs() < 1e-5);
    assert!(scene.sections.iter().all(|s| s.rotation == Vec3::ZERO));
}

#[test]
fn continuous_spin_is_linear_in_elapsed_time() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut tweens = RecordingTweens::default();
    let mut renderer = RecordingRenderer::default();
    let start = 1.0;
    let mut t = start;
    fl.tick(frame(t, 0.0, Vec2::ZERO), &mut scene, &mut tweens, &mut renderer);
    for step in [0.016, 0.017, 0.05, 0.2, 0.001, 0.7] {
        t += step;
        fl.tick(frame(t, 0.0, Vec2::ZERO), &mut scene, &mut tweens, &mut renderer);
    }
    let total = (t - start) as f32;
    for s in &scene.sections {
        assert!((s.rotation.x - SPIN_RATE_X * total).abs() < 1e-5);
        assert!((s.rotation.y - SPIN_RATE_Y * total).abs() < 1e-5);
        assert_eq!(s.rotation.z, 0.0);
    }
    assert!(tweens.calls.is_empty());
}

#[test]
fn crossing_fires_one_section_tween_on_the_new_section() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut tweens = RecordingTweens::default();
    let mut renderer = RecordingRenderer::default();

    let mut outcomes = Vec::new();
    for (i, scroll) in [0.0, 750.0, 850.0].into_iter().enumerate() {
        outcomes.push(fl.tick(
            frame(i as f64 * 0.016, scroll, Vec2::ZERO),
            &mut scene,
            &mut tweens,
            &mut renderer,
        ));
    }
    let indices: Vec<i32> = outcomes.iter().map(|o| o.section.index).collect();
    assert_eq!(indices, vec![0, 1, 1]);
    assert!(outcomes[1].tween.is_some());
    assert!(outcomes[2].tween.is_none());
    assert_eq!(tweens.calls.len(), 1);
    let (target, tween) = tweens.calls[0];
    assert_eq!(target, 1);
    assert_eq!(tween, section_tween());
    assert_eq!(tween.duration_sec, 1.5);
    assert_eq!(tween.delta, Vec3::new(6.0, 3.0, 1.5));
    assert_eq!(fl.current_section(), 1);
}

#[test]
fn crossing_past_the_last_section_is_a_no_op() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut tweens = RecordingTweens::default();
    let mut renderer = RecordingRenderer::default();
    let out = fl.tick(
        frame(0.0, 800.0 * 3.0, Vec2::ZERO),
        &mut scene,
        &mut tweens,
        &mut renderer,
    );
    assert!(out.section.crossed);
    assert_eq!(out.section.index, 3);
    assert!(out.tween.is_none());
    assert!(tweens.calls.is_empty());

    // scrolling back into range animates the section we land on
    let out = fl.tick(
        frame(0.016, 800.0 * 2.0, Vec2::ZERO),
        &mut scene,
        &mut tweens,
        &mut renderer,
    );
    assert!(out.tween.is_some());
    assert_eq!(tweens.calls[0].0, 2);
}

#[test]
fn render_sees_this_ticks_camera_and_rotation() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut tweens = RecordingTweens::default();
    let mut renderer = RecordingRenderer::default();
    let cursor = Vec2::new(0.5, -0.5);
    fl.tick(frame(0.0, 0.0, cursor), &mut scene, &mut tweens, &mut renderer);
    fl.tick(frame(0.1, 400.0, cursor), &mut scene, &mut tweens, &mut renderer);

    assert_eq!(renderer.eyes.len(), 2);
    let eye = renderer.eyes[1];
    assert_eq!(eye, fl.rig().eye());
    let expected = 0.2 * (1.0 - (-0.5f32).exp());
    assert!((eye.x - expected).abs() < 1e-5);
    assert!((eye.y - (-2.0 + expected)).abs() < 1e-5);
    assert!((eye.z - CAMERA_Z).abs() < 1e-6);
    assert!((renderer.rotations[1][0].x - SPIN_RATE_X * 0.1).abs() < 1e-6);
}

#[test]
fn missing_renderer_still_advances_state() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut tweens = RecordingTweens::default();
    let mut renderer: Option<RecordingRenderer> = None;
    fl.tick(frame(0.0, 0.0, Vec2::ZERO), &mut scene, &mut tweens, &mut renderer);
    fl.tick(frame(1.0, 800.0, Vec2::ZERO), &mut scene, &mut tweens, &mut renderer);
    assert_eq!(tweens.calls.len(), 1);
    assert!((scene.sections[0].rotation.x - SPIN_RATE_X).abs() < 1e-6);

    let mut some = Some(RecordingRenderer::default());
    fl.tick(frame(1.1, 800.0, Vec2::ZERO), &mut scene, &mut tweens, &mut some);
    assert_eq!(some.map(|r| r.eyes.len()), Some(1));
}

#[test]
fn section_tween_and_spin_add_up_over_time() {
    let mut fl = FrameLoop::default();
    let mut scene = landing();
    let mut tweens = TweenQueue::new();
    let mut renderer = RecordingRenderer::default();

    let mut t = 0.0f64;
    let mut scroll = 0.0;
    for i in 0..180 {
        if i == 10 {
            scroll = 800.0;
        }
        // tweens progress first, then the tick, as the scheduler does
        tweens.advance(t, |target, d| scene.rotate_section(target, d));
        fl.tick(frame(t, scroll, Vec2::ZERO), &mut scene, &mut tweens, &mut renderer);
        t += 1.0 / 60.0;
    }
    tweens.advance(t + 2.0, |target, d| scene.rotate_section(target, d));
    assert!(tweens.is_empty());

    let spun = SPIN_RATE_X * (t - 1.0 / 60.0) as f32;
    assert!((scene.sections[0].rotation.x - spun).abs() < 1e-3);
    assert!((scene.sections[1].rotation.x - (spun + 6.0)).abs() < 1e-3);
    assert!((scene.sections[1].rotation.z - 1.5).abs() < 1e-4);
    assert_eq!(scene.sections[2].rotation.z, 0.0);
}
