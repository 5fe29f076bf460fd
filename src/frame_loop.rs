use crate::camera::{Camera, CameraRig};
use crate::clock::FrameClock;
use crate::constants::{
    OBJECT_DISTANCE, SECTION_TWEEN_DELTA, SECTION_TWEEN_DURATION_SEC, SPIN_RATE_X, SPIN_RATE_Y,
};
use crate::input::InputSnapshot;
use crate::scene::Scene;
use crate::sections::{SectionTracker, SectionUpdate};
use crate::tween::{Easing, RotationTween, TweenEngine, TweenHandle};
use crate::viewport::Viewport;

/// Consumer of a finished frame: draws the scene from the camera.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &Camera);
}

// No GPU attached: the loop keeps running and simply draws nothing.
impl<R: Renderer> Renderer for Option<R> {
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        if let Some(r) = self {
            r.render(scene, camera);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
}

/// Per-tick inputs gathered by the scheduler.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub elapsed_sec: f64,
    pub input: InputSnapshot,
    pub viewport: Viewport,
}

/// What a single tick did, for logging and tests.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutcome {
    pub dt_sec: f32,
    pub section: SectionUpdate,
    pub tween: Option<TweenHandle>,
}

/// The section-entry spin fired on every crossing.
pub fn section_tween() -> RotationTween {
    RotationTween {
        duration_sec: SECTION_TWEEN_DURATION_SEC,
        easing: Easing::QuadOut,
        delta: SECTION_TWEEN_DELTA,
    }
}

/// Fuses scroll, pointer and time into one camera/object update per frame.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    state: LoopState,
    clock: FrameClock,
    tracker: SectionTracker,
    rig: CameraRig,
    frames: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(OBJECT_DISTANCE)
    }
}

impl FrameLoop {
    pub fn new(object_spacing: f32) -> Self {
        Self {
            state: LoopState::Idle,
            clock: FrameClock::default(),
            tracker: SectionTracker::new(),
            rig: CameraRig::new(object_spacing),
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn current_section(&self) -> i32 {
        self.tracker.current()
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(
        &mut self,
        frame: FrameInput,
        scene: &mut Scene,
        tweens: &mut impl TweenEngine,
        renderer: &mut impl Renderer,
    ) -> FrameOutcome {
        if self.state == LoopState::Idle {
            log::info!("[frame] loop running");
            self.state = LoopState::Running;
        }
        self.frames += 1;

        let dt_sec = self.clock.advance(frame.elapsed_sec);
        let FrameInput {
            input, viewport, ..
        } = frame;

        self.rig
            .update(dt_sec, input.scroll_y, viewport.height, input.cursor);

        scene.spin(dt_sec, SPIN_RATE_X, SPIN_RATE_Y);

        let section = self.tracker.update(input.scroll_y, viewport.height);
        let mut tween = None;
        if section.crossed {
            if scene.section_mut(section.index).is_some() {
                log::info!(
                    "[section] {} -> {} at frame {}",
                    section.previous,
                    section.index,
                    self.frames
                );
                // index is known to be in range here
                tween = Some(tweens.animate(section.index as usize, section_tween()));
            } else {
                log::debug!(
                    "[section] {} -> {} is past the last section; no animation",
                    section.previous,
                    section.index
                );
            }
        }

        let camera = self.rig.camera(&viewport);
        renderer.render(scene, &camera);

        FrameOutcome {
            dt_sec,
            section,
            tween,
        }
    }
}
