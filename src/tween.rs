use glam::Vec3;
use smallvec::SmallVec;

/// Named easing curves for tween progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadOut,
    CubicOut,
}

impl Easing {
    /// Map raw progress in \[0, 1\] to eased progress in \[0, 1\].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A relative rotation animation: add `delta` radians over `duration_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationTween {
    pub duration_sec: f32,
    pub easing: Easing,
    pub delta: Vec3,
}

/// Opaque ticket for a submitted tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenHandle(pub u64);

/// Fire-and-forget rotation animation service.
///
/// `target` names a section by index. Nothing is returned that must be
/// polled; overlapping submissions on the same target add up.
pub trait TweenEngine {
    fn animate(&mut self, target: usize, tween: RotationTween) -> TweenHandle;
}

#[derive(Clone, Debug)]
struct ActiveTween {
    handle: TweenHandle,
    target: usize,
    start_sec: f64,
    tween: RotationTween,
    applied: f32, // eased progress already written to the target
}

/// In-process tween runner.
///
/// Each `advance` writes only the increment since the previous advance, so
/// concurrent tweens and any other rotation source compose additively.
#[derive(Clone, Debug, Default)]
pub struct TweenQueue {
    active: SmallVec<[ActiveTween; 4]>,
    now_sec: f64,
    next_id: u64,
}

impl TweenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Progress every tween to `now_sec`, calling `apply(target, increment)`.
    ///
    /// Finished tweens are dropped after their final increment.
    pub fn advance(&mut self, now_sec: f64, mut apply: impl FnMut(usize, Vec3)) {
        if now_sec.is_finite() && now_sec > self.now_sec {
            self.now_sec = now_sec;
        }
        let now = self.now_sec;
        self.active.retain(|a| {
            let duration = a.tween.duration_sec;
            let raw = if duration > 0.0 {
                (now - a.start_sec) as f32 / duration
            } else {
                1.0
            };
            let eased = a.tween.easing.apply(raw);
            let step = eased - a.applied;
            if step != 0.0 {
                apply(a.target, a.tween.delta * step);
                a.applied = eased;
            }
            raw < 1.0
        });
    }

    pub fn is_animating(&self, target: usize) -> bool {
        self.active.iter().any(|a| a.target == target)
    }

    pub fn contains(&self, handle: TweenHandle) -> bool {
        self.active.iter().any(|a| a.handle == handle)
    }
}

impl TweenEngine for TweenQueue {
    fn animate(&mut self, target: usize, tween: RotationTween) -> TweenHandle {
        let handle = TweenHandle(self.next_id);
        self.next_id += 1;
        self.active.push(ActiveTween {
            handle,
            target,
            start_sec: self.now_sec,
            tween,
            applied: 0.0,
        });
        handle
    }
}
