use instant::Instant;

/// Monotonic elapsed-time source started at construction.
#[derive(Clone, Debug)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since construction; never decreases.
    ///
    /// Kept at `f64` so long-lived pages still resolve frame-sized steps.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Derives per-frame deltas from successive elapsed readings.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    previous: Option<f64>,
}

impl FrameClock {
    /// Commit `elapsed` and return the seconds since the previous call.
    ///
    /// The first call has no previous reading and yields zero, as does any
    /// non-finite or backwards step. Only the delta is narrowed to `f32`.
    pub fn advance(&mut self, elapsed: f64) -> f32 {
        let delta = match self.previous {
            Some(prev) => sanitize_delta((elapsed - prev) as f32),
            None => 0.0,
        };
        if elapsed.is_finite() {
            self.previous = Some(elapsed);
        }
        delta
    }

    pub fn previous(&self) -> Option<f64> {
        self.previous
    }
}

#[inline]
pub fn sanitize_delta(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}
