use std::f64::consts::TAU;

/// Elapsed animation time, accumulated from frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    elapsed_ms: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta, in milliseconds. Deltas are applied as reported,
    /// without clamping.
    pub fn advance(&mut self, delta_ms: f64) {
        self.elapsed_ms += delta_ms;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Elapsed seconds wrapped to `[0, 2π)`. The camera repeats every 2π
    /// seconds, and wrapping in f64 keeps the f32 result precise however
    /// long the page has been open.
    pub fn elapsed_secs(&self) -> f32 {
        (self.elapsed_ms / 1000.0).rem_euclid(TAU) as f32
    }
}

/// Converts the absolute timestamps passed to animation frame callbacks into
/// deltas since the previous frame.
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    last_ms: f64,
}

impl Ticker {
    /// * `start_ms` Time at which frames were first requested. The first
    ///              delta is measured from here.
    pub fn new(start_ms: f64) -> Self {
        Self { last_ms: start_ms }
    }

    pub fn delta(&mut self, now_ms: f64) -> f64 {
        let delta = now_ms - self.last_ms;
        self.last_ms = now_ms;
        delta
    }
}
