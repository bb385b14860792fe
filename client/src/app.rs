use scene::{Clock, Ticker, Uniforms};

use crate::render::Renderer;

/// Width and height of the canvas, in pixels.
pub const CANVAS_SIZE: u32 = 400;

/// Application state, advanced once per animation frame.
pub struct App<R: Renderer> {
    clock: Clock,
    ticker: Ticker,
    renderer: R,
}

impl<R: Renderer> App<R> {
    /// * `start_ms` Time at which the first animation frame was requested.
    pub fn new(renderer: R, start_ms: f64) -> Self {
        App {
            clock: Clock::new(),
            ticker: Ticker::new(start_ms),
            renderer,
        }
    }

    /// Handle an animation frame with the timestamp passed to the callback.
    pub fn animation_frame(&mut self, timestamp_ms: f64) {
        let delta = self.ticker.delta(timestamp_ms);
        self.clock.advance(delta);
        self.redraw();
    }

    fn redraw(&mut self) {
        let uniforms = Uniforms::at(self.clock.elapsed_secs());
        self.renderer.clear();
        self.renderer.draw(&uniforms);
    }
}
