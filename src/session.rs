use std::time::Duration;

use crate::canvas::Canvas;
use crate::engine::{Event, Screensaver, Timers};
use crate::render_loop::RenderLoop;

/// A screensaver bound to its own canvas, timers and render loop.
///
/// Preview and fullscreen instances are separate sessions and share nothing.
pub struct Session<C: Canvas> {
    screensaver: Box<dyn Screensaver>,
    canvas: C,
    timers: Timers,
    frames: RenderLoop,
    rendered: u64,
    skipped: u64,
}

impl<C: Canvas> Session<C> {
    pub fn new(screensaver: Box<dyn Screensaver>, canvas: C, frame_interval: Duration) -> Self {
        Self {
            screensaver,
            canvas,
            timers: Timers::new(),
            frames: RenderLoop::new(frame_interval),
            rendered: 0,
            skipped: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.screensaver.name()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Frames drawn / frames skipped because the surface was not ready.
    pub fn frame_counts(&self) -> (u64, u64) {
        (self.rendered, self.skipped)
    }

    /// Starts a fresh cycle and renders the first frame right away.
    /// Does nothing while already running.
    pub fn start(&mut self) {
        if !self.frames.start(&mut self.timers) {
            return;
        }
        tracing::debug!(screensaver = self.name(), "start");
        self.screensaver.start(&mut self.timers);
        self.render();
    }

    /// Cancels the frame timer and every timer the screensaver armed.
    pub fn stop(&mut self) {
        if self.frames.is_running() {
            tracing::debug!(screensaver = self.name(), "stop");
        }
        self.frames.stop(&mut self.timers);
        self.screensaver.stop(&mut self.canvas, &mut self.timers);
    }

    /// Stops and wipes the canvas.
    pub fn cleanup(&mut self) {
        self.stop();
        self.canvas.clear();
        tracing::debug!(screensaver = self.name(), "cleanup");
    }

    /// One tick. A surface that is not ready skips the frame; the next tick
    /// tries again.
    pub fn render(&mut self) -> bool {
        match self.screensaver.render(&mut self.canvas, &mut self.timers) {
            Ok(()) => {
                self.rendered += 1;
                true
            }
            Err(e) => {
                self.skipped += 1;
                tracing::trace!(screensaver = self.name(), error = %e, "frame skipped");
                false
            }
        }
    }

    pub fn skip(&mut self) {
        if self.frames.is_running() {
            self.screensaver.skip(&mut self.timers);
        }
    }

    /// Moves the session clock to `now` and dispatches every due timer.
    /// Returns the number of frames rendered.
    pub fn advance(&mut self, now: Duration) -> usize {
        self.timers.advance_to(now);
        let mut frames = 0;
        while let Some((_, event)) = self.timers.next_due() {
            match event {
                Event::Frame => {
                    self.render();
                    frames += 1;
                }
                other => self.screensaver.on_timer(other, &mut self.timers),
            }
        }
        frames
    }
}
