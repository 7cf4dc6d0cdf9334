use std::time::Duration;

use crate::canvas::Canvas;
use crate::constants::HINT_DURATION;
use crate::error::RegistryError;
use crate::registry::AppContext;
use crate::scheduler::{Scheduler, TimerHandle};
use crate::session::Session;
use crate::state::HostState;

pub const EXIT_HINT: &str = "Press ESC or click to exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostEvent {
    DismissHint,
}

/// Screensaver selector: keeps the selected screensaver running in the
/// preview canvas and launches independent fullscreen instances.
pub struct Host<C: Canvas> {
    context: AppContext,
    selected: usize,
    preview: Option<Session<C>>,
    fullscreen: Option<Session<C>>,
    hint: Option<TimerHandle>,
    timers: Scheduler<HostEvent>,
}

impl<C: Canvas> Host<C> {
    /// Starts previewing the first registered screensaver.
    pub fn new(context: AppContext, preview_canvas: C) -> Result<Self, RegistryError> {
        if context.registry().is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut host = Self {
            context,
            selected: 0,
            preview: None,
            fullscreen: None,
            hint: None,
            timers: Scheduler::new(),
        };
        host.launch_preview(preview_canvas);
        Ok(host)
    }

    pub fn state(&self) -> HostState {
        if self.fullscreen.is_some() { HostState::Fullscreen } else { HostState::Previewing }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_name(&self) -> &'static str {
        self.context.registry().name(self.selected).unwrap_or_default()
    }

    pub fn preview(&self) -> Option<&Session<C>> {
        self.preview.as_ref()
    }

    pub fn preview_mut(&mut self) -> Option<&mut Session<C>> {
        self.preview.as_mut()
    }

    pub fn fullscreen(&self) -> Option<&Session<C>> {
        self.fullscreen.as_ref()
    }

    pub fn fullscreen_mut(&mut self) -> Option<&mut Session<C>> {
        self.fullscreen.as_mut()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint.is_some()
    }

    /// Switches the preview to another screensaver. The old instance is
    /// cleaned up before the new one starts on the same canvas.
    pub fn select(&mut self, index: usize) -> bool {
        if index == self.selected || index >= self.context.registry().len() {
            return false;
        }
        let Some(mut old) = self.preview.take() else {
            return false;
        };
        old.cleanup();
        self.selected = index;
        self.launch_preview(old.into_canvas());
        true
    }

    pub fn select_name(&mut self, name: &str) -> Result<bool, RegistryError> {
        let index = self.context.registry().position(name)?;
        Ok(self.select(index))
    }

    pub fn select_next(&mut self) -> bool {
        let count = self.context.registry().len();
        self.select((self.selected + 1) % count)
    }

    pub fn select_previous(&mut self) -> bool {
        let count = self.context.registry().len();
        self.select((self.selected + count - 1) % count)
    }

    /// Runs a new instance of the selected screensaver on `canvas` and shows
    /// the exit hint for a few seconds. Replaces any running fullscreen
    /// instance.
    pub fn enter_fullscreen(&mut self, canvas: C) {
        self.exit_fullscreen();
        let Some(mut session) = self.session(canvas) else {
            return;
        };
        session.start();
        tracing::debug!(screensaver = session.name(), "fullscreen");
        self.fullscreen = Some(session);
        self.hint = Some(self.timers.schedule_once(HINT_DURATION, HostEvent::DismissHint));
    }

    /// Tears the fullscreen instance down and hands its canvas back.
    pub fn exit_fullscreen(&mut self) -> Option<C> {
        let mut session = self.fullscreen.take()?;
        session.cleanup();
        if let Some(handle) = self.hint.take() {
            self.timers.cancel(handle);
        }
        Some(session.into_canvas())
    }

    /// Asks whichever instance is in front to move on to its next content.
    pub fn skip(&mut self) {
        match (self.fullscreen.as_mut(), self.preview.as_mut()) {
            (Some(session), _) | (None, Some(session)) => session.skip(),
            (None, None) => {}
        }
    }

    /// Drives every session and the host's own timers up to `now`.
    pub fn advance(&mut self, now: Duration) {
        self.timers.advance_to(now);
        while let Some((handle, HostEvent::DismissHint)) = self.timers.next_due() {
            if self.hint == Some(handle) {
                self.hint = None;
            }
        }
        if let Some(session) = self.preview.as_mut() {
            session.advance(now);
        }
        if let Some(session) = self.fullscreen.as_mut() {
            session.advance(now);
        }
    }

    fn session(&self, canvas: C) -> Option<Session<C>> {
        let settings = self.context.settings();
        let screensaver = self.context.registry().create(self.selected, settings)?;
        let mut session = Session::new(screensaver, canvas, settings.frame_interval);
        // New sessions start on the host's clock, not at zero.
        session.advance(self.timers.now());
        Some(session)
    }

    fn launch_preview(&mut self, canvas: C) {
        if let Some(mut session) = self.session(canvas) {
            session.start();
            self.preview = Some(session);
        }
    }
}
