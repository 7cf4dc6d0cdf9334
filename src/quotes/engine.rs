use std::time::Duration;

use rand::rngs::StdRng;

use crate::canvas::Canvas;
use crate::config::Settings;
use crate::engine::{Event, Screensaver, Timers};
use crate::error::SurfaceError;
use crate::quotes::state::{Drift, FadeState, Phase, Transition};
use crate::quotes::store::{Quote, QuoteStore};
use crate::quotes::text::QuoteText;
use crate::scheduler::TimerHandle;

pub const NAME: &str = "Inspirational Quotes";

/// Inspirational quotes fading in and out over a drifting parallax shadow.
pub struct QuotesEngine {
    store: QuoteStore,
    current: Quote,
    state: FadeState,
    text: QuoteText,
    display_duration: Duration,
    display_timer: Option<TimerHandle>,
    rng: StdRng,
}

impl QuotesEngine {
    pub fn new(settings: &Settings) -> Self {
        let mut rng = settings.rng();
        let store = QuoteStore::load(&settings.quotes_path, &mut rng);
        Self::with_store(store, settings.timing.display_duration(), rng)
    }

    pub fn with_store(store: QuoteStore, display_duration: Duration, mut rng: StdRng) -> Self {
        let current = store.select_next(None, &mut rng).clone();
        Self {
            store,
            current,
            state: FadeState::new(),
            text: QuoteText::default(),
            display_duration,
            display_timer: None,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn alpha(&self) -> f32 {
        self.state.alpha()
    }

    pub fn drift(&self) -> &Drift {
        self.state.drift()
    }

    pub fn current(&self) -> &Quote {
        &self.current
    }

    pub fn text(&self) -> &QuoteText {
        &self.text
    }

    pub fn display_timer(&self) -> Option<TimerHandle> {
        self.display_timer
    }

    fn cancel_display_timer(&mut self, timers: &mut Timers) {
        if let Some(handle) = self.display_timer.take() {
            timers.cancel(handle);
        }
    }

    fn schedule_fade_out(&mut self, timers: &mut Timers) {
        self.cancel_display_timer(timers);
        self.display_timer = Some(timers.schedule_once(self.display_duration, Event::DisplayElapsed));
    }

    fn start_fade_out(&mut self, timers: &mut Timers) {
        self.cancel_display_timer(timers);
        self.state.fade_out();
        tracing::debug!(author = %self.current.author, "fading out");
    }

    fn next_quote(&mut self, canvas: &mut dyn Canvas) {
        self.current = self.store.select_next(Some(&self.current), &mut self.rng).clone();
        self.text.discard(canvas);
        self.state.fade_in(&mut self.rng);
        tracing::debug!(author = %self.current.author, "next quote");
    }
}

impl Screensaver for QuotesEngine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn start(&mut self, timers: &mut Timers) {
        self.cancel_display_timer(timers);
        self.state.reset();
        self.state.fade_in(&mut self.rng);
    }

    fn render(&mut self, canvas: &mut dyn Canvas, timers: &mut Timers) -> Result<(), SurfaceError> {
        let (width, _) = canvas.size()?;

        match self.state.advance(width) {
            Some(Transition::FadedIn) => self.schedule_fade_out(timers),
            Some(Transition::FadedOut) => self.next_quote(canvas),
            None => {}
        }

        if self.state.phase() != Phase::Idle {
            self.text.draw(canvas, &self.current, &self.state)?;
        }
        Ok(())
    }

    fn on_timer(&mut self, event: Event, timers: &mut Timers) {
        if event != Event::DisplayElapsed {
            return;
        }
        self.display_timer = None;
        if self.state.phase() == Phase::Displaying {
            self.start_fade_out(timers);
        }
    }

    fn skip(&mut self, timers: &mut Timers) {
        if self.state.phase() == Phase::Displaying {
            self.start_fade_out(timers);
        }
    }

    fn stop(&mut self, canvas: &mut dyn Canvas, timers: &mut Timers) {
        self.cancel_display_timer(timers);
        self.text.discard(canvas);
        self.state.reset();
    }
}
