use crate::canvas::Canvas;
use crate::error::SurfaceError;
use crate::scheduler::Scheduler;

/// Timer events a screensaver session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Render loop tick.
    Frame,
    /// The quote on screen has been displayed long enough.
    DisplayElapsed,
}

pub type Timers = Scheduler<Event>;

/// A screensaver variant.
///
/// Variants never own their canvas or their frame timer: a
/// [`Session`](crate::session::Session) binds them to both and drives
/// `render` once per tick.
pub trait Screensaver {
    fn name(&self) -> &'static str;

    /// Begins a fresh animation cycle.
    fn start(&mut self, timers: &mut Timers);

    /// Advances the animation by one frame and draws it.
    fn render(&mut self, canvas: &mut dyn Canvas, timers: &mut Timers) -> Result<(), SurfaceError>;

    fn on_timer(&mut self, _event: Event, _timers: &mut Timers) {}

    /// Moves on to the next piece of content early, if the variant has any.
    fn skip(&mut self, _timers: &mut Timers) {}

    /// Cancels the variant's own timers and removes what it drew.
    fn stop(&mut self, canvas: &mut dyn Canvas, timers: &mut Timers);
}
