use rand::Rng;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FadingIn,
    Displaying,
    FadingOut,
}

/// Reported by [`FadeState::advance`] when a fade finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadedIn,
    FadedOut,
}

/// Horizontal drift of the quote and its parallax shadow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drift {
    pub offset: f32,
    pub shadow_offset: f32,
    pub speed: f32,
    pub shadow_speed: f32,
    /// Per-cycle shadow placement relative to the canvas center.
    pub start_x: f32,
    pub start_y: f32,
}

impl Drift {
    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        *self = Drift {
            offset: 0.0,
            shadow_offset: 0.0,
            speed: DRIFT_SPEED * direction,
            shadow_speed: DRIFT_SPEED * direction * SHADOW_DRIFT_RATIO,
            start_x: rng.random_range(-START_OFFSET_X..=START_OFFSET_X),
            start_y: rng.random_range(-START_OFFSET_Y..=START_OFFSET_Y),
        };
    }

    // Offsets snap back to 0 once they travel past the canvas width.
    fn step(&mut self, canvas_width: f32) {
        self.offset += self.speed;
        self.shadow_offset += self.shadow_speed;
        if self.offset.abs() > canvas_width {
            self.offset = 0.0;
        }
        if self.shadow_offset.abs() > canvas_width {
            self.shadow_offset = 0.0;
        }
    }
}

/// Fade and drift state of the quote screensaver.
///
/// Cycles `Idle -> FadingIn -> Displaying -> FadingOut -> FadingIn -> ...`.
/// Leaving `Displaying` is driven from outside (the display timer), and so is
/// re-entering `FadingIn` after a fade-out, since that requires a new quote.
#[derive(Debug, Clone)]
pub struct FadeState {
    phase: Phase,
    step: u32,
    alpha: f32,
    drift: Drift,
}

impl Default for FadeState {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeState {
    pub fn new() -> Self {
        Self { phase: Phase::Idle, step: 0, alpha: 0.0, drift: Drift::default() }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn drift(&self) -> &Drift {
        &self.drift
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn fade_in<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.phase = Phase::FadingIn;
        self.step = 0;
        self.alpha = 0.0;
        self.drift.restart(rng);
    }

    pub fn fade_out(&mut self) {
        self.phase = Phase::FadingOut;
        self.step = 0;
        self.alpha = 1.0;
    }

    /// Advances one frame: drift first, then the fade step.
    pub fn advance(&mut self, canvas_width: f32) -> Option<Transition> {
        if self.phase != Phase::Idle {
            self.drift.step(canvas_width);
        }

        match self.phase {
            Phase::FadingIn => {
                self.step = (self.step + 1).min(FADE_STEPS);
                self.alpha = (self.step as f32 / FADE_STEPS as f32).min(1.0);
                if self.step < FADE_STEPS {
                    return None;
                }
                self.phase = Phase::Displaying;
                self.alpha = 1.0;
                Some(Transition::FadedIn)
            }
            Phase::FadingOut => {
                self.step = (self.step + 1).min(FADE_STEPS);
                self.alpha = (1.0 - self.step as f32 / FADE_STEPS as f32).max(0.0);
                if self.step < FADE_STEPS {
                    return None;
                }
                self.alpha = 0.0;
                Some(Transition::FadedOut)
            }
            Phase::Idle | Phase::Displaying => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fading_in(seed: u64) -> FadeState {
        let mut state = FadeState::new();
        state.fade_in(&mut StdRng::seed_from_u64(seed));
        state
    }

    #[test]
    fn fade_in_rises_to_one_at_last_step() {
        let mut state = fading_in(1);
        let mut last = state.alpha();
        for step in 1..FADE_STEPS {
            assert_eq!(state.advance(1920.0), None);
            assert_eq!(state.step(), step);
            assert!(state.alpha() >= last && state.alpha() < 1.0);
            last = state.alpha();
        }
        assert_eq!(state.advance(1920.0), Some(Transition::FadedIn));
        assert_eq!(state.step(), FADE_STEPS);
        assert_eq!(state.alpha(), 1.0);
        assert_eq!(state.phase(), Phase::Displaying);
    }

    #[test]
    fn displaying_holds_alpha() {
        let mut state = fading_in(2);
        while state.advance(1920.0).is_none() {}
        for _ in 0..500 {
            assert_eq!(state.advance(1920.0), None);
            assert_eq!(state.alpha(), 1.0);
        }
    }

    #[test]
    fn fade_out_mirrors_fade_in() {
        let mut state = fading_in(3);
        state.fade_out();
        let mut last = state.alpha();
        for _ in 1..FADE_STEPS {
            assert_eq!(state.advance(1920.0), None);
            assert!(state.alpha() <= last && state.alpha() > 0.0);
            last = state.alpha();
        }
        assert_eq!(state.advance(1920.0), Some(Transition::FadedOut));
        assert_eq!(state.alpha(), 0.0);
    }

    #[test]
    fn fade_in_draws_fresh_drift() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut state = FadeState::new();
        for _ in 0..50 {
            state.fade_in(&mut rng);
            let drift = *state.drift();
            assert_eq!(drift.offset, 0.0);
            assert_eq!(drift.shadow_offset, 0.0);
            assert_eq!(drift.speed.abs(), DRIFT_SPEED);
            assert!((drift.shadow_speed + drift.speed * 0.7).abs() < 1e-6);
            assert!((-100.0..=100.0).contains(&drift.start_x));
            assert!((-50.0..=50.0).contains(&drift.start_y));
            state.advance(1920.0);
        }
    }

    #[test]
    fn drift_snaps_back_past_canvas_width() {
        let mut state = fading_in(5);
        let width = 10.0;
        for _ in 0..200 {
            state.advance(width);
            assert!(state.drift().offset.abs() <= width);
            assert!(state.drift().shadow_offset.abs() <= width);
        }
    }

    #[test]
    fn idle_does_not_drift() {
        let mut state = FadeState::new();
        assert_eq!(state.advance(100.0), None);
        assert_eq!(state.drift().offset, 0.0);
        assert_eq!(state.phase(), Phase::Idle);
    }
}
