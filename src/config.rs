use std::path::PathBuf;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::*;

/// How long each quote stays fully visible. Fixed for the life of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timing {
    #[default]
    Test,
    Production,
}

impl Timing {
    pub fn display_duration(self) -> Duration {
        match self {
            Timing::Test => DISPLAY_DURATION_TEST,
            Timing::Production => DISPLAY_DURATION_PROD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub quotes_path: PathBuf,
    pub timing: Timing,
    pub frame_interval: Duration,
    /// Fixed seed for reproducible runs; fresh OS entropy otherwise.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quotes_path: PathBuf::from("quotes.txt"),
            timing: Timing::default(),
            frame_interval: FRAME_INTERVAL,
            seed: None,
        }
    }
}

impl Settings {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
