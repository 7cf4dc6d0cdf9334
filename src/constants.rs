use std::time::Duration;

pub const WINDOW_WIDTH: i32 = 800;                                  // Initial selector window width
pub const WINDOW_HEIGHT: i32 = 600;                                 // Initial selector window height
pub const TARGET_FPS: u32 = 60;                                     // Redraw rate of the window itself

pub const FRAME_INTERVAL: Duration = Duration::from_millis(67);    // Screensaver tick (~15 fps)

pub const FADE_STEPS: u32 = 60;                                     // Frames per fade in/out
pub const DISPLAY_DURATION_TEST: Duration = Duration::from_secs(7);
pub const DISPLAY_DURATION_PROD: Duration = Duration::from_secs(30 * 60);

pub const DRIFT_SPEED: f32 = 0.5;                                   // Pixels per frame, main text
pub const SHADOW_DRIFT_RATIO: f32 = -0.7;                           // Shadow moves opposite, slower
pub const START_OFFSET_X: f32 = 100.0;                              // Shadow start offset range (+/-)
pub const START_OFFSET_Y: f32 = 50.0;

pub const SHADOW_ALPHA: f32 = 0.15;                                 // Shadow opacity multiplier
pub const SHADOW_SCALE: f32 = 1.8;                                  // Shadow font size multiplier

pub const HUE_SPEED: f64 = 0.001;                                   // Hue increment per frame

pub const QUOTE_RETRIES: usize = 10;                                // Attempts to avoid a repeat
pub const HINT_DURATION: Duration = Duration::from_secs(3);         // Fullscreen exit hint lifetime
