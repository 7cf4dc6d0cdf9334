//! Screensaver host: a fixed-interval render loop driving screensaver
//! variants (a color wheel and fading inspirational quotes) on a canvas,
//! with a selector that previews one variant and launches it fullscreen.

pub mod canvas;
pub mod color;
pub mod color_wheel;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod host;
pub mod quotes;
pub mod registry;
pub mod render_loop;
pub mod scene;
pub mod scheduler;
pub mod session;
pub mod state;
#[cfg(feature = "window")]
pub mod window;

pub use canvas::Canvas;
pub use config::{Settings, Timing};
pub use engine::{Event, Screensaver, Timers};
pub use error::{RegistryError, SourceError, SurfaceError};
pub use host::Host;
pub use registry::{AppContext, Registry};
pub use scene::Scene;
pub use session::Session;
