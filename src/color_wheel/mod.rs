pub mod engine;

pub use engine::ColorWheelEngine;
