use crate::canvas::{Canvas, ItemId, Rect};
use crate::color::Rgb;
use crate::constants::HUE_SPEED;
use crate::engine::{Screensaver, Timers};
use crate::error::SurfaceError;

pub const NAME: &str = "Color Wheel";

/// Fills the canvas with one solid color that walks around the HSV wheel.
#[derive(Debug)]
pub struct ColorWheelEngine {
    hue: f64,
    hue_speed: f64,
    backdrop: Option<ItemId>,
}

impl Default for ColorWheelEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorWheelEngine {
    /// Starts at red.
    pub fn new() -> Self {
        Self::with_hue(0.0)
    }

    pub fn with_hue(hue: f64) -> Self {
        Self { hue: hue.rem_euclid(1.0), hue_speed: HUE_SPEED, backdrop: None }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn hue_speed(&self) -> f64 {
        self.hue_speed
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_hsv(self.hue, 1.0, 1.0)
    }
}

impl Screensaver for ColorWheelEngine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn start(&mut self, _timers: &mut Timers) {}

    fn render(&mut self, canvas: &mut dyn Canvas, _timers: &mut Timers) -> Result<(), SurfaceError> {
        let (width, height) = canvas.size()?;
        let rect = Rect::new(0.0, 0.0, width, height);
        let fill = self.color();

        let updated = match self.backdrop {
            Some(id) => match canvas.update_rect(id, rect, fill) {
                Ok(()) => true,
                Err(SurfaceError::UnknownItem(_)) => false,
                Err(e) => return Err(e),
            },
            None => false,
        };
        if !updated {
            self.backdrop = Some(canvas.create_rect(rect, fill)?);
        }

        self.hue = (self.hue + self.hue_speed).rem_euclid(1.0);
        Ok(())
    }

    fn stop(&mut self, canvas: &mut dyn Canvas, _timers: &mut Timers) {
        if let Some(id) = self.backdrop.take() {
            canvas.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Scene, Shape};

    #[test]
    fn fills_the_whole_canvas_and_follows_resizes() {
        let mut engine = ColorWheelEngine::new();
        let mut scene = Scene::new(640.0, 480.0);
        let mut timers = Timers::new();

        engine.render(&mut scene, &mut timers).unwrap();
        assert_eq!(
            scene.items().next(),
            Some(&Shape::Rect { rect: Rect::new(0.0, 0.0, 640.0, 480.0), fill: Rgb::new(255, 0, 0) })
        );

        scene.resize(1920.0, 1080.0);
        engine.render(&mut scene, &mut timers).unwrap();
        assert_eq!(scene.len(), 1);
        let Some(Shape::Rect { rect, .. }) = scene.items().next() else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.width, 1920.0);
    }

    #[test]
    fn not_ready_skips_without_advancing() {
        let mut engine = ColorWheelEngine::with_hue(0.25);
        let mut scene = Scene::default();
        assert!(engine.render(&mut scene, &mut Timers::new()).is_err());
        assert_eq!(engine.hue(), 0.25);
    }

    #[test]
    fn redraws_after_canvas_is_cleared() {
        let mut engine = ColorWheelEngine::new();
        let mut scene = Scene::new(10.0, 10.0);
        let mut timers = Timers::new();
        engine.render(&mut scene, &mut timers).unwrap();
        scene.clear();
        engine.render(&mut scene, &mut timers).unwrap();
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn stop_removes_backdrop() {
        let mut engine = ColorWheelEngine::new();
        let mut scene = Scene::new(10.0, 10.0);
        let mut timers = Timers::new();
        engine.render(&mut scene, &mut timers).unwrap();
        engine.stop(&mut scene, &mut timers);
        assert!(scene.is_empty());
    }
}
