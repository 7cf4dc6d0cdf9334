use crate::color_wheel::{self, ColorWheelEngine};
use crate::config::Settings;
use crate::engine::Screensaver;
use crate::error::RegistryError;
use crate::quotes::{self, QuotesEngine};

pub type Factory = fn(&Settings) -> Box<dyn Screensaver>;

#[derive(Clone)]
struct Registration {
    name: &'static str,
    factory: Factory,
}

/// Ordered list of available screensavers.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Vec<Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The screensavers shipped with the crate, in selector order.
    pub fn builtin(settings: &Settings) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(color_wheel::engine::NAME, |_| Box::new(ColorWheelEngine::new()), settings)?;
        registry.register(quotes::engine::NAME, |s| Box::new(QuotesEngine::new(s)), settings)?;
        Ok(registry)
    }

    /// Adds a factory under `name`. The factory is invoked once up front and
    /// rejected unless its product reports the same, unique, non-empty name.
    pub fn register(&mut self, name: &'static str, factory: Factory, settings: &Settings) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.entries.iter().any(|entry| entry.name == name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        let reported = factory(settings).name();
        if reported != name {
            return Err(RegistryError::NameMismatch {
                registered: name.to_string(),
                reported: reported.to_string(),
            });
        }
        self.entries.push(Registration { name, factory });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|entry| entry.name)
    }

    /// Case-insensitive lookup of a registered name.
    pub fn position(&self, name: &str) -> Result<usize, RegistryError> {
        self.entries
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RegistryError::Unknown {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn create(&self, index: usize, settings: &Settings) -> Option<Box<dyn Screensaver>> {
        self.entries.get(index).map(|entry| (entry.factory)(settings))
    }
}

/// Everything the host needs, populated once at startup and read-only after.
pub struct AppContext {
    settings: Settings,
    registry: Registry,
}

impl AppContext {
    pub fn new(settings: Settings) -> Result<Self, RegistryError> {
        let registry = Registry::builtin(&settings)?;
        Ok(Self::with_registry(settings, registry))
    }

    pub fn with_registry(settings: Settings, registry: Registry) -> Self {
        Self { settings, registry }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::engine::Timers;
    use crate::error::SurfaceError;

    struct Liar;

    impl Screensaver for Liar {
        fn name(&self) -> &'static str {
            "Something Else"
        }
        fn start(&mut self, _timers: &mut Timers) {}
        fn render(&mut self, _canvas: &mut dyn Canvas, _timers: &mut Timers) -> Result<(), SurfaceError> {
            Ok(())
        }
        fn stop(&mut self, _canvas: &mut dyn Canvas, _timers: &mut Timers) {}
    }

    #[test]
    fn builtin_order() {
        let registry = Registry::builtin(&Settings::default()).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Color Wheel", "Inspirational Quotes"]);
    }

    #[test]
    fn rejects_mismatched_name() {
        let mut registry = Registry::new();
        let err = registry.register("Liar", |_| Box::new(Liar), &Settings::default()).unwrap_err();
        assert!(matches!(err, RegistryError::NameMismatch { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_duplicates_and_blank_names() {
        let settings = Settings::default();
        let mut registry = Registry::new();
        registry.register("Something Else", |_| Box::new(Liar), &settings).unwrap();
        assert_eq!(
            registry.register("Something Else", |_| Box::new(Liar), &settings),
            Err(RegistryError::Duplicate("Something Else".to_string()))
        );
        assert_eq!(registry.register("  ", |_| Box::new(Liar), &settings), Err(RegistryError::EmptyName));
    }

    #[test]
    fn position_is_case_insensitive() {
        let registry = Registry::builtin(&Settings::default()).unwrap();
        assert_eq!(registry.position("color wheel"), Ok(0));
        assert!(matches!(registry.position("matrix"), Err(RegistryError::Unknown { .. })));
    }
}
