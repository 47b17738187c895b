//! Theme preference store.
//!
//! This module owns the single authoritative theme value for a session:
//! initial resolution from the host environment (persisted value, then system
//! preference, then the light default), synchronous observer notification,
//! and the persistence binding that keeps storage and the presentation flag
//! in lockstep with the value.
//!
//! The store is single-threaded by design. Every mutation completes its whole
//! side-effect chain (observers, persistence, presentation flag) before it
//! returns, so observers always see a strictly ordered sequence of values.

use std::cell::RefCell;
use std::rc::Rc;

use crate::theme::ThemePreference;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// A persistent key-value surface the store writes its value to.
///
/// Shaped like `eframe::Storage` so the GUI can bridge to it directly and
/// tests can supply an in-memory map.
pub trait PreferenceStorage {
    /// Reads the string stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set_string(&mut self, key: &str, value: String);

    /// Persists pending writes to the backing medium.
    fn flush(&mut self) {}
}

/// The presentation surface carrying the single boolean dark flag.
pub trait PresentationSurface {
    /// Sets the dark flag: present iff `dark` is true, never left stale.
    fn set_dark_flag(&mut self, dark: bool);
}

/// Resolves the initial theme from the host environment.
///
/// Priority order:
/// 1. a persisted value that parses to a legal theme wins outright,
///    regardless of the system signal;
/// 2. else a system dark preference of `Some(true)` yields dark;
/// 3. else light.
///
/// Absent capabilities are expressed as `None` arguments, so restricted
/// environments resolve to the default without any failure path.
pub fn resolve_initial_theme(
    stored: Option<&str>,
    system_prefers_dark: Option<bool>,
) -> ThemePreference {
    if let Some(raw) = stored {
        if let Some(parsed) = ThemePreference::parse(raw) {
            return parsed;
        }
        // Out-of-enum stored value: fall through to the system signal rather
        // than trusting it as the active theme.
    }

    if system_prefers_dark == Some(true) {
        return ThemePreference::Dark;
    }

    ThemePreference::Light
}

type Observer = Box<dyn FnMut(ThemePreference)>;

/// The reactive store holding the current theme preference.
///
/// Observers are plain closures invoked synchronously, in registration order,
/// on every value change. `subscribe` also invokes the observer immediately
/// with the current value, so a freshly bound collaborator starts consistent.
pub struct ThemeStore {
    current: ThemePreference,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemePreference::default())
    }
}

impl ThemeStore {
    /// Creates a store holding `initial` with no observers.
    pub fn new(initial: ThemePreference) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
        }
    }

    /// Creates a store with its initial value resolved from the environment.
    ///
    /// A missing storage capability is not an error; resolution falls through
    /// to the system signal and then the light default.
    pub fn from_environment(
        storage: Option<&dyn PreferenceStorage>,
        system_prefers_dark: Option<bool>,
    ) -> Self {
        let stored = storage.and_then(|s| s.get_string(THEME_KEY));
        Self::new(resolve_initial_theme(stored.as_deref(), system_prefers_dark))
    }

    /// Returns the current theme preference.
    pub fn get(&self) -> ThemePreference {
        self.current
    }

    /// Registers an observer.
    ///
    /// The observer is invoked immediately with the current value, then again
    /// on every subsequent change, after all previously registered observers.
    pub fn subscribe(&mut self, mut observer: impl FnMut(ThemePreference) + 'static) {
        observer(self.current);
        self.observers.push(Box::new(observer));
    }

    /// Sets the current value and notifies every observer before returning.
    pub fn set(&mut self, value: ThemePreference) {
        self.current = value;
        for observer in &mut self.observers {
            observer(value);
        }
    }

    /// Computes a new value from the current one and applies it.
    pub fn update(&mut self, f: impl FnOnce(ThemePreference) -> ThemePreference) {
        let next = f(self.current);
        self.set(next);
    }

    /// Switches to the complementary theme.
    pub fn toggle(&mut self) {
        self.update(ThemePreference::toggled);
    }
}

/// Installs the permanent persistence observer on a store.
///
/// This is the explicit initialization step a host application runs once at
/// startup. On every value change (and immediately on binding) the observer
/// persists the wire form under [`THEME_KEY`] and sets the presentation flag
/// to match `is_dark()`. A store constructed without this binding has no side
/// effects, which is what headless tests want.
pub fn bind_persistence(
    store: &mut ThemeStore,
    storage: Rc<RefCell<dyn PreferenceStorage>>,
    surface: Rc<RefCell<dyn PresentationSurface>>,
) {
    store.subscribe(move |theme| {
        {
            let mut storage = storage.borrow_mut();
            storage.set_string(THEME_KEY, theme.as_str().to_string());
            storage.flush();
        }
        surface.borrow_mut().set_dark_flag(theme.is_dark());
    });
}
