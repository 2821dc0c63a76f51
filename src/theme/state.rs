use super::{Palette, ThemeMode, ThemePreset};
use crate::storage::{get_flag, keys, set_flag, KeyValueStore, StorageError};
use std::fmt;
use tracing::{debug, info};

/// Notification sent to subscribers after a theme change.
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeEvent {
    ModeChanged(ThemeMode),
    PresetApplied {
        name: &'static str,
        palette: Palette,
    },
    AccessibilityChanged(AccessibilityFlags),
}

/// Preferences reported by the host environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemPreferences {
    pub prefers_dark: bool,
    pub reduced_motion: bool,
}

/// Accessibility switches. Only the first two are persisted; reduced
/// motion mirrors the system preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityFlags {
    pub high_contrast: bool,
    pub color_blind: bool,
    pub reduced_motion: bool,
}

type Subscriber = Box<dyn Fn(&ThemeEvent) + Send + Sync>;

/// Current appearance: mode, color preset and accessibility flags.
///
/// The state borrows the store on each mutating call instead of owning it,
/// so it can share one store with the rest of a session.
///
/// # Example
///
/// ```rust
/// use abacus::storage::{InMemoryStore, KeyValueStore};
/// use abacus::theme::{SystemPreferences, ThemeMode, ThemeState};
///
/// let mut store = InMemoryStore::new();
/// let mut theme = ThemeState::load(&store, SystemPreferences::default());
/// assert_eq!(theme.mode(), ThemeMode::Light);
///
/// theme.toggle(&mut store).unwrap();
/// assert_eq!(theme.mode(), ThemeMode::Dark);
/// assert_eq!(store.get("calculatorTheme").as_deref(), Some("dark"));
/// ```
pub struct ThemeState {
    mode: ThemeMode,
    preset: &'static ThemePreset,
    accessibility: AccessibilityFlags,
    system: SystemPreferences,
    subscribers: Vec<Subscriber>,
}

impl ThemeState {
    /// Restore theme settings from the store.
    ///
    /// Without a persisted mode the system dark preference decides. An
    /// unknown persisted preset falls back to the default one.
    pub fn load(store: &impl KeyValueStore, system: SystemPreferences) -> Self {
        let mode = store
            .get(keys::THEME)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| ThemeMode::from_preference(system.prefers_dark));

        let preset = store
            .get(keys::THEME_PRESET)
            .and_then(|name| ThemePreset::find(&name))
            .unwrap_or_else(ThemePreset::default_preset);

        let accessibility = AccessibilityFlags {
            high_contrast: get_flag(store, keys::HIGH_CONTRAST),
            color_blind: get_flag(store, keys::COLOR_BLIND),
            reduced_motion: system.reduced_motion,
        };

        debug!(%mode, preset = preset.name, "theme loaded");
        Self {
            mode,
            preset,
            accessibility,
            system,
            subscribers: Vec::new(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn preset(&self) -> &'static ThemePreset {
        self.preset
    }

    /// Colors of the active preset for the active mode.
    pub fn palette(&self) -> &'static Palette {
        self.preset.palette(self.mode)
    }

    pub fn accessibility(&self) -> AccessibilityFlags {
        self.accessibility
    }

    pub fn system_preferences(&self) -> SystemPreferences {
        self.system
    }

    /// Register a callback for every subsequent [`ThemeEvent`].
    pub fn subscribe(&mut self, subscriber: impl Fn(&ThemeEvent) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> Result<ThemeMode, StorageError> {
        let mode = self.mode.toggled();
        self.set_theme(store, mode)?;
        Ok(mode)
    }

    /// Switch to `mode` and persist it as an explicit choice.
    pub fn set_theme(
        &mut self,
        store: &mut impl KeyValueStore,
        mode: ThemeMode,
    ) -> Result<(), StorageError> {
        store.set(keys::THEME, mode.as_str().to_string())?;
        self.switch(mode);
        Ok(())
    }

    /// Pick the mode for a local hour of day and persist it.
    pub fn apply_auto(
        &mut self,
        store: &mut impl KeyValueStore,
        hour: u32,
    ) -> Result<ThemeMode, StorageError> {
        let mode = ThemeMode::for_hour(hour);
        self.set_theme(store, mode)?;
        Ok(mode)
    }

    /// React to a change of the system dark-mode preference.
    ///
    /// The mode follows only while the store holds no explicit choice, and
    /// is not persisted. Returns whether the mode was applied.
    pub fn system_preference_changed(
        &mut self,
        store: &impl KeyValueStore,
        prefers_dark: bool,
    ) -> bool {
        self.system.prefers_dark = prefers_dark;
        if store.contains(keys::THEME) {
            debug!("explicit theme choice overrides system preference");
            return false;
        }
        self.switch(ThemeMode::from_preference(prefers_dark));
        true
    }

    /// Switch to a named preset and persist its name.
    ///
    /// Returns `false` without any change for an unknown name.
    pub fn apply_preset(
        &mut self,
        store: &mut impl KeyValueStore,
        name: &str,
    ) -> Result<bool, StorageError> {
        let Some(preset) = ThemePreset::find(name) else {
            debug!(name, "ignoring unknown theme preset");
            return Ok(false);
        };
        store.set(keys::THEME_PRESET, preset.name.to_string())?;
        self.preset = preset;
        info!(preset = preset.name, mode = %self.mode, "theme preset applied");
        self.notify(&ThemeEvent::PresetApplied {
            name: preset.name,
            palette: *self.palette(),
        });
        Ok(true)
    }

    pub fn toggle_high_contrast(
        &mut self,
        store: &mut impl KeyValueStore,
    ) -> Result<bool, StorageError> {
        let enabled = !self.accessibility.high_contrast;
        set_flag(store, keys::HIGH_CONTRAST, enabled)?;
        self.accessibility.high_contrast = enabled;
        self.notify(&ThemeEvent::AccessibilityChanged(self.accessibility));
        Ok(enabled)
    }

    pub fn toggle_color_blind(
        &mut self,
        store: &mut impl KeyValueStore,
    ) -> Result<bool, StorageError> {
        let enabled = !self.accessibility.color_blind;
        set_flag(store, keys::COLOR_BLIND, enabled)?;
        self.accessibility.color_blind = enabled;
        self.notify(&ThemeEvent::AccessibilityChanged(self.accessibility));
        Ok(enabled)
    }

    fn switch(&mut self, mode: ThemeMode) {
        self.mode = mode;
        info!(%mode, "theme switched");
        self.notify(&ThemeEvent::ModeChanged(mode));
    }

    fn notify(&self, event: &ThemeEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("mode", &self.mode)
            .field("preset", &self.preset.name)
            .field("accessibility", &self.accessibility)
            .field("system", &self.system)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
