//! Appearance settings: light/dark mode, color presets and accessibility.
//!
//! Theme state is independent of calculation. It persists through the
//! same [`KeyValueStore`](crate::storage::KeyValueStore) as the rest of
//! the session and notifies subscribers on every change.

mod mode;
mod preset;
mod state;

pub use mode::ThemeMode;
pub use preset::{Palette, ThemePreset};
pub use state::{AccessibilityFlags, SystemPreferences, ThemeEvent, ThemeState};
