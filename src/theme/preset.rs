use super::ThemeMode;
use serde::Serialize;

/// The five named colors a preset defines for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
}

impl Palette {
    /// `(name, color)` pairs in a fixed order.
    pub fn colors(&self) -> [(&'static str, &'static str); 5] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("success", self.success),
            ("warning", self.warning),
            ("danger", self.danger),
        ]
    }
}

/// A named pair of palettes, one per [`ThemeMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub light: Palette,
    pub dark: Palette,
}

impl ThemePreset {
    pub const DEFAULT_NAME: &'static str = "default";

    /// Look up a built-in preset.
    pub fn find(name: &str) -> Option<&'static ThemePreset> {
        PRESETS.iter().find(|preset| preset.name == name)
    }

    /// The preset used when none is persisted.
    pub fn default_preset() -> &'static ThemePreset {
        &PRESETS[0]
    }

    pub fn all() -> &'static [ThemePreset] {
        &PRESETS
    }

    pub fn palette(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

static PRESETS: [ThemePreset; 3] = [
    ThemePreset {
        name: "default",
        light: Palette {
            primary: "#007bff",
            secondary: "#6c757d",
            success: "#28a745",
            warning: "#ffc107",
            danger: "#dc3545",
        },
        dark: Palette {
            primary: "#4dabf7",
            secondary: "#868e96",
            success: "#51cf66",
            warning: "#ffd43b",
            danger: "#ff6b6b",
        },
    },
    ThemePreset {
        name: "ocean",
        light: Palette {
            primary: "#0077be",
            secondary: "#4a90a4",
            success: "#00a86b",
            warning: "#ffb347",
            danger: "#e74c3c",
        },
        dark: Palette {
            primary: "#5dade2",
            secondary: "#7fb3d3",
            success: "#58d68d",
            warning: "#f7dc6f",
            danger: "#ec7063",
        },
    },
    ThemePreset {
        name: "forest",
        light: Palette {
            primary: "#228b22",
            secondary: "#556b2f",
            success: "#32cd32",
            warning: "#daa520",
            danger: "#dc143c",
        },
        dark: Palette {
            primary: "#90ee90",
            secondary: "#9acd32",
            success: "#98fb98",
            warning: "#f0e68c",
            danger: "#fa8072",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_builtin_presets() {
        let names: Vec<_> = ThemePreset::all().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["default", "ocean", "forest"]);
        assert!(ThemePreset::find("ocean").is_some());
        assert!(ThemePreset::find("sunset").is_none());
    }

    #[test]
    fn palette_follows_mode() {
        let ocean = ThemePreset::find("ocean").unwrap();
        assert_eq!(ocean.palette(ThemeMode::Light).primary, "#0077be");
        assert_eq!(ocean.palette(ThemeMode::Dark).primary, "#5dade2");
    }

    #[test]
    fn colors_are_named() {
        let default = ThemePreset::find(ThemePreset::DEFAULT_NAME).unwrap();
        let colors = default.palette(ThemeMode::Dark).colors();
        assert_eq!(colors[4], ("danger", "#ff6b6b"));
    }
}
