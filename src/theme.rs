//! Theme support module for the task list viewer
//!
//! This module defines the two presentation modes (light and dark), their
//! color palettes, and the mapping of palettes onto egui visuals. Semantic
//! color lookups for task fields (status, priority, color name) live here as
//! well so panels never hardcode colors.
//!
//! # Examples
//!
//! ```
//! use rtasks::theme::ThemePreference;
//!
//! let pref = ThemePreference::Light;
//! assert_eq!(pref.toggled(), ThemePreference::Dark);
//! assert_eq!(pref.as_str(), "light");
//! ```

use egui::Color32;

/// The enumerated presentation mode. Exactly two values exist; anything read
/// from the outside world must go through [`ThemePreference::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Returns the complementary preference (light to dark, dark to light).
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Returns true iff this preference selects the dark presentation.
    ///
    /// This is the single boolean projection driven onto the presentation
    /// surface: flag present iff the value is dark.
    pub fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// The stored wire form: the literal string `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a stored wire form back into a preference.
    ///
    /// Returns `None` for anything outside the two legal values, so callers
    /// fall back through their initialization chain instead of trusting an
    /// out-of-enum string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

impl Default for ThemePreference {
    fn default() -> Self {
        ThemePreference::Light
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color palette for a presentation mode, covering the panel surfaces and the
/// semantic colors used for task badges.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Semantic colors (task badges, error text)
    pub red: Color32,
    pub orange: Color32,
    pub yellow: Color32,
    pub green: Color32,
    pub blue: Color32,
    pub purple: Color32,
    pub gray: Color32,
}

const LIGHT_COLORS: ThemeColors = ThemeColors {
    background: Color32::from_rgb(248, 248, 248),
    panel_background: Color32::from_rgb(248, 248, 248),
    extreme_background: Color32::from_rgb(255, 255, 255),

    text: Color32::from_rgb(0, 0, 0),
    text_dim: Color32::from_rgb(120, 120, 120),

    selection: Color32::from_rgb(180, 200, 255),
    hover: Color32::from_rgb(220, 220, 220),
    border: Color32::from_rgb(160, 160, 160),

    // Semantic colors suitable for a light background
    red: Color32::from_rgb(200, 40, 40),
    orange: Color32::from_rgb(230, 120, 20),
    yellow: Color32::from_rgb(180, 140, 0),
    green: Color32::from_rgb(40, 160, 40),
    blue: Color32::from_rgb(40, 100, 200),
    purple: Color32::from_rgb(140, 60, 180),
    gray: Color32::from_rgb(120, 120, 120),
};

const DARK_COLORS: ThemeColors = ThemeColors {
    background: Color32::from_rgb(39, 39, 39),
    panel_background: Color32::from_rgb(39, 39, 39),
    extreme_background: Color32::from_rgb(16, 16, 16),

    text: Color32::from_rgb(255, 255, 255),
    text_dim: Color32::from_rgb(160, 160, 160),

    selection: Color32::from_rgb(50, 80, 120),
    hover: Color32::from_rgb(70, 70, 70),
    border: Color32::from_rgb(100, 100, 100),

    // Semantic colors suitable for a dark background
    red: Color32::from_rgb(231, 76, 60),
    orange: Color32::from_rgb(243, 156, 18),
    yellow: Color32::from_rgb(241, 196, 15),
    green: Color32::from_rgb(46, 204, 113),
    blue: Color32::from_rgb(52, 152, 219),
    purple: Color32::from_rgb(155, 89, 182),
    gray: Color32::from_rgb(149, 165, 166),
};

/// Returns the color palette for a presentation mode.
pub fn palette(pref: ThemePreference) -> &'static ThemeColors {
    match pref {
        ThemePreference::Light => &LIGHT_COLORS,
        ThemePreference::Dark => &DARK_COLORS,
    }
}

/// Applies a palette's colors on top of egui visuals.
///
/// Callers start from `Visuals::light()` or `Visuals::dark()` matching the
/// preference, then layer these overrides.
pub fn apply_palette(pref: ThemePreference, visuals: &mut egui::Visuals) {
    let colors = palette(pref);

    // Override background colors
    visuals.panel_fill = colors.panel_background;
    visuals.extreme_bg_color = colors.extreme_background;
    visuals.faint_bg_color = colors.hover;

    // Override text colors
    visuals.override_text_color = Some(colors.text);

    // Override selection
    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.blue;

    // Override widget colors
    visuals.widgets.noninteractive.bg_fill = colors.panel_background;
    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.selection;

    // Override hyperlink
    visuals.hyperlink_color = colors.blue;

    // Override error/warning colors
    visuals.error_fg_color = colors.red;
    visuals.warn_fg_color = colors.orange;
}

/// Maps a task's color name (one of the backend's color values) to a palette
/// color. Unknown names fall back to gray.
pub fn task_color(colors: &ThemeColors, name: &str) -> Color32 {
    match name {
        "Red" => colors.red,
        "Green" => colors.green,
        "Blue" => colors.blue,
        "Yellow" => colors.yellow,
        "Purple" => colors.purple,
        _ => colors.gray,
    }
}

/// Maps a task priority to a palette color. Unknown priorities fall back to
/// the dim text color.
pub fn priority_color(colors: &ThemeColors, priority: &str) -> Color32 {
    match priority {
        "High" => colors.red,
        "Medium" => colors.orange,
        "Low" => colors.green,
        _ => colors.text_dim,
    }
}

/// Maps a task status to a palette color. Unknown statuses fall back to the
/// dim text color.
pub fn status_color(colors: &ThemeColors, status: &str) -> Color32 {
    match status {
        "Completed" => colors.green,
        "In Progress" => colors.blue,
        "Pending" => colors.gray,
        _ => colors.text_dim,
    }
}
