//! Color theme and glyphs for the Compass TUI.
//!
//! The palette leans on the indigo/emerald/amber scheme of the original
//! printed plan, with a high-contrast override and an ASCII glyph set for
//! terminals without good Unicode coverage.

use ratatui::style::Color;

use compass_engine::UiOptions;
use compass_types::PriorityLevel;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(17, 18, 28);
    pub const BG_PANEL: Color = Color::Rgb(26, 28, 42);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 62);
    pub const BG_BORDER: Color = Color::Rgb(68, 71, 102);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 228, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(178, 182, 204);
    pub const TEXT_MUTED: Color = Color::Rgb(118, 122, 149);

    // === Brand ===
    pub const INDIGO: Color = Color::Rgb(99, 102, 241);
    pub const EMERALD: Color = Color::Rgb(16, 185, 129);
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const RED: Color = Color::Rgb(239, 68, 68);
    pub const SLATE: Color = Color::Rgb(148, 163, 184);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Brand color: sliders, headers, the high-priority band.
    pub primary: Color,
    /// Target markers, the medium band, success notices.
    pub accent: Color,
    /// Importance stars.
    pub warning: Color,
    pub error: Color,
    pub maintenance: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::INDIGO,
            accent: colors::EMERALD,
            warning: colors::AMBER,
            error: colors::RED,
            maintenance: colors::SLATE,
        }
    }

    /// Pure black/white base with ANSI accents, for low-vision setups.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            primary: Color::LightBlue,
            accent: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            maintenance: Color::Gray,
        }
    }

    /// The badge color for a priority band.
    #[must_use]
    pub fn level_color(&self, level: PriorityLevel) -> Color {
        match level {
            PriorityLevel::High => self.primary,
            PriorityLevel::Medium => self.accent,
            PriorityLevel::Maintenance => self.maintenance,
        }
    }
}

/// Glyph set for gauges, stars and checkboxes.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub slider_filled: &'static str,
    pub slider_empty: &'static str,
    pub slider_marker: &'static str,
    pub star_filled: &'static str,
    pub star_empty: &'static str,
    pub checkbox_on: &'static str,
    pub checkbox_off: &'static str,
    pub cursor: &'static str,
    pub bullet: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn unicode() -> Self {
        Self {
            slider_filled: "█",
            slider_empty: "░",
            slider_marker: "◆",
            star_filled: "★",
            star_empty: "☆",
            checkbox_on: "[x]",
            checkbox_off: "[ ]",
            cursor: "▸",
            bullet: "•",
        }
    }

    #[must_use]
    pub fn ascii() -> Self {
        Self {
            slider_filled: "#",
            slider_empty: "-",
            slider_marker: "o",
            star_filled: "*",
            star_empty: ".",
            checkbox_on: "[x]",
            checkbox_off: "[ ]",
            cursor: ">",
            bullet: "-",
        }
    }
}

/// Resolve the palette from the user's UI options.
#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Resolve the glyph set from the user's UI options.
#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    }
}
