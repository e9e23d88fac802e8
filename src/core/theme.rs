//! # Theme
//!
//! Colors, dimensions, indicator style and blur/elevation treatment.
//! A `ThemeConfig` is fixed for the lifetime of a bar; restyling means
//! building a new bar.
//!
//! The four named presets are plain records, not behavior.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A 32-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const GRAY: Argb = Argb(0xFF88_8888);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Same color with alpha replaced by `fraction` of full opacity.
    #[must_use]
    pub fn with_alpha(self, fraction: f32) -> Argb {
        let alpha = (fraction.clamp(0.0, 1.0) * 255.0).round() as u32;
        Argb((alpha << 24) | (self.0 & 0x00FF_FFFF))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavColors {
    pub background: Argb,
    pub border: Argb,
    pub selected_icon: Argb,
    pub unselected_icon: Argb,
    pub selected_text: Argb,
    pub unselected_text: Argb,
    pub selected_ripple: Argb,
}

impl Default for NavColors {
    fn default() -> Self {
        Self {
            background: Argb::WHITE,
            border: Argb(0xFFE0_E0E0),
            selected_icon: Argb::BLACK,
            unselected_icon: Argb::GRAY,
            selected_text: Argb::BLACK,
            unselected_text: Argb::GRAY,
            selected_ripple: Argb(0x1F00_0000),
        }
    }
}

/// How the selected item is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorStyle {
    /// Filled pill behind the selected item.
    Ripple { padding: f32 },
    /// Underline below the selected item.
    Line { thickness: f32, length: f32 },
    /// Small dot below the selected item.
    Dot { size: f32, padding: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    pub height: f32,
    pub corner_radius: f32,
    pub max_width: f32,
    pub icon_size: f32,
    pub animation_duration_ms: u32,
    pub enable_blur: bool,
    pub blur_intensity: f32,
    pub show_labels: bool,
    pub hide_labels_on_search_expand: bool,
    pub show_border: bool,
    pub elevation: f32,
    pub colors: NavColors,
    pub indicator: IndicatorStyle,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            height: 64.0,
            corner_radius: 32.0,
            max_width: 480.0,
            icon_size: 24.0,
            animation_duration_ms: 300,
            enable_blur: false,
            blur_intensity: 0.8,
            show_labels: true,
            hide_labels_on_search_expand: false,
            show_border: false,
            elevation: 0.0,
            colors: NavColors::default(),
            indicator: IndicatorStyle::Ripple { padding: 4.0 },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePreset {
    /// Rounded pill with glassmorphism and labels.
    #[default]
    ModernPill,
    /// Shorter pill, icons only.
    ModernPillCompact,
    /// Flat, square, underline indicator.
    Instagram,
    /// Compact floating bar with a dot indicator.
    FloatingMinimal,
}

impl StylePreset {
    pub const ALL: [StylePreset; 4] = [
        StylePreset::ModernPill,
        StylePreset::ModernPillCompact,
        StylePreset::Instagram,
        StylePreset::FloatingMinimal,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            StylePreset::ModernPill => "Modern Pill",
            StylePreset::ModernPillCompact => "Modern Pill (compact)",
            StylePreset::Instagram => "Instagram",
            StylePreset::FloatingMinimal => "Floating Minimal",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StylePreset::ModernPill | StylePreset::ModernPillCompact => {
                "Rounded pill design with glassmorphism, perfect for modern apps"
            }
            StylePreset::Instagram => "Flat design with no rounded corners, minimal and clean",
            StylePreset::FloatingMinimal => "Compact floating bar, ideal for one-handed use",
        }
    }

    /// Next preset in `ALL`, wrapping around.
    #[must_use]
    pub fn next(self) -> StylePreset {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn config(self) -> ThemeConfig {
        let pill_colors = NavColors {
            background: Argb(0xFFFF_FFFF).with_alpha(0.9),
            border: Argb(0xFFE0_E0E0),
            selected_icon: Argb(0xFF62_00EE),
            unselected_icon: Argb(0xFF66_6666),
            selected_text: Argb(0xFF62_00EE),
            unselected_text: Argb(0xFF99_9999),
            selected_ripple: Argb(0x3362_00EE),
        };

        match self {
            StylePreset::ModernPill => ThemeConfig {
                height: 60.0,
                corner_radius: 60.0,
                max_width: 460.0,
                animation_duration_ms: 250,
                enable_blur: true,
                blur_intensity: 0.95,
                show_labels: true,
                hide_labels_on_search_expand: true,
                show_border: true,
                elevation: 0.0,
                colors: pill_colors,
                indicator: IndicatorStyle::Ripple { padding: 4.0 },
                ..ThemeConfig::default()
            },
            StylePreset::ModernPillCompact => ThemeConfig {
                height: 52.0,
                corner_radius: 26.0,
                max_width: 460.0,
                animation_duration_ms: 250,
                enable_blur: true,
                blur_intensity: 0.95,
                show_labels: false,
                hide_labels_on_search_expand: true,
                show_border: true,
                elevation: 0.0,
                colors: pill_colors,
                indicator: IndicatorStyle::Ripple { padding: 4.0 },
                ..ThemeConfig::default()
            },
            StylePreset::Instagram => ThemeConfig {
                height: 60.0,
                corner_radius: 0.0,
                max_width: 600.0,
                animation_duration_ms: 200,
                enable_blur: false,
                show_labels: false,
                icon_size: 32.0,
                show_border: false,
                elevation: 0.0,
                colors: NavColors {
                    background: Argb::BLACK,
                    selected_icon: Argb::WHITE,
                    unselected_icon: Argb::GRAY,
                    selected_ripple: Argb::TRANSPARENT,
                    ..NavColors::default()
                },
                indicator: IndicatorStyle::Line {
                    thickness: 2.0,
                    length: 32.0,
                },
                ..ThemeConfig::default()
            },
            StylePreset::FloatingMinimal => ThemeConfig {
                height: 56.0,
                corner_radius: 28.0,
                max_width: 320.0,
                animation_duration_ms: 300,
                enable_blur: false,
                show_labels: false,
                show_border: false,
                elevation: 12.0,
                colors: NavColors {
                    background: Argb(0xFF1E_1E1E),
                    selected_icon: Argb(0xFF00_D9FF),
                    unselected_icon: Argb(0xFF66_6666),
                    selected_ripple: Argb(0x3300_D9FF),
                    ..NavColors::default()
                },
                indicator: IndicatorStyle::Dot {
                    size: 8.0,
                    padding: 6.0,
                },
                ..ThemeConfig::default()
            },
        }
    }
}
