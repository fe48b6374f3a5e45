//! Color derivation for the stylesheet.
//!
//! Every hover and alternate background in the generated CSS is derived from
//! the four configured colors through [`shade`] and [`with_alpha`].

use landing_kit_core::{PageConfig, Rgb};

/// Add `amount` to each RGB channel of a hex color.
///
/// Channels clamp to `[0, 255]` instead of wrapping, and the result is always
/// a lowercase, zero-padded `#rrggbb`. `#RGB` input is expanded first.
/// Input that is not a hex color comes back unchanged.
pub fn shade(color: &str, amount: i32) -> String {
    match Rgb::from_hex(color) {
        Some(rgb) => {
            let adjust = |channel: u8| (i32::from(channel) + amount).clamp(0, 255) as u8;
            Rgb::new(adjust(rgb.r), adjust(rgb.g), adjust(rgb.b)).to_hex()
        }
        None => color.to_string(),
    }
}

/// `#rrggbbaa` form of a color with the given alpha byte
pub fn with_alpha(color: &str, alpha: u8) -> String {
    match Rgb::from_hex(color) {
        Some(rgb) => format!("{}{:02x}", rgb.to_hex(), alpha),
        None => format!("{}{:02x}", color, alpha),
    }
}

/// Configured colors plus every shade the stylesheet uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub primary_hover: String,
    pub secondary_hover: String,
    pub secondary_tint: String,
    pub background_dark: String,
    pub background_light: String,
    pub panel_background: String,
    pub form_background: String,
    pub text_soft: String,
}

impl Palette {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            primary: config.primary_color.clone(),
            secondary: config.secondary_color.clone(),
            background: config.background_color.clone(),
            text: config.text_color.clone(),
            primary_hover: shade(&config.primary_color, -20),
            secondary_hover: shade(&config.secondary_color, -20),
            secondary_tint: with_alpha(&config.secondary_color, 0x20),
            background_dark: shade(&config.background_color, -10),
            background_light: shade(&config.background_color, 10),
            panel_background: shade(&config.background_color, -7),
            form_background: shade(&config.background_color, -14),
            text_soft: shade(&config.text_color, 20),
        }
    }
}
