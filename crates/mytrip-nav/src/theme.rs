//! # Theme
//!
//! Palette selection for the navigation bar. The bar is drawn either on a
//! plain page (`normal`) or over a hero image (`transparent`), and every
//! color it uses is a function of that choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::state::SearchFocusState;

/// Semi-transparent white used for text over images.
pub const TRANSPARENT_WHITE: &str = "rgba(255, 255, 255, 0.8)";
/// Default category text on light backgrounds.
pub const DARK_GRAY: &str = "#868e96";
/// Hover underline for categories on light backgrounds.
pub const LIGHT_BLUE: &str = "#a5d0f5";
/// Accent for the signup button on light backgrounds.
pub const DEEP_BLUE: &str = "#2b96ed";

/// Palette selector for the whole bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark text on a light page.
    #[default]
    Normal,
    /// Light text over a background image.
    #[serde(alias = "transparentOverlay")]
    Transparent,
}

impl ThemeMode {
    /// Returns the lowercase name used in config files and on the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Transparent => "transparent",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "transparent" | "transparentOverlay" => Ok(Self::Transparent),
            other => Err(NavError::UnknownTheme(other.to_string())),
        }
    }
}

/// Which logo artwork to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogoVariant {
    Color,
    White,
}

/// Every color the bar uses for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub logo: LogoVariant,
    pub input_text: &'static str,
    pub input_background: &'static str,
    pub input_hover_background: &'static str,
    pub placeholder: &'static str,
    pub profile_text: &'static str,
    pub avatar: &'static str,
    pub signup_accent: &'static str,
    pub category_text: &'static str,
    pub category_hover_underline: &'static str,
    pub selected_category_text: &'static str,
    pub selected_category_underline: &'static str,
}

const NORMAL: Palette = Palette {
    logo: LogoVariant::Color,
    input_text: "rgba(0, 0, 0, 0.8)",
    input_background: "rgba(0, 0, 0, 0.05)",
    input_hover_background: "rgba(136, 16, 16, 0.06)",
    placeholder: "rgba(0, 0, 0, 0.5)",
    profile_text: "#666d75",
    avatar: "gray",
    signup_accent: DEEP_BLUE,
    category_text: DARK_GRAY,
    category_hover_underline: LIGHT_BLUE,
    selected_category_text: "#495056",
    selected_category_underline: "#3c92e0",
};

const TRANSPARENT: Palette = Palette {
    logo: LogoVariant::White,
    input_text: "white",
    input_background: "rgba(255, 255, 255, 0.15)",
    input_hover_background: "rgba(255, 255, 255, 0.25)",
    placeholder: TRANSPARENT_WHITE,
    profile_text: TRANSPARENT_WHITE,
    avatar: TRANSPARENT_WHITE,
    signup_accent: TRANSPARENT_WHITE,
    category_text: "rgba(255, 255, 255, 0.7)",
    category_hover_underline: "rgba(255, 255, 255, 0.5)",
    selected_category_text: "white",
    selected_category_underline: "white",
};

impl Palette {
    /// Returns the palette for `theme`.
    #[must_use]
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Normal => NORMAL,
            ThemeMode::Transparent => TRANSPARENT,
        }
    }
}

/// Color of the search icon.
///
/// The focused input turns white in both themes, so the icon goes gray
/// whenever the theme is normal or the input has focus.
#[must_use]
pub fn search_icon_color(theme: ThemeMode, focus: SearchFocusState) -> &'static str {
    if theme == ThemeMode::Normal || focus.is_focused() {
        "gray"
    } else {
        "white"
    }
}
