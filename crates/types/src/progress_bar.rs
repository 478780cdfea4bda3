//! Progress bar configuration types

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Default widget width in pixels
pub const DEFAULT_WIDTH: i32 = 300;
/// Default widget height in pixels
pub const DEFAULT_HEIGHT: i32 = 30;
/// Default label font, as a Pango font description string
pub const DEFAULT_FONT: &str = "Segoe UI 9";
pub const DEFAULT_MINIMUM: f64 = 0.0;
pub const DEFAULT_MAXIMUM: f64 = 100.0;

/// Axis the bar fills along
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Orientation {
    #[serde(rename = "horizontal")]
    #[default]
    Horizontal, // Fills left to right
    #[serde(rename = "vertical")]
    Vertical, // Fills bottom to top
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        self == Orientation::Vertical
    }
}

/// What gets drawn centered on top of the bar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CenterElement {
    #[serde(rename = "none")]
    #[default]
    None,
    #[serde(rename = "text")]
    Text, // The widget's label text, verbatim
    #[serde(rename = "percentage")]
    Percentage, // The value rounded to an integer
}

/// Border configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BorderConfig {
    pub enabled: bool,
    pub color: Color,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::BLACK,
        }
    }
}

/// Every settable property of the progress bar widget.
///
/// Values are applied through the widget's validating setters, so a config
/// with `minimum >= maximum` or a value outside the range is rejected when
/// the widget is built from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProgressBarConfig {
    pub width: i32,
    pub height: i32,

    pub minimum: f64,
    pub maximum: f64,
    pub value: f64,

    pub orientation: Orientation,
    pub border_radius: i32,
    /// Track half the governing dimension instead of `border_radius`
    pub rounded_corners: bool,
    pub border: BorderConfig,

    pub progress_background: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub foreground: Color,
    pub background: Color,

    pub center_element: CenterElement,
    pub text: String,
    pub font: String,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            value: DEFAULT_MINIMUM,
            orientation: Orientation::default(),
            border_radius: 0,
            rounded_corners: false,
            border: BorderConfig::default(),
            progress_background: Color::WHITE,
            gradient_start: Color::LIGHT_SKY_BLUE,
            gradient_end: Color::STEEL_BLUE,
            foreground: Color::BLACK,
            background: Color::TRANSPARENT,
            center_element: CenterElement::default(),
            text: String::new(),
            font: DEFAULT_FONT.to_string(),
        }
    }
}
