//! Per-content-type style records.
//!
//! The editor front-end stores style as a free-form map. Here each content
//! family gets its own variant so a timer can never carry text alignment and
//! a text block never carries a slideshow interval.

use serde::{Deserialize, Serialize};

use super::item::ContentType;
use crate::types::Timestamp;

/// Style attached to a layout item, keyed by the kind of widget it styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemStyle {
    Text(TextStyle),
    Timer(TimerStyle),
    Slideshow(SlideshowStyle),
    Weather(WeatherStyle),
}

impl ItemStyle {
    /// Returns `true` if this style variant may be attached to `content_type`.
    pub fn applies_to(&self, content_type: ContentType) -> bool {
        match self {
            ItemStyle::Text(_) => content_type == ContentType::Text,
            ItemStyle::Timer(_) => content_type == ContentType::Timer,
            ItemStyle::Slideshow(_) => content_type.is_slideshow(),
            ItemStyle::Weather(_) => content_type == ContentType::Weather,
        }
    }

    /// Stable name of the variant, as it appears in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemStyle::Text(_) => "text",
            ItemStyle::Timer(_) => "timer",
            ItemStyle::Slideshow(_) => "slideshow",
            ItemStyle::Weather(_) => "weather",
        }
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Font size in reference-canvas pixels.
    pub font_size: u32,
    pub color: String,
    pub background_color: Option<String>,
    pub align: TextAlign,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 32,
            color: "#ffffff".to_string(),
            background_color: None,
            align: TextAlign::Left,
            bold: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    /// Wall clock.
    #[default]
    Clock,
    /// Counts down to `target`, e.g. the next feeding time.
    Countdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimerStyle {
    pub mode: TimerMode,
    /// Required when `mode` is `countdown`.
    pub target: Option<Timestamp>,
    pub use_24_hour: bool,
    pub show_seconds: bool,
    pub color: String,
}

impl TimerStyle {
    /// A countdown without a target instant has nothing to count toward.
    pub fn is_complete(&self) -> bool {
        self.mode != TimerMode::Countdown || self.target.is_some()
    }
}

impl Default for TimerStyle {
    fn default() -> Self {
        Self {
            mode: TimerMode::Clock,
            target: None,
            use_24_hour: true,
            show_seconds: false,
            color: "#ffffff".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Slideshow (news, animal, user_image)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideTransition {
    #[default]
    Fade,
    Slide,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideshowStyle {
    /// Seconds each content id stays on screen.
    pub interval_secs: u32,
    pub transition: SlideTransition,
    pub show_caption: bool,
}

impl Default for SlideshowStyle {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            transition: SlideTransition::Fade,
            show_caption: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherStyle {
    pub location: Option<String>,
    pub unit: TemperatureUnit,
    pub show_forecast: bool,
}
