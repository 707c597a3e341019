use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Image,
    Gradient,
}

/// Canvas background.
///
/// `value` is a CSS color for `color`, an image reference for `image`, and a
/// CSS gradient expression for `gradient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub value: String,
}

impl BackgroundConfig {
    pub fn color(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: value.into(),
        }
    }

    pub fn image(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Image,
            value: value.into(),
        }
    }

    pub fn gradient(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            value: value.into(),
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::color("#ffffff")
    }
}
