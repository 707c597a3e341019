//! Signage templates and the built-in catalog.
//!
//! A template is a named starting layout. Applying one replaces the whole
//! document (see [`crate::layout::apply_template`]).

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::geometry::{GridConfig, GridPosition};
use crate::layout::style::{SlideshowStyle, TextAlign, TextStyle, TimerStyle, WeatherStyle};
use crate::layout::{BackgroundConfig, ContentType, ItemStyle, LayoutDocument, LayoutItem};

/// A named starting layout offered in the template picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignageTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Reference to a preview image, resolved by the front-end.
    pub thumbnail: String,
    pub layout: LayoutDocument,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Id of the template new signage starts from.
pub const DEFAULT_TEMPLATE_ID: &str = "basic";

/// All built-in templates, in picker order.
pub fn builtin_templates() -> &'static [SignageTemplate] {
    static CATALOG: OnceLock<Vec<SignageTemplate>> = OnceLock::new();
    CATALOG.get_or_init(|| vec![basic(), news_focus(), gallery(), simple()])
}

/// Look up a built-in template by id.
pub fn find_template(id: &str) -> Option<&'static SignageTemplate> {
    builtin_templates().iter().find(|t| t.id == id)
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    grid: GridConfig,
    background: BackgroundConfig,
    items: Vec<LayoutItem>,
) -> SignageTemplate {
    SignageTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        thumbnail: format!("/templates/{id}.png"),
        layout: LayoutDocument {
            template_id: id.to_string(),
            background,
            grid,
            items,
        },
    }
}

fn slideshow() -> ItemStyle {
    ItemStyle::Slideshow(SlideshowStyle::default())
}

fn basic() -> SignageTemplate {
    template(
        "basic",
        "ベーシック",
        "ニュース・写真・メッセージの基本構成",
        GridConfig::new(12, 8),
        BackgroundConfig::color("#fdf6ec"),
        vec![
            LayoutItem::new("item-1", ContentType::News, GridPosition::new(0, 0, 6, 6))
                .with_style(slideshow()),
            LayoutItem::new("item-2", ContentType::Animal, GridPosition::new(7, 0, 5, 6))
                .with_style(slideshow()),
            LayoutItem::new("item-3", ContentType::Text, GridPosition::new(0, 6, 12, 2))
                .with_text("レッサーパンダ舎へようこそ")
                .with_style(ItemStyle::Text(TextStyle {
                    font_size: 48,
                    color: "#5c3317".to_string(),
                    align: TextAlign::Center,
                    ..TextStyle::default()
                })),
        ],
    )
}

fn news_focus() -> SignageTemplate {
    template(
        "news-focus",
        "ニュース特化",
        "大きなニュース枠と天気・時計のサイドバー",
        GridConfig::new(12, 8),
        BackgroundConfig::gradient("linear-gradient(180deg, #c0392b, #2c1810)"),
        vec![
            LayoutItem::new("item-1", ContentType::News, GridPosition::new(0, 0, 8, 8))
                .with_style(slideshow()),
            LayoutItem::new("item-2", ContentType::Weather, GridPosition::new(8, 0, 4, 3))
                .with_style(ItemStyle::Weather(WeatherStyle::default())),
            LayoutItem::new("item-3", ContentType::Timer, GridPosition::new(8, 3, 4, 2))
                .with_style(ItemStyle::Timer(TimerStyle::default())),
            LayoutItem::new("item-4", ContentType::Text, GridPosition::new(8, 5, 4, 3))
                .with_text("本日の飼育員ガイド 14:00〜"),
        ],
    )
}

fn gallery() -> SignageTemplate {
    template(
        "gallery",
        "写真ギャラリー",
        "動物写真を4分割で表示",
        GridConfig::new(12, 8).with_gap(4),
        BackgroundConfig::color("#000000"),
        vec![
            LayoutItem::new("item-1", ContentType::Animal, GridPosition::new(0, 0, 6, 4)),
            LayoutItem::new("item-2", ContentType::Animal, GridPosition::new(6, 0, 6, 4)),
            LayoutItem::new("item-3", ContentType::Animal, GridPosition::new(0, 4, 6, 4)),
            LayoutItem::new("item-4", ContentType::Animal, GridPosition::new(6, 4, 6, 4)),
        ],
    )
}

fn simple() -> SignageTemplate {
    template(
        "simple",
        "シンプル",
        "1枚の画像を全面に表示",
        GridConfig::new(4, 3),
        BackgroundConfig::default(),
        vec![LayoutItem::new(
            "item-1",
            ContentType::UserImage,
            GridPosition::new(0, 0, 4, 3),
        )],
    )
}
