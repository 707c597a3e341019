//! Content items placed on the signage grid.

use serde::{Deserialize, Serialize};

use super::style::ItemStyle;
use crate::geometry::GridPosition;
use crate::types::ItemId;

/// Kind of widget an item renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    News,
    Animal,
    Text,
    UserImage,
    Weather,
    Timer,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::News,
        ContentType::Animal,
        ContentType::Text,
        ContentType::UserImage,
        ContentType::Weather,
        ContentType::Timer,
    ];

    /// Content types that can rotate through several `contentIds`.
    pub fn is_slideshow(self) -> bool {
        matches!(
            self,
            ContentType::News | ContentType::Animal | ContentType::UserImage
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Animal => "animal",
            ContentType::Text => "text",
            ContentType::UserImage => "user_image",
            ContentType::Weather => "weather",
            ContentType::Timer => "timer",
        }
    }
}

/// One widget on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub position: GridPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ItemStyle>,
}

impl LayoutItem {
    /// A bare item with no content reference.
    pub fn new(id: impl Into<ItemId>, content_type: ContentType, position: GridPosition) -> Self {
        Self {
            id: id.into(),
            content_type,
            position,
            content_id: None,
            content_ids: None,
            text_content: None,
            style: None,
        }
    }

    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    pub fn with_content_ids(mut self, content_ids: Vec<String>) -> Self {
        self.content_ids = Some(content_ids);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    pub fn with_style(mut self, style: ItemStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Merge the fields present in `patch` into this item.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(content_id) = patch.content_id {
            self.content_id = Some(content_id);
        }
        if let Some(content_ids) = patch.content_ids {
            self.content_ids = Some(content_ids);
        }
        if let Some(text) = patch.text_content {
            self.text_content = Some(text);
        }
        if let Some(style) = patch.style {
            self.style = Some(style);
        }
    }
}

/// Partial update for [`LayoutItem`]. Absent fields are left untouched.
///
/// `id` and `type` are not patchable; replace the item instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPatch {
    pub position: Option<GridPosition>,
    pub content_id: Option<String>,
    pub content_ids: Option<Vec<String>>,
    pub text_content: Option<String>,
    pub style: Option<ItemStyle>,
}

impl ItemPatch {
    pub fn position(position: GridPosition) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text_content: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// Next sequential `item-<n>` id, one past the highest numbered sibling.
///
/// Ids that do not follow the `item-<n>` pattern are ignored.
pub fn next_item_id<'a, I>(existing: I) -> ItemId
where
    I: IntoIterator<Item = &'a LayoutItem>,
{
    let highest = existing
        .into_iter()
        .filter_map(|item| item.id.strip_prefix("item-"))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("item-{}", highest + 1)
}

/// Globally unique `item-<uuid>` id for items created outside a sequence.
pub fn generate_item_id() -> ItemId {
    format!("item-{}", uuid::Uuid::new_v4())
}
