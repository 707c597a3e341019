//! The serializable signage document and its copy-on-write edits.
//!
//! Every edit borrows the current document and returns a new value, so a
//! document handed to a renderer or a history snapshot is never changed
//! underneath its holder. Placement is not enforced here; see
//! [`crate::validation`].

use serde::{Deserialize, Serialize};

use super::background::BackgroundConfig;
use super::item::{ItemPatch, LayoutItem};
use crate::error::CoreError;
use crate::geometry::{is_within_grid, GridConfig};
use crate::template::SignageTemplate;
use crate::types::ItemId;

/// One signage design: grid, background, and positioned items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    pub template_id: String,
    #[serde(default)]
    pub background: BackgroundConfig,
    pub grid: GridConfig,
    #[serde(default)]
    pub items: Vec<LayoutItem>,
}

impl LayoutDocument {
    /// An empty document on the given grid.
    pub fn new(template_id: impl Into<String>, grid: GridConfig) -> Self {
        Self {
            template_id: template_id.into(),
            background: BackgroundConfig::default(),
            grid,
            items: Vec::new(),
        }
    }

    /// Parse a document from the JSON shape returned by the backend.
    ///
    /// Fails with [`CoreError::Validation`] when the grid has a zero
    /// dimension. Item placement is not checked.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let document: Self = serde_json::from_str(json)?;
        document.grid.check()?;
        Ok(document)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn item(&self, id: &str) -> Option<&LayoutItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn index_of(&self, id: &str) -> Result<usize, CoreError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::item_not_found(id))
    }

    /// Same document with its item list replaced, e.g. after undo.
    pub fn with_items(&self, items: Vec<LayoutItem>) -> Self {
        Self {
            items,
            ..self.clone()
        }
    }

    /// Append an item. Its placement is not checked.
    ///
    /// Fails with [`CoreError::Conflict`] when a sibling already uses the id.
    pub fn add_item(&self, item: LayoutItem) -> Result<Self, CoreError> {
        if self.item(&item.id).is_some() {
            return Err(CoreError::Conflict(format!(
                "layout already contains an item with id '{}'",
                item.id
            )));
        }
        let mut next = self.clone();
        next.items.push(item);
        Ok(next)
    }

    /// Remove the item with `id`, keeping the order of the rest.
    pub fn remove_item(&self, id: &str) -> Result<Self, CoreError> {
        let index = self.index_of(id)?;
        let mut next = self.clone();
        next.items.remove(index);
        Ok(next)
    }

    /// Merge `patch` into the item with `id`.
    pub fn update_item(&self, id: &str, patch: ItemPatch) -> Result<Self, CoreError> {
        let index = self.index_of(id)?;
        let mut next = self.clone();
        next.items[index].apply_patch(patch);
        Ok(next)
    }

    /// Replace the grid without reflowing items.
    ///
    /// Returns the new document together with the ids of items that no
    /// longer fit, in item order. A grid with a zero dimension is rejected.
    pub fn change_grid(&self, grid: GridConfig) -> Result<(Self, Vec<ItemId>), CoreError> {
        grid.check()?;
        let out_of_bounds = self
            .items
            .iter()
            .filter(|item| !is_within_grid(&item.position, &grid))
            .map(|item| item.id.clone())
            .collect();
        let next = Self {
            grid,
            ..self.clone()
        };
        Ok((next, out_of_bounds))
    }
}

/// Build a fresh document from a template's defaults.
///
/// Grid, background, and items are taken wholesale from the template; nothing
/// from a previously loaded document survives.
pub fn apply_template(template: &SignageTemplate) -> LayoutDocument {
    let mut document = template.layout.clone();
    document.template_id = template.id.clone();
    document
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
