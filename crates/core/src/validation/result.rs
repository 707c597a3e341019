//! Validation result types.

use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// Two items whose rectangles share at least one cell, in item order.
pub type OverlapPair = (ItemId, ItemId);

/// Aggregate of the geometric checks over one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub overlapping: Vec<OverlapPair>,
    pub out_of_bounds: Vec<ItemId>,
}

impl ValidationResult {
    /// Ids involved in any finding, each once, in first-seen order.
    ///
    /// Editors use this to highlight offending items.
    pub fn offending_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        let pairs = self
            .overlapping
            .iter()
            .flat_map(|(a, b)| [a.as_str(), b.as_str()]);
        for id in pairs.chain(self.out_of_bounds.iter().map(String::as_str)) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// What is wrong with an item's content, independent of its placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ContentIssueKind {
    /// Another item earlier in the list has the same id.
    DuplicateId,
    /// More slideshow entries than the configured limit.
    TooManyContentIds { count: usize, max: usize },
    /// `contentIds` on a type that cannot rotate content.
    UnexpectedContentIds,
    /// Text item with no text.
    MissingText,
    /// Style variant does not belong to the item's content type.
    StyleMismatch { style: String },
    /// Countdown timer without a target instant.
    IncompleteTimer,
}

/// A single content finding for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIssue {
    pub item_id: ItemId,
    #[serde(flatten)]
    pub kind: ContentIssueKind,
    pub message: String,
}

/// Everything the publish gate looks at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    pub validation: ValidationResult,
    pub content_issues: Vec<ContentIssue>,
}

impl LayoutReport {
    pub fn is_publishable(&self) -> bool {
        self.validation.is_valid && self.content_issues.is_empty()
    }

    /// One-line human summary, empty when publishable.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.validation.overlapping.is_empty() {
            let pairs: Vec<String> = self
                .validation
                .overlapping
                .iter()
                .map(|(a, b)| format!("{a}/{b}"))
                .collect();
            parts.push(format!(
                "{} overlapping pair(s): {}",
                pairs.len(),
                pairs.join(", ")
            ));
        }
        if !self.validation.out_of_bounds.is_empty() {
            parts.push(format!(
                "{} item(s) out of bounds: {}",
                self.validation.out_of_bounds.len(),
                self.validation.out_of_bounds.join(", ")
            ));
        }
        if !self.content_issues.is_empty() {
            let messages: Vec<&str> = self
                .content_issues
                .iter()
                .map(|issue| issue.message.as_str())
                .collect();
            parts.push(format!(
                "{} content issue(s): {}",
                messages.len(),
                messages.join("; ")
            ));
        }
        parts.join("; ")
    }
}
