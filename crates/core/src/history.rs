//! Bounded undo/redo history over layout snapshots.
//!
//! Two independent stacks. Pushing a fresh checkpoint clears redo, so history
//! is strictly linear: there is no redo into an abandoned branch. Each stack
//! drops its oldest entry once it reaches capacity.
//!
//! An entry always holds the item list. Entries taken from a whole document
//! also hold its frame (template id, background, grid), so edits that swap
//! the grid or the template restore exactly.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::geometry::GridConfig;
use crate::layout::{BackgroundConfig, LayoutDocument, LayoutItem};
use crate::types::Timestamp;

/// Everything in a document except its items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFrame {
    pub template_id: String,
    pub background: BackgroundConfig,
    pub grid: GridConfig,
}

impl DocumentFrame {
    fn of(document: &LayoutDocument) -> Self {
        Self {
            template_id: document.template_id.clone(),
            background: document.background.clone(),
            grid: document.grid,
        }
    }
}

/// One snapshot of the item list, optionally with its document frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub items: Vec<LayoutItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<DocumentFrame>,
    pub timestamp: Timestamp,
}

impl HistoryEntry {
    fn capture(items: &[LayoutItem]) -> Self {
        Self {
            items: items.to_vec(),
            frame: None,
            timestamp: chrono::Utc::now(),
        }
    }

    fn capture_document(document: &LayoutDocument) -> Self {
        Self {
            items: document.items.clone(),
            frame: Some(DocumentFrame::of(document)),
            timestamp: chrono::Utc::now(),
        }
    }

    /// Rebuild a document from this entry. Entries without a frame keep
    /// `current`'s frame.
    fn restore(self, current: &LayoutDocument) -> LayoutDocument {
        match self.frame {
            Some(frame) => LayoutDocument {
                template_id: frame.template_id,
                background: frame.background,
                grid: frame.grid,
                items: self.items,
            },
            None => current.with_items(self.items),
        }
    }
}

/// LIFO stack that evicts from the bottom when full.
#[derive(Debug, Clone)]
struct BoundedStack {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl BoundedStack {
    fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
            tracing::debug!(capacity = self.capacity, "Evicted oldest history entry");
        }
        self.entries.push_back(entry);
    }

    fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Undo and redo stacks for one editor session.
#[derive(Debug, Clone)]
pub struct History {
    undo: BoundedStack,
    redo: BoundedStack,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Empty history whose stacks each hold at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: BoundedStack::new(capacity),
            redo: BoundedStack::new(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.undo.capacity
    }

    /// Checkpoint `items` before an edit. Always clears redo.
    pub fn push(&mut self, items: &[LayoutItem]) {
        self.undo.push(HistoryEntry::capture(items));
        self.redo.clear();
    }

    /// Step back. `current` is saved for redo and the previous snapshot is
    /// returned. Returns `None` and leaves both stacks alone when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: &[LayoutItem]) -> Option<Vec<LayoutItem>> {
        let previous = self.undo.pop()?;
        self.redo.push(HistoryEntry::capture(current));
        Some(previous.items)
    }

    /// Step forward again after an undo. Symmetric to [`History::undo`].
    pub fn redo(&mut self, current: &[LayoutItem]) -> Option<Vec<LayoutItem>> {
        let next = self.redo.pop()?;
        self.undo.push(HistoryEntry::capture(current));
        Some(next.items)
    }

    /// Checkpoint a whole document, frame included. Always clears redo.
    pub fn push_document(&mut self, document: &LayoutDocument) {
        self.undo.push(HistoryEntry::capture_document(document));
        self.redo.clear();
    }

    /// Document-level [`History::undo`]: restores the grid, background and
    /// template id along with the items when the entry carries them.
    pub fn undo_document(&mut self, current: &LayoutDocument) -> Option<LayoutDocument> {
        let previous = self.undo.pop()?;
        self.redo.push(HistoryEntry::capture_document(current));
        Some(previous.restore(current))
    }

    /// Document-level [`History::redo`].
    pub fn redo_document(&mut self, current: &LayoutDocument) -> Option<LayoutDocument> {
        let next = self.redo.pop()?;
        self.undo.push(HistoryEntry::capture_document(current));
        Some(next.restore(current))
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo entries from oldest to newest.
    pub fn undo_entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.undo.entries.iter()
    }

    /// Drop both stacks, e.g. when a different document is loaded.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
