//! Editor session: one document, its history, and the config they run under.
//!
//! The session is an explicit, caller-owned value. Several can coexist (one
//! per open tab, one per test) without sharing state. Every committing edit
//! checkpoints the pre-edit items first, so it can be undone; an edit that
//! fails or changes nothing leaves history untouched.

use crate::config::EditorConfig;
use crate::error::CoreError;
use crate::geometry::{CanvasSize, GridConfig};
use crate::history::History;
use crate::interaction::{apply_gesture, DragOutcome, GestureKind};
use crate::layout::{apply_template, ItemPatch, LayoutDocument, LayoutItem};
use crate::template::SignageTemplate;
use crate::types::ItemId;
use crate::validation::{
    ensure_publishable, inspect_layout, validate_layout, LayoutReport, ValidationResult,
};

#[derive(Debug, Clone)]
pub struct EditorSession {
    document: LayoutDocument,
    history: History,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(document: LayoutDocument, config: EditorConfig) -> Self {
        Self {
            document,
            history: History::new(config.history_capacity),
            config,
        }
    }

    /// Start a session from a template's default layout.
    pub fn from_template(template: &SignageTemplate, config: EditorConfig) -> Self {
        Self::new(apply_template(template), config)
    }

    pub fn document(&self) -> &LayoutDocument {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Give up the session and keep the document, e.g. to hand it to the
    /// persistence layer.
    pub fn into_document(self) -> LayoutDocument {
        self.document
    }

    fn canvas(&self) -> CanvasSize {
        CanvasSize::new(
            f64::from(self.config.canvas_width),
            f64::from(self.config.canvas_height),
        )
    }

    /// Checkpoint the live document so the next edit can be undone.
    ///
    /// The grid, background and template id are captured with the items, so
    /// grid changes and template swaps undo as a whole.
    pub fn checkpoint(&mut self) {
        self.history.push_document(&self.document);
    }

    fn commit(&mut self, next: LayoutDocument) {
        self.checkpoint();
        self.document = next;
    }

    // -- document lifecycle --------------------------------------------------

    /// Switch to a different document. History from the previous one is
    /// dropped so undo can never cross documents.
    pub fn load_document(&mut self, document: LayoutDocument) {
        tracing::debug!(
            template_id = %document.template_id,
            items = document.items.len(),
            "Loaded layout"
        );
        self.document = document;
        self.history.clear();
    }

    /// Replace the document with a template's defaults. Undo brings back the
    /// previous document whole, grid and template id included.
    pub fn apply_template(&mut self, template: &SignageTemplate) {
        let next = apply_template(template);
        tracing::debug!(template_id = %template.id, "Applied template");
        self.commit(next);
    }

    // -- item edits ----------------------------------------------------------

    pub fn add_item(&mut self, item: LayoutItem) -> Result<(), CoreError> {
        let id = item.id.clone();
        let next = self.document.add_item(item)?;
        tracing::debug!(item_id = %id, "Added item");
        self.commit(next);
        Ok(())
    }

    pub fn remove_item(&mut self, id: &str) -> Result<(), CoreError> {
        let next = self.document.remove_item(id)?;
        tracing::debug!(item_id = %id, "Removed item");
        self.commit(next);
        Ok(())
    }

    pub fn update_item(&mut self, id: &str, patch: ItemPatch) -> Result<(), CoreError> {
        let next = self.document.update_item(id, patch)?;
        tracing::debug!(item_id = %id, "Updated item");
        self.commit(next);
        Ok(())
    }

    /// Replace the grid. Returns the ids of items that no longer fit; they
    /// are left in place for the user to fix. A grid with a zero dimension is
    /// rejected and nothing is checkpointed.
    pub fn change_grid(&mut self, grid: GridConfig) -> Result<Vec<ItemId>, CoreError> {
        let (next, out_of_bounds) = self.document.change_grid(grid)?;
        tracing::debug!(
            columns = grid.columns,
            rows = grid.rows,
            out_of_bounds = out_of_bounds.len(),
            "Changed grid"
        );
        self.commit(next);
        Ok(out_of_bounds)
    }

    // -- gestures ------------------------------------------------------------

    /// Apply a drag of `(dx, dy)` reference-canvas pixels to item `id`.
    pub fn drag_item(&mut self, id: &str, dx: f64, dy: f64) -> Result<DragOutcome, CoreError> {
        self.gesture(GestureKind::Move, id, dx, dy)
    }

    /// Apply a bottom-right resize of `(dx, dy)` pixels to item `id`.
    pub fn resize_item(&mut self, id: &str, dx: f64, dy: f64) -> Result<DragOutcome, CoreError> {
        self.gesture(GestureKind::Resize, id, dx, dy)
    }

    fn gesture(
        &mut self,
        kind: GestureKind,
        id: &str,
        dx: f64,
        dy: f64,
    ) -> Result<DragOutcome, CoreError> {
        let item = self
            .document
            .item(id)
            .ok_or_else(|| CoreError::item_not_found(id))?;
        let outcome = apply_gesture(
            kind,
            &item.position,
            dx,
            dy,
            &self.document.grid,
            &self.canvas(),
        );

        if let DragOutcome::Changed { from, to } = outcome {
            let next = self.document.update_item(id, ItemPatch::position(to))?;
            tracing::debug!(item_id = %id, ?kind, ?from, ?to, "Committed gesture");
            self.commit(next);
        }
        Ok(outcome)
    }

    // -- history -------------------------------------------------------------

    /// Restore the previous snapshot. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo_document(&self.document) {
            Some(previous) => {
                self.document = previous;
                tracing::debug!(remaining = self.history.undo_len(), "Undo");
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone snapshot. Returns `false` if there was none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo_document(&self.document) {
            Some(next) => {
                self.document = next;
                tracing::debug!(remaining = self.history.redo_len(), "Redo");
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all history without touching the document.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // -- validation ----------------------------------------------------------

    pub fn validate(&self) -> ValidationResult {
        validate_layout(&self.document.items, &self.document.grid)
    }

    pub fn inspect(&self) -> LayoutReport {
        inspect_layout(&self.document, &self.config)
    }

    /// Publish gate. Returns the document when it is ready to be saved.
    pub fn ensure_publishable(&self) -> Result<&LayoutDocument, CoreError> {
        ensure_publishable(&self.document, &self.config)?;
        Ok(&self.document)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::geometry::GridPosition;
    use crate::layout::ContentType;
    use crate::template::find_template;

    fn session() -> EditorSession {
        EditorSession::from_template(find_template("basic").unwrap(), EditorConfig::default())
    }

    fn x_of(session: &EditorSession, id: &str) -> i32 {
        session.document().item(id).map(|i| i.position.x).unwrap()
    }

    #[test]
    fn drag_commits_and_checkpoints() {
        let mut s = session();
        let outcome = s.drag_item("item-1", 160.0, 0.0).unwrap();
        assert!(outcome.is_change());
        assert_eq!(x_of(&s, "item-1"), 1);
        assert_eq!(s.history().undo_len(), 1);
    }

    #[test]
    fn zero_drag_leaves_history_alone() {
        let mut s = session();
        let outcome = s.drag_item("item-1", 0.0, 0.0).unwrap();
        assert_eq!(outcome, DragOutcome::NoOp);
        assert!(!s.can_undo());
        assert_eq!(x_of(&s, "item-1"), 0);
    }

    #[test]
    fn drag_unknown_item_is_not_found() {
        let mut s = session();
        assert_matches!(s.drag_item("ghost", 160.0, 0.0), Err(CoreError::NotFound { .. }));
        assert!(!s.can_undo());
    }

    #[test]
    fn drag_may_create_overlap() {
        let mut s = session();
        s.drag_item("item-1", 320.0, 0.0).unwrap();
        let result = s.validate();
        assert!(!result.is_valid);
        assert_eq!(result.overlapping, vec![("item-1".to_string(), "item-2".to_string())]);
    }

    #[test]
    fn resize_changes_size_only() {
        let mut s = session();
        s.resize_item("item-2", 0.0, -135.0).unwrap();
        let item = s.document().item("item-2").unwrap();
        assert_eq!(item.position, GridPosition::new(7, 0, 5, 5));
    }

    #[test]
    fn undo_and_redo_restore_items() {
        let mut s = session();
        s.drag_item("item-1", 160.0, 0.0).unwrap();
        assert!(s.undo());
        assert_eq!(x_of(&s, "item-1"), 0);
        assert!(s.can_redo());
        assert!(s.redo());
        assert_eq!(x_of(&s, "item-1"), 1);
        assert!(!s.redo());
    }

    #[test]
    fn undo_on_fresh_session_is_false() {
        let mut s = session();
        assert!(!s.undo());
    }

    #[test]
    fn failed_edit_does_not_checkpoint() {
        let mut s = session();
        assert!(s.remove_item("ghost").is_err());
        assert!(s.update_item("ghost", ItemPatch::default()).is_err());
        let duplicate = LayoutItem::new("item-1", ContentType::Timer, GridPosition::new(0, 0, 1, 1));
        assert!(s.add_item(duplicate).is_err());
        assert!(!s.can_undo());
    }

    #[test]
    fn add_remove_update_are_undoable() {
        let mut s = session();
        let id = crate::layout::next_item_id(&s.document().items);
        s.add_item(LayoutItem::new(id.clone(), ContentType::Timer, GridPosition::new(6, 0, 1, 1)))
            .unwrap();
        s.update_item(&id, ItemPatch::position(GridPosition::new(6, 1, 1, 1))).unwrap();
        s.remove_item("item-3").unwrap();
        assert_eq!(s.history().undo_len(), 3);

        s.undo();
        assert!(s.document().item("item-3").is_some());
        s.undo();
        assert_eq!(s.document().item(&id).map(|i| i.position.y), Some(0));
        s.undo();
        assert!(s.document().item(&id).is_none());
    }

    #[test]
    fn load_document_clears_history() {
        let mut s = session();
        s.drag_item("item-1", 160.0, 0.0).unwrap();
        s.undo();
        s.load_document(LayoutDocument::new("blank", GridConfig::new(4, 4)));
        assert!(!s.can_undo());
        assert!(!s.can_redo());
        assert!(s.document().items.is_empty());
    }

    #[test]
    fn apply_template_undo_restores_whole_document() {
        let mut s = EditorSession::from_template(
            find_template("simple").unwrap(),
            EditorConfig::default(),
        );
        let original = s.document().clone();

        s.apply_template(find_template("basic").unwrap());
        assert_eq!(s.document().template_id, "basic");
        assert_eq!(s.document().grid, GridConfig::new(12, 8));
        assert_eq!(s.document().items.len(), 3);

        assert!(s.undo());
        assert_eq!(s.document(), &original);
        assert_eq!(s.document().template_id, "simple");
        assert_eq!(s.document().grid, GridConfig::new(4, 3));
        assert!(s.validate().is_valid);

        assert!(s.redo());
        assert_eq!(s.document().template_id, "basic");
        assert_eq!(s.document().grid, GridConfig::new(12, 8));
    }

    #[test]
    fn change_grid_flags_and_checkpoints() {
        let mut s = session();
        let flagged = s.change_grid(GridConfig::new(6, 8)).unwrap();
        assert_eq!(flagged, vec!["item-2".to_string(), "item-3".to_string()]);
        assert!(s.can_undo());
        assert!(!s.validate().is_valid);
    }

    #[test]
    fn undo_restores_previous_grid() {
        let mut s = session();
        s.change_grid(GridConfig::new(6, 8)).unwrap();

        assert!(s.undo());
        assert_eq!(s.document().grid, GridConfig::new(12, 8));
        assert!(s.validate().is_valid);

        assert!(s.redo());
        assert_eq!(s.document().grid, GridConfig::new(6, 8));
    }

    #[test]
    fn zero_grid_is_rejected_without_checkpoint() {
        let mut s = session();
        let result = s.change_grid(GridConfig::new(0, 8));
        assert_matches!(result, Err(CoreError::Validation(_)));
        assert_eq!(s.document().grid, GridConfig::new(12, 8));
        assert!(!s.can_undo());
    }

    #[test]
    fn history_capacity_comes_from_config() {
        let config = EditorConfig {
            history_capacity: 2,
            ..EditorConfig::default()
        };
        let mut s = EditorSession::from_template(find_template("basic").unwrap(), config);
        for _ in 0..5 {
            s.drag_item("item-3", 0.0, -135.0).unwrap();
            s.drag_item("item-3", 0.0, 135.0).unwrap();
        }
        assert_eq!(s.history().undo_len(), 2);
    }

    #[test]
    fn canvas_size_comes_from_config() {
        let config = EditorConfig {
            canvas_width: 1200,
            ..EditorConfig::default()
        };
        let mut s = EditorSession::from_template(find_template("basic").unwrap(), config);
        s.drag_item("item-1", 100.0, 0.0).unwrap();
        assert_eq!(x_of(&s, "item-1"), 1);
    }

    #[test]
    fn publish_gate_returns_document() {
        let s = session();
        let document = s.ensure_publishable().unwrap();
        assert_eq!(document.template_id, "basic");
    }

    #[test]
    fn publish_gate_blocks_after_overlapping_drag() {
        let mut s = session();
        s.drag_item("item-1", 320.0, 0.0).unwrap();
        assert_matches!(s.ensure_publishable(), Err(CoreError::Validation(_)));
        assert!(!s.inspect().is_publishable());
    }
}
