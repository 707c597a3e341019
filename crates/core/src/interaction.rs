//! Drag and resize math: pixel gestures to grid-cell edits.
//!
//! Pointer deltas are measured on the reference canvas, snapped to whole
//! cells, and clamped so the result always stays inside the grid. Overlap is
//! not checked here; a drag may land on another item and validation reports
//! it later.

use serde::{Deserialize, Serialize};

use crate::geometry::{cell_size, CanvasSize, GridConfig, GridPosition};

/// Whole-cell displacement derived from a pixel gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridDelta {
    pub dx: i32,
    pub dy: i32,
}

impl GridDelta {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Which part of the item a gesture edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    /// Translate; size is preserved.
    Move,
    /// Grow or shrink from the bottom-right corner; origin is preserved.
    Resize,
}

/// Result of applying a gesture to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    /// Nothing to commit: the gesture snapped to zero cells, or clamping
    /// pinned the item where it already was.
    NoOp,
    /// The item should be committed at `to`.
    Changed { from: GridPosition, to: GridPosition },
}

impl DragOutcome {
    pub fn is_change(&self) -> bool {
        matches!(self, DragOutcome::Changed { .. })
    }
}

/// Round half toward positive infinity, matching the browser rule the
/// editor front-end snaps with.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Snap a pixel delta to whole grid cells.
pub fn grid_delta(dx: f64, dy: f64, grid: &GridConfig, canvas: &CanvasSize) -> GridDelta {
    let (cell_w, cell_h) = cell_size(grid, canvas);
    GridDelta {
        dx: round_half_up(dx / cell_w),
        dy: round_half_up(dy / cell_h),
    }
}

/// Clamp `value` into `[0, max]`, with `0` winning when `max` is negative.
fn clamp_low(value: i64, max: i64) -> i32 {
    value.min(max).max(0) as i32
}

/// Translate `position` by `delta`, pinned inside the grid.
pub fn move_position(position: &GridPosition, delta: GridDelta, grid: &GridConfig) -> GridPosition {
    let max_x = i64::from(grid.columns) - i64::from(position.w);
    let max_y = i64::from(grid.rows) - i64::from(position.h);
    GridPosition {
        x: clamp_low(i64::from(position.x) + i64::from(delta.dx), max_x),
        y: clamp_low(i64::from(position.y) + i64::from(delta.dy), max_y),
        ..*position
    }
}

/// Resize `position` by `delta` from its bottom-right corner.
///
/// Width and height stay at least one cell and never reach past the grid
/// edge. An origin left outside the grid (e.g. after the grid shrank) is
/// first pulled onto the last column or row, so the result always fits.
pub fn resize_position(position: &GridPosition, delta: GridDelta, grid: &GridConfig) -> GridPosition {
    let x = clamp_low(i64::from(position.x), i64::from(grid.columns) - 1);
    let y = clamp_low(i64::from(position.y), i64::from(grid.rows) - 1);
    let max_w = i64::from(grid.columns) - i64::from(x);
    let max_h = i64::from(grid.rows) - i64::from(y);
    GridPosition {
        x,
        y,
        w: (i64::from(position.w) + i64::from(delta.dx)).min(max_w).max(1) as i32,
        h: (i64::from(position.h) + i64::from(delta.dy)).min(max_h).max(1) as i32,
    }
}

/// Full gesture pipeline: snap, short-circuit on zero, then move or resize.
pub fn apply_gesture(
    kind: GestureKind,
    position: &GridPosition,
    dx: f64,
    dy: f64,
    grid: &GridConfig,
    canvas: &CanvasSize,
) -> DragOutcome {
    let delta = grid_delta(dx, dy, grid, canvas);
    if delta.is_zero() {
        return DragOutcome::NoOp;
    }
    let to = match kind {
        GestureKind::Move => move_position(position, delta, grid),
        GestureKind::Resize => resize_position(position, delta, grid),
    };
    if to == *position {
        DragOutcome::NoOp
    } else {
        DragOutcome::Changed {
            from: *position,
            to,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
