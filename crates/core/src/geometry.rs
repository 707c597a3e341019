//! Grid geometry: cell rectangles, bounds checks, and coordinate transforms.
//!
//! Everything here is a pure function over value types. Positions are
//! measured in grid cells; pixels only appear when converting to or from the
//! reference canvas.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::DEFAULT_GAP;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Dimensions of the layout grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GridConfig {
    #[validate(range(min = 1))]
    pub columns: u32,
    #[validate(range(min = 1))]
    pub rows: u32,
    /// Gap between cells in pixels.
    #[serde(default = "default_gap")]
    pub gap: u32,
}

fn default_gap() -> u32 {
    DEFAULT_GAP
}

impl GridConfig {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            gap: DEFAULT_GAP,
        }
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// Both dimensions must be at least one cell.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(format!("invalid grid: {errors}")))
    }
}

/// A rectangle in grid cells covering `[x, x + w) × [y, y + h)`.
///
/// Fields are signed so that malformed documents still load and surface as
/// out-of-bounds instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }
}

/// Size of the virtual canvas pointer deltas are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(
            f64::from(crate::config::DEFAULT_CANVAS_WIDTH),
            f64::from(crate::config::DEFAULT_CANVAS_HEIGHT),
        )
    }
}

/// Item rectangle as percentages of the canvas, for CSS-style placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Item rectangle in reference-canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Returns `true` if the two rectangles share any cell.
///
/// Intervals are half-open, so rectangles that only touch along an edge do
/// not overlap.
pub fn rectangles_overlap(a: &GridPosition, b: &GridPosition) -> bool {
    let separated = i64::from(a.x) >= b.right()
        || a.right() <= i64::from(b.x)
        || i64::from(a.y) >= b.bottom()
        || a.bottom() <= i64::from(b.y);
    !separated
}

/// Returns `true` if the rectangle lies entirely inside the grid.
pub fn is_within_grid(position: &GridPosition, grid: &GridConfig) -> bool {
    position.x >= 0
        && position.y >= 0
        && position.right() <= i64::from(grid.columns)
        && position.bottom() <= i64::from(grid.rows)
}

// ---------------------------------------------------------------------------
// Coordinate transforms
// ---------------------------------------------------------------------------

/// Width and height of one grid cell on the reference canvas.
pub fn cell_size(grid: &GridConfig, canvas: &CanvasSize) -> (f64, f64) {
    (
        canvas.width / f64::from(grid.columns),
        canvas.height / f64::from(grid.rows),
    )
}

/// Convert a cell rectangle to percentages of the canvas.
pub fn to_percent_rect(position: &GridPosition, grid: &GridConfig) -> PercentRect {
    let columns = f64::from(grid.columns);
    let rows = f64::from(grid.rows);
    PercentRect {
        left: f64::from(position.x) / columns * 100.0,
        top: f64::from(position.y) / rows * 100.0,
        width: f64::from(position.w) / columns * 100.0,
        height: f64::from(position.h) / rows * 100.0,
    }
}

/// Convert a cell rectangle to canvas pixels, inset by half the gap per side.
///
/// Widths never go negative even when the gap exceeds the cell span.
pub fn to_pixel_rect(position: &GridPosition, grid: &GridConfig, canvas: &CanvasSize) -> PixelRect {
    let (cell_w, cell_h) = cell_size(grid, canvas);
    let gap = f64::from(grid.gap);
    PixelRect {
        left: f64::from(position.x) * cell_w + gap / 2.0,
        top: f64::from(position.y) * cell_h + gap / 2.0,
        width: (f64::from(position.w) * cell_w - gap).max(0.0),
        height: (f64::from(position.h) * cell_h - gap).max(0.0),
    }
}

/// Map a point on the canvas to the cell beneath it.
///
/// Returns `None` for points outside the canvas or on a grid with no cells.
pub fn cell_at_point(px: f64, py: f64, grid: &GridConfig, canvas: &CanvasSize) -> Option<(i32, i32)> {
    if grid.cell_count() == 0 {
        return None;
    }
    if !(0.0..canvas.width).contains(&px) || !(0.0..canvas.height).contains(&py) {
        return None;
    }
    let (cell_w, cell_h) = cell_size(grid, canvas);
    let column = ((px / cell_w).floor() as i64).min(i64::from(grid.columns) - 1);
    let row = ((py / cell_h).floor() as i64).min(i64::from(grid.rows) - 1);
    Some((column as i32, row as i32))
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// First row-major slot where a `w × h` rectangle fits without overlapping
/// any of `occupied`.
pub fn find_free_position(
    occupied: &[GridPosition],
    grid: &GridConfig,
    w: i32,
    h: i32,
) -> Option<GridPosition> {
    let max_x = i64::from(grid.columns) - i64::from(w);
    let max_y = i64::from(grid.rows) - i64::from(h);
    if w < 1 || h < 1 || max_x < 0 || max_y < 0 {
        return None;
    }

    for y in 0..=max_y {
        for x in 0..=max_x {
            let candidate = GridPosition::new(x as i32, y as i32, w, h);
            if !occupied.iter().any(|o| rectangles_overlap(&candidate, o)) {
                return Some(candidate);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(columns: u32, rows: u32) -> GridConfig {
        GridConfig::new(columns, rows)
    }

    // -- rectangles_overlap --------------------------------------------------

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = GridPosition::new(0, 0, 2, 2);
        let b = GridPosition::new(2, 0, 2, 2);
        assert!(!rectangles_overlap(&a, &b));
        let below = GridPosition::new(0, 2, 2, 2);
        assert!(!rectangles_overlap(&a, &below));
    }

    #[test]
    fn shared_cell_overlaps() {
        let a = GridPosition::new(0, 0, 2, 2);
        let b = GridPosition::new(1, 1, 2, 2);
        assert!(rectangles_overlap(&a, &b));
    }

    #[test]
    fn containment_overlaps() {
        let outer = GridPosition::new(0, 0, 6, 6);
        let inner = GridPosition::new(2, 2, 1, 1);
        assert!(rectangles_overlap(&outer, &inner));
        assert!(rectangles_overlap(&inner, &outer));
    }

    #[test]
    fn corner_touch_does_not_overlap() {
        let a = GridPosition::new(0, 0, 2, 2);
        let b = GridPosition::new(2, 2, 2, 2);
        assert!(!rectangles_overlap(&a, &b));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = GridPosition::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        let b = GridPosition::new(0, 0, 1, 1);
        assert!(!rectangles_overlap(&a, &b));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -20i32..20, ay in -20i32..20, aw in 1i32..10, ah in 1i32..10,
            bx in -20i32..20, by in -20i32..20, bw in 1i32..10, bh in 1i32..10,
        ) {
            let a = GridPosition::new(ax, ay, aw, ah);
            let b = GridPosition::new(bx, by, bw, bh);
            prop_assert_eq!(rectangles_overlap(&a, &b), rectangles_overlap(&b, &a));
        }

        #[test]
        fn rectangle_overlaps_itself(x in 0i32..20, y in 0i32..20, w in 1i32..10, h in 1i32..10) {
            let a = GridPosition::new(x, y, w, h);
            prop_assert!(rectangles_overlap(&a, &a));
        }
    }

    // -- is_within_grid ------------------------------------------------------

    #[test]
    fn item_at_far_corner_is_within_grid() {
        assert!(is_within_grid(&GridPosition::new(2, 2, 2, 2), &grid(4, 4)));
    }

    #[test]
    fn item_past_right_edge_is_outside() {
        assert!(!is_within_grid(&GridPosition::new(3, 0, 2, 1), &grid(4, 4)));
    }

    #[test]
    fn negative_origin_is_outside() {
        assert!(!is_within_grid(&GridPosition::new(-1, 0, 1, 1), &grid(4, 4)));
        assert!(!is_within_grid(&GridPosition::new(0, -1, 1, 1), &grid(4, 4)));
    }

    #[test]
    fn item_filling_grid_is_within() {
        assert!(is_within_grid(&GridPosition::new(0, 0, 12, 8), &grid(12, 8)));
    }

    // -- transforms ----------------------------------------------------------

    #[test]
    fn cell_size_on_reference_canvas() {
        let (w, h) = cell_size(&grid(12, 8), &CanvasSize::default());
        assert_eq!(w, 160.0);
        assert_eq!(h, 135.0);
    }

    #[test]
    fn percent_rect_for_quarter() {
        let rect = to_percent_rect(&GridPosition::new(6, 4, 6, 4), &grid(12, 8));
        assert_eq!(rect.left, 50.0);
        assert_eq!(rect.top, 50.0);
        assert_eq!(rect.width, 50.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn pixel_rect_is_inset_by_gap() {
        let rect = to_pixel_rect(
            &GridPosition::new(1, 1, 2, 2),
            &grid(12, 8).with_gap(8),
            &CanvasSize::default(),
        );
        assert_eq!(rect.left, 164.0);
        assert_eq!(rect.top, 139.0);
        assert_eq!(rect.width, 312.0);
        assert_eq!(rect.height, 262.0);
    }

    #[test]
    fn pixel_rect_width_never_negative() {
        let rect = to_pixel_rect(
            &GridPosition::new(0, 0, 1, 1),
            &grid(12, 8).with_gap(500),
            &CanvasSize::default(),
        );
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn cell_at_point_maps_to_cell() {
        let canvas = CanvasSize::default();
        assert_eq!(cell_at_point(0.0, 0.0, &grid(12, 8), &canvas), Some((0, 0)));
        assert_eq!(cell_at_point(170.0, 140.0, &grid(12, 8), &canvas), Some((1, 1)));
        assert_eq!(cell_at_point(1919.9, 1079.9, &grid(12, 8), &canvas), Some((11, 7)));
    }

    #[test]
    fn cell_at_point_outside_canvas_is_none() {
        let canvas = CanvasSize::default();
        assert_eq!(cell_at_point(-1.0, 10.0, &grid(12, 8), &canvas), None);
        assert_eq!(cell_at_point(1920.0, 10.0, &grid(12, 8), &canvas), None);
        assert_eq!(cell_at_point(10.0, 1080.0, &grid(12, 8), &canvas), None);
    }

    // -- find_free_position --------------------------------------------------

    #[test]
    fn free_position_on_empty_grid_is_origin() {
        let found = find_free_position(&[], &grid(4, 4), 2, 2);
        assert_eq!(found, Some(GridPosition::new(0, 0, 2, 2)));
    }

    #[test]
    fn free_position_skips_occupied_cells() {
        let occupied = [GridPosition::new(0, 0, 2, 2)];
        let found = find_free_position(&occupied, &grid(4, 4), 2, 2);
        assert_eq!(found, Some(GridPosition::new(2, 0, 2, 2)));
    }

    #[test]
    fn free_position_none_when_full() {
        let occupied = [GridPosition::new(0, 0, 4, 4)];
        assert_eq!(find_free_position(&occupied, &grid(4, 4), 1, 1), None);
    }

    #[test]
    fn free_position_none_when_too_large() {
        assert_eq!(find_free_position(&[], &grid(4, 4), 5, 1), None);
        assert_eq!(find_free_position(&[], &grid(4, 4), 0, 1), None);
    }

    // -- serde ---------------------------------------------------------------

    #[test]
    fn grid_gap_defaults_when_missing() {
        let grid: GridConfig = serde_json::from_str(r#"{"columns":12,"rows":8}"#).unwrap();
        assert_eq!(grid.gap, DEFAULT_GAP);
    }

    #[test]
    fn zero_columns_fail_validation() {
        assert!(GridConfig::new(0, 8).validate().is_err());
        assert!(GridConfig::new(12, 8).validate().is_ok());
    }

    #[test]
    fn check_maps_to_validation_error() {
        let err = GridConfig::new(12, 0).check().unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.starts_with("invalid grid")));
        assert!(GridConfig::new(1, 1).check().is_ok());
    }

    #[test]
    fn cell_at_point_on_empty_grid_is_none() {
        let canvas = CanvasSize::default();
        assert_eq!(cell_at_point(10.0, 10.0, &grid(0, 8), &canvas), None);
        assert_eq!(cell_at_point(10.0, 10.0, &grid(12, 0), &canvas), None);
    }
}
