//! Geometric checks: overlap and grid bounds.
//!
//! The pair scan is quadratic in the item count. A layout holds at most one
//! item per cell and in practice well under a hundred.

use super::result::{OverlapPair, ValidationResult};
use crate::geometry::{is_within_grid, rectangles_overlap, GridConfig};
use crate::layout::LayoutItem;
use crate::types::ItemId;

/// Every unordered pair of overlapping items, reported once.
///
/// Pairs are ordered by the outer item's index, then the inner item's index,
/// with the outer item first.
pub fn find_overlapping_pairs(items: &[LayoutItem]) -> Vec<OverlapPair> {
    let mut pairs = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            if rectangles_overlap(&a.position, &b.position) {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    pairs
}

/// Ids of items that extend past the grid, in item order.
pub fn find_out_of_bounds_items(items: &[LayoutItem], grid: &GridConfig) -> Vec<ItemId> {
    items
        .iter()
        .filter(|item| !is_within_grid(&item.position, grid))
        .map(|item| item.id.clone())
        .collect()
}

/// Run both geometric checks. The layout is valid iff neither finds anything.
pub fn validate_layout(items: &[LayoutItem], grid: &GridConfig) -> ValidationResult {
    let overlapping = find_overlapping_pairs(items);
    let out_of_bounds = find_out_of_bounds_items(items, grid);
    ValidationResult {
        is_valid: overlapping.is_empty() && out_of_bounds.is_empty(),
        overlapping,
        out_of_bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPosition;
    use crate::layout::ContentType;

    fn item(id: &str, x: i32, y: i32, w: i32, h: i32) -> LayoutItem {
        LayoutItem::new(id, ContentType::News, GridPosition::new(x, y, w, h))
    }

    fn pair(a: &str, b: &str) -> OverlapPair {
        (a.to_string(), b.to_string())
    }

    // -- find_overlapping_pairs ---------------------------------------------

    #[test]
    fn three_mutually_overlapping_items_give_three_pairs() {
        let items = vec![
            item("a", 0, 0, 3, 3),
            item("b", 1, 1, 3, 3),
            item("c", 2, 2, 3, 3),
        ];
        assert_eq!(
            find_overlapping_pairs(&items),
            vec![pair("a", "b"), pair("a", "c"), pair("b", "c")]
        );
    }

    #[test]
    fn adjacent_tiles_do_not_overlap() {
        let items = vec![
            item("a", 0, 0, 2, 2),
            item("b", 2, 0, 2, 2),
            item("c", 0, 2, 4, 2),
        ];
        assert!(find_overlapping_pairs(&items).is_empty());
    }

    #[test]
    fn no_self_pairs_for_single_item() {
        assert!(find_overlapping_pairs(&[item("a", 0, 0, 2, 2)]).is_empty());
    }

    #[test]
    fn identical_rectangles_reported_once() {
        let items = vec![item("a", 1, 1, 1, 1), item("b", 1, 1, 1, 1)];
        assert_eq!(find_overlapping_pairs(&items), vec![pair("a", "b")]);
    }

    // -- find_out_of_bounds_items -------------------------------------------

    #[test]
    fn out_of_bounds_preserves_input_order() {
        let grid = GridConfig::new(4, 4);
        let items = vec![
            item("z", 3, 0, 2, 1),
            item("ok", 0, 0, 1, 1),
            item("a", 0, 3, 1, 2),
            item("neg", -1, 0, 1, 1),
        ];
        assert_eq!(
            find_out_of_bounds_items(&items, &grid),
            vec!["z".to_string(), "a".to_string(), "neg".to_string()]
        );
    }

    // -- validate_layout ----------------------------------------------------

    #[test]
    fn empty_layout_is_valid() {
        let result = validate_layout(&[], &GridConfig::new(1, 1));
        assert!(result.is_valid);
        assert!(result.overlapping.is_empty());
        assert!(result.out_of_bounds.is_empty());
    }

    #[test]
    fn single_item_filling_grid_is_valid() {
        let result = validate_layout(&[item("a", 0, 0, 12, 8)], &GridConfig::new(12, 8));
        assert!(result.is_valid);
    }

    #[test]
    fn overlap_alone_invalidates() {
        let items = vec![item("a", 0, 0, 2, 2), item("b", 1, 0, 2, 2)];
        let result = validate_layout(&items, &GridConfig::new(4, 4));
        assert!(!result.is_valid);
        assert_eq!(result.overlapping, vec![pair("a", "b")]);
        assert!(result.out_of_bounds.is_empty());
    }

    #[test]
    fn out_of_bounds_alone_invalidates() {
        let result = validate_layout(&[item("a", 3, 3, 2, 2)], &GridConfig::new(4, 4));
        assert!(!result.is_valid);
        assert!(result.overlapping.is_empty());
        assert_eq!(result.out_of_bounds, vec!["a".to_string()]);
    }
}
