//! Layout validation.
//!
//! Geometry checks report overlaps and out-of-bounds items; content checks
//! cover what the geometry cannot see. Both return data. Only the publish
//! gate turns findings into an error.

pub mod content;
pub mod layout;
pub mod result;

pub use content::{check_item_content, ensure_publishable, inspect_layout};
pub use layout::{find_out_of_bounds_items, find_overlapping_pairs, validate_layout};
pub use result::{ContentIssue, ContentIssueKind, LayoutReport, OverlapPair, ValidationResult};
