//! Layout document model: grid, background, items, and per-type styles.

pub mod background;
pub mod document;
pub mod item;
pub mod style;

pub use background::{BackgroundConfig, BackgroundKind};
pub use document::{apply_template, LayoutDocument};
pub use item::{generate_item_id, next_item_id, ContentType, ItemPatch, LayoutItem};
pub use style::ItemStyle;
