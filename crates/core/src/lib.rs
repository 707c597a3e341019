//! Grid layout editing engine for red panda exhibit signage.
//!
//! Pure, synchronous logic with no I/O: geometry, the layout document model,
//! validation, bounded undo/redo history, and drag/resize math, tied together
//! by [`session::EditorSession`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod layout;
pub mod session;
pub mod template;
pub mod types;
pub mod validation;
