//! Editor configuration: history depth, reference canvas, and content limits.
//!
//! Every field has a default matching the editor front-end. Deployments can
//! override them through `SIGNAGE_*` environment variables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::geometry::GridConfig;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default number of snapshots kept on each of the undo and redo stacks.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Width of the virtual canvas that pointer deltas are measured against.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;

/// Height of the virtual canvas that pointer deltas are measured against.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1080;

/// Default gap between grid cells in pixels.
pub const DEFAULT_GAP: u32 = 8;

/// Maximum number of content ids a slideshow item may rotate through.
pub const DEFAULT_MAX_SLIDESHOW_ITEMS: usize = 3;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Tunables for an editor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Capacity of each history stack.
    #[validate(range(min = 1, max = 1000))]
    pub history_capacity: usize,
    /// Reference canvas width in pixels.
    #[validate(range(min = 1))]
    pub canvas_width: u32,
    /// Reference canvas height in pixels.
    #[validate(range(min = 1))]
    pub canvas_height: u32,
    /// Gap applied to grids created without an explicit gap.
    pub default_gap: u32,
    /// Upper bound on `contentIds` per item.
    #[validate(range(min = 1))]
    pub max_slideshow_items: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            default_gap: DEFAULT_GAP,
            max_slideshow_items: DEFAULT_MAX_SLIDESHOW_ITEMS,
        }
    }
}

impl EditorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default |
    /// |--------------------------------|---------|
    /// | `SIGNAGE_HISTORY_CAPACITY`     | `50`    |
    /// | `SIGNAGE_CANVAS_WIDTH`         | `1920`  |
    /// | `SIGNAGE_CANVAS_HEIGHT`        | `1080`  |
    /// | `SIGNAGE_DEFAULT_GAP`          | `8`     |
    /// | `SIGNAGE_MAX_SLIDESHOW_ITEMS`  | `3`     |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set keys must parse and pass the
    /// range checks.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            history_capacity: read_var(
                &lookup,
                "SIGNAGE_HISTORY_CAPACITY",
                defaults.history_capacity,
            )?,
            canvas_width: read_var(&lookup, "SIGNAGE_CANVAS_WIDTH", defaults.canvas_width)?,
            canvas_height: read_var(&lookup, "SIGNAGE_CANVAS_HEIGHT", defaults.canvas_height)?,
            default_gap: read_var(&lookup, "SIGNAGE_DEFAULT_GAP", defaults.default_gap)?,
            max_slideshow_items: read_var(
                &lookup,
                "SIGNAGE_MAX_SLIDESHOW_ITEMS",
                defaults.max_slideshow_items,
            )?,
        };
        config.check()?;
        Ok(config)
    }

    /// Run the declared range checks.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Config(errors.to_string()))
    }

    /// A grid of the given size using the configured default gap.
    pub fn grid(&self, columns: u32, rows: u32) -> GridConfig {
        GridConfig::new(columns, rows).with_gap(self.default_gap)
    }
}

fn read_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::Config(format!("{key}={raw:?} is not valid: {e}"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
