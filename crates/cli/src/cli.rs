use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "signage",
    about = "Validate and edit red panda signage layouts offline",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check layout files against the publish rules.
    Validate(ValidateArgs),

    /// List the built-in templates.
    Templates {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print a template's default layout document.
    Template {
        /// Template id, e.g. `basic`.
        id: String,

        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Apply one drag or resize gesture to a layout file.
    Drag(DragArgs),
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Layout JSON files.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit one JSON report per file instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DragArgs {
    /// Layout JSON file to edit.
    pub file: PathBuf,

    /// Id of the item to drag.
    #[arg(long)]
    pub item: String,

    /// Horizontal pointer delta in reference-canvas pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dx: f64,

    /// Vertical pointer delta in reference-canvas pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dy: f64,

    /// Resize from the bottom-right corner instead of moving.
    #[arg(long)]
    pub resize: bool,

    /// Write the edited layout here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
