//! Offline tooling for signage layout files.

pub mod cli;
pub mod commands;

use std::io::Write;

use anyhow::Result;
use signage_core::config::EditorConfig;

use crate::cli::{Cli, Commands};
use crate::commands::{run_drag, run_template, run_templates, run_validate, CommandStatus};

pub fn run(cli: Cli, config: &EditorConfig, out: &mut dyn Write) -> Result<CommandStatus> {
    match cli.command {
        Commands::Validate(args) => run_validate(args, config, out),
        Commands::Templates { json } => run_templates(json, out),
        Commands::Template { id, output } => run_template(&id, output.as_deref(), out),
        Commands::Drag(args) => run_drag(args, config, out),
    }
}
