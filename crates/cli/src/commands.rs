//! Command implementations. Each writes its primary output to `out` and
//! logs progress through `tracing`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use signage_core::config::EditorConfig;
use signage_core::interaction::DragOutcome;
use signage_core::layout::LayoutDocument;
use signage_core::session::EditorSession;
use signage_core::template::{builtin_templates, find_template};
use signage_core::validation::{inspect_layout, LayoutReport};

use crate::cli::{DragArgs, ValidateArgs};

/// How a command finished when it did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// At least one layout failed the publish rules.
    Invalid,
}

impl CommandStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            CommandStatus::Success => 0,
            CommandStatus::Invalid => 1,
        }
    }
}

fn load_document(path: &Path) -> Result<LayoutDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    LayoutDocument::from_json(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn emit_document(document: &LayoutDocument, output: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let json = document.to_json_pretty()?;
    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote layout");
        }
        None => writeln!(out, "{json}")?,
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    file: PathBuf,
    publishable: bool,
    report: LayoutReport,
}

pub fn run_validate(args: ValidateArgs, config: &EditorConfig, out: &mut dyn Write) -> Result<CommandStatus> {
    let mut reports = Vec::with_capacity(args.files.len());
    for file in args.files {
        let document = load_document(&file)?;
        let report = inspect_layout(&document, config);
        tracing::info!(
            file = %file.display(),
            items = document.items.len(),
            publishable = report.is_publishable(),
            "Validated layout"
        );
        reports.push(FileReport {
            file,
            publishable: report.is_publishable(),
            report,
        });
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    } else {
        for r in &reports {
            if r.publishable {
                writeln!(out, "ok       {}", r.file.display())?;
            } else {
                writeln!(out, "invalid  {}: {}", r.file.display(), r.report.summary())?;
            }
        }
    }

    if reports.iter().all(|r| r.publishable) {
        Ok(CommandStatus::Success)
    } else {
        Ok(CommandStatus::Invalid)
    }
}

// ---------------------------------------------------------------------------
// templates / template
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateSummary<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    columns: u32,
    rows: u32,
    items: usize,
}

pub fn run_templates(json: bool, out: &mut dyn Write) -> Result<CommandStatus> {
    let summaries: Vec<TemplateSummary<'_>> = builtin_templates()
        .iter()
        .map(|t| TemplateSummary {
            id: &t.id,
            name: &t.name,
            description: &t.description,
            columns: t.layout.grid.columns,
            rows: t.layout.grid.rows,
            items: t.layout.items.len(),
        })
        .collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summaries)?)?;
    } else {
        for s in &summaries {
            writeln!(
                out,
                "{:<12} {:>2}x{:<2} {} items  {}  {}",
                s.id, s.columns, s.rows, s.items, s.name, s.description
            )?;
        }
    }
    Ok(CommandStatus::Success)
}

pub fn run_template(id: &str, output: Option<&Path>, out: &mut dyn Write) -> Result<CommandStatus> {
    let Some(template) = find_template(id) else {
        let known: Vec<&str> = builtin_templates().iter().map(|t| t.id.as_str()).collect();
        bail!("unknown template '{id}'. Known templates: {}", known.join(", "));
    };
    emit_document(&signage_core::layout::apply_template(template), output, out)?;
    Ok(CommandStatus::Success)
}

// ---------------------------------------------------------------------------
// drag
// ---------------------------------------------------------------------------

pub fn run_drag(args: DragArgs, config: &EditorConfig, out: &mut dyn Write) -> Result<CommandStatus> {
    let document = load_document(&args.file)?;
    let mut session = EditorSession::new(document, config.clone());

    let outcome = if args.resize {
        session.resize_item(&args.item, args.dx, args.dy)?
    } else {
        session.drag_item(&args.item, args.dx, args.dy)?
    };
    match outcome {
        DragOutcome::NoOp => tracing::info!(item = %args.item, "Gesture snapped to no change"),
        DragOutcome::Changed { from, to } => tracing::info!(
            item = %args.item,
            from = ?from,
            to = ?to,
            "Applied gesture"
        ),
    }

    let validation = session.validate();
    if !validation.is_valid {
        tracing::warn!(
            overlapping = validation.overlapping.len(),
            out_of_bounds = validation.out_of_bounds.len(),
            "Edited layout has placement problems"
        );
    }

    emit_document(session.document(), args.output.as_deref(), out)?;
    Ok(CommandStatus::Success)
}
