//! Content checks and the publish gate.

use std::collections::HashSet;

use super::layout::validate_layout;
use super::result::{ContentIssue, ContentIssueKind, LayoutReport};
use crate::config::EditorConfig;
use crate::error::CoreError;
use crate::layout::{ItemStyle, LayoutDocument, LayoutItem};

/// Per-item content findings, in item order.
pub fn check_item_content(items: &[LayoutItem], config: &EditorConfig) -> Vec<ContentIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for item in items {
        let mut push = |kind: ContentIssueKind, message: String| {
            issues.push(ContentIssue {
                item_id: item.id.clone(),
                kind,
                message: format!("{}: {message}", item.id),
            });
        };

        if !seen.insert(item.id.as_str()) {
            push(ContentIssueKind::DuplicateId, "id is used by another item".to_string());
        }

        if let Some(ids) = &item.content_ids {
            if !item.content_type.is_slideshow() {
                push(
                    ContentIssueKind::UnexpectedContentIds,
                    format!("{} items cannot rotate content", item.content_type.as_str()),
                );
            } else if ids.len() > config.max_slideshow_items {
                push(
                    ContentIssueKind::TooManyContentIds {
                        count: ids.len(),
                        max: config.max_slideshow_items,
                    },
                    format!(
                        "{} content ids exceed the limit of {}",
                        ids.len(),
                        config.max_slideshow_items
                    ),
                );
            }
        }

        if item.content_type == crate::layout::ContentType::Text
            && item
                .text_content
                .as_deref()
                .map_or(true, |t| t.trim().is_empty())
        {
            push(ContentIssueKind::MissingText, "text item has no text".to_string());
        }

        if let Some(style) = &item.style {
            if !style.applies_to(item.content_type) {
                push(
                    ContentIssueKind::StyleMismatch {
                        style: style.kind().to_string(),
                    },
                    format!(
                        "{} style does not apply to {} items",
                        style.kind(),
                        item.content_type.as_str()
                    ),
                );
            } else if let ItemStyle::Timer(timer) = style {
                if !timer.is_complete() {
                    push(
                        ContentIssueKind::IncompleteTimer,
                        "countdown timer has no target".to_string(),
                    );
                }
            }
        }
    }

    issues
}

/// Geometric validation plus content checks for a whole document.
pub fn inspect_layout(document: &LayoutDocument, config: &EditorConfig) -> LayoutReport {
    LayoutReport {
        validation: validate_layout(&document.items, &document.grid),
        content_issues: check_item_content(&document.items, config),
    }
}

/// Save/publish gate: fails when the grid is empty or the document has any
/// finding.
pub fn ensure_publishable(document: &LayoutDocument, config: &EditorConfig) -> Result<(), CoreError> {
    document.grid.check()?;
    let report = inspect_layout(document, config);
    if report.is_publishable() {
        return Ok(());
    }
    let summary = report.summary();
    tracing::warn!(
        template_id = %document.template_id,
        overlapping = report.validation.overlapping.len(),
        out_of_bounds = report.validation.out_of_bounds.len(),
        content_issues = report.content_issues.len(),
        "Layout is not publishable"
    );
    Err(CoreError::Validation(summary))
}
