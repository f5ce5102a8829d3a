//! CLI presentation: text and json formatters for record and check.

use crate::diff::DiffResult;
use crate::types::Snapshot;
use owo_colors::{OwoColorize, Style};
use serde_json::json;
use std::collections::BTreeSet;
use std::path::Path;

fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

fn push_section(
    out: &mut Vec<String>,
    title: &str,
    style: Style,
    paths: &BTreeSet<String>,
    color: bool,
) {
    if paths.is_empty() {
        return;
    }
    out.push(styled(title, style, color));
    out.extend(paths.iter().map(|p| format!("  - {}", p)));
}

/// Human-readable integrity report
pub fn format_check_text(result: &DiffResult, color: bool) -> String {
    let mut lines = vec!["=== File Integrity Report ===".to_string()];

    if result.is_clean() {
        lines.push(styled("All files are intact.", Style::new().green(), color));
        return lines.join("\n");
    }

    let sections = [
        ("Modified Files:", Style::new().yellow().bold(), &result.modified),
        ("New Files:", Style::new().cyan().bold(), &result.added),
        ("Deleted Files:", Style::new().red().bold(), &result.deleted),
    ];
    for (title, style, paths) in sections {
        push_section(&mut lines, title, style, paths, color);
    }
    lines.push(format!(
        "{} change(s): {} modified, {} new, {} deleted",
        result.change_count(),
        result.modified.len(),
        result.added.len(),
        result.deleted.len()
    ));
    lines.join("\n")
}

/// Machine-readable integrity report
pub fn format_check_json(result: &DiffResult) -> String {
    let out = json!({
        "status": result.status(),
        "added": result.added,
        "modified": result.modified,
        "deleted": result.deleted,
    });
    format!("{:#}", out)
}

/// Summary printed after recording a baseline
pub fn format_record_summary(
    directory: &Path,
    snapshot: &Snapshot,
    baseline: &Path,
    color: bool,
) -> String {
    let mut lines = vec![format!(
        "Hashes saved for {} file(s) in '{}' to '{}'.",
        snapshot.len(),
        directory.display(),
        baseline.display()
    )];

    let unreadable: Vec<_> = snapshot.unreadable().collect();
    if !unreadable.is_empty() {
        lines.push(styled(
            &format!("Unreadable files ({}):", unreadable.len()),
            Style::new().yellow().bold(),
            color,
        ));
        lines.extend(
            unreadable
                .iter()
                .map(|(path, digest)| format!("  - {} ({})", path, digest)),
        );
    }
    lines.join("\n")
}
