//! Human-readable publish status output (comfy-table + styled headings).

use super::PublishStatus;
use crate::types::LocalFile;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn notes_table(notes: &[LocalFile]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Note"]);
    for note in notes {
        table.add_row(vec![note.path().to_string()]);
    }
    table
}

fn paths_table(paths: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Remote path"]);
    for path in paths {
        table.add_row(vec![path.clone()]);
    }
    table
}

/// Format full publish status: a summary table then one section per non-empty list.
pub fn format_publish_status_text(status: &PublishStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Publish Status")));

    let mut summary = Table::new();
    summary.load_preset(UTF8_BORDERS_ONLY);
    summary.set_header(vec!["State", "Notes"]);
    summary.add_row(vec!["Unpublished".to_string(), status.unpublished_notes.len().to_string()]);
    summary.add_row(vec!["Published".to_string(), status.published_notes.len().to_string()]);
    summary.add_row(vec!["Changed".to_string(), status.changed_notes.len().to_string()]);
    summary.add_row(vec!["Deleted".to_string(), status.deleted_note_paths.len().to_string()]);
    out.push_str(&format!("{}\n\n", summary));

    let sections = [
        ("Unpublished", &status.unpublished_notes),
        ("Changed", &status.changed_notes),
        ("Published", &status.published_notes),
    ];
    for (title, notes) in sections {
        if notes.is_empty() {
            continue;
        }
        out.push_str(&format!("{}\n\n", format_section_heading(title)));
        out.push_str(&format!("{}\n\n", notes_table(notes)));
    }
    if !status.deleted_note_paths.is_empty() {
        out.push_str(&format!("{}\n\n", format_section_heading("Deleted")));
        out.push_str(&format!("{}\n\n", paths_table(&status.deleted_note_paths)));
    }

    if status.is_in_sync() {
        out.push_str("Garden is up to date.\n");
    } else {
        out.push_str(&format!(
            "Total: {} marked notes, {} to publish, {} to delete.\n",
            status.marked_count(),
            status.unpublished_notes.len() + status.changed_notes.len(),
            status.deleted_note_paths.len()
        ));
    }
    out
}

/// Format the deleted remote paths on their own.
pub fn format_deleted_paths_text(paths: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Deleted")));
    if paths.is_empty() {
        out.push_str("No deleted notes.\n");
        return out;
    }
    out.push_str(&format!("{}\n\n", paths_table(paths)));
    out.push_str(&format!("Total: {} deleted.\n", paths.len()));
    out
}
