//! HTML rendering of the schedule list
//!
//! Used for exporting the list as markup. Every server-provided string goes
//! through [`escape_html`]; delete controls carry their id in a `data-id`
//! attribute instead of an inline handler.

use super::types::{ListView, RowView, PLACEHOLDER_HINT, PLACEHOLDER_TITLE};

/// Escape `& < > " '` for interpolation into markup.
///
/// The ampersand goes first so entities produced by later replacements are
/// not escaped twice.
pub fn escape_html(value: impl ToString) -> String {
    value
        .to_string()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Render the whole list container contents
pub fn render_list_html(list: &ListView) -> String {
    match list {
        ListView::Placeholder => format!(
            "<div class=\"item\"><div class=\"item-left\"><b>{}</b><small>{}</small></div></div>",
            PLACEHOLDER_TITLE, PLACEHOLDER_HINT
        ),
        ListView::Rows(rows) => rows.iter().map(render_row_html).collect::<Vec<_>>().join("\n"),
    }
}

fn render_row_html(row: &RowView) -> String {
    format!(
        "<div class=\"item\"><div class=\"item-left\"><b>{}</b><small>{}</small></div>\
         <button class=\"btn-delete\" data-id=\"{}\">✕</button></div>",
        escape_html(&row.title),
        escape_html(&row.subtitle),
        row.id
    )
}
