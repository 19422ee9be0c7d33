use taskdash_core::notes::Note;

use crate::{document_head, document_tail, RenderMode, DASHBOARD_FILE};

/// Wraps each note's pre-rendered HTML in a card. Note HTML is inserted as-is.
pub fn render_note_cards(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "<div class=\"empty-state\">No notes yet. Add .md files to the notes/ folder and re-run!</div>"
            .to_string();
    }
    notes
        .iter()
        .map(|note| format!("<div class=\"note-card\">{}</div>", note.html))
        .collect::<Vec<_>>()
        .join("\n")
}

fn notes_found(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} note{suffix} found")
}

/// Renders the complete notepad document.
pub fn render_notepad(notes: &[Note], mode: RenderMode) -> String {
    let live_hint = if mode.is_live() {
        " Saves auto-refresh this page."
    } else {
        ""
    };

    let mut html = document_head("Notepad");
    html.push_str("  <h1>📝 Notepad</h1>\n");
    html.push_str(&format!(
        "  <p class=\"subtitle\">Your notes from the <code>notes/</code> folder — {}.{live_hint}</p>\n",
        notes_found(notes.len())
    ));
    html.push_str(&format!(
        "  <a class=\"nav-link\" href=\"{DASHBOARD_FILE}\">📋 Open Task Dashboard →</a>\n\n"
    ));
    html.push_str(&format!("  {}\n", render_note_cards(notes)));
    html.push_str(&format!(
        "\n  <div class=\"footer\">\n    Generated from notes/ · {}\n  </div>\n",
        mode.footer_hint("Add or edit .md files and run <code>taskdash</code> to update")
    ));
    html.push_str(&document_tail(mode));
    html
}
