use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::markdown::markdown_to_html;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Failed to list notes in {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read note {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub filename: String,
    pub title: String,
    pub html: String,
}

fn title_pattern() -> &'static Regex {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    TITLE.get_or_init(|| Regex::new(r"(?mR)^#\s+(.+)$").expect("regex"))
}

/// First level-1 heading anywhere in the note, else the file name without `.md`.
pub fn note_title(filename: &str, markdown: &str) -> String {
    match title_pattern().captures(markdown) {
        Some(caps) => caps[1].to_string(),
        None => filename
            .strip_suffix(".md")
            .unwrap_or(filename)
            .to_string(),
    }
}

pub fn parse_note(filename: &str, markdown: &str) -> Note {
    Note {
        filename: filename.to_string(),
        title: note_title(filename, markdown),
        html: markdown_to_html(markdown),
    }
}

/// Lists `.md` files directly inside `notes_dir`, sorted by name.
pub fn note_paths(notes_dir: &Path) -> Result<Vec<PathBuf>, NotesError> {
    let read_dir = match fs::read_dir(notes_dir) {
        Ok(read_dir) => read_dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(NotesError::List {
                path: notes_dir.to_path_buf(),
                source,
            })
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| NotesError::List {
            path: notes_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let is_markdown = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(".md"))
            .unwrap_or(false);
        if is_markdown && path.is_file() {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

/// Loads every note in `notes_dir`. A missing directory yields no notes.
pub fn load_notes(notes_dir: &Path) -> Result<Vec<Note>, NotesError> {
    let mut notes = Vec::new();
    for path in note_paths(notes_dir)? {
        let markdown = fs::read_to_string(&path).map_err(|source| NotesError::Read {
            path: path.clone(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let note = parse_note(&filename, &markdown);
        tracing::debug!(file = %note.filename, title = %note.title, "loaded note");
        notes.push(note);
    }
    Ok(notes)
}
