use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use taskdash_core::config::SitePaths;
use taskdash_core::notes::{load_notes, NotesError};
use taskdash_core::task::{load_task_set, TaskError};
use taskdash_render::{
    render_dashboard, render_notepad, RenderMode, DASHBOARD_FILE, NOTEPAD_FILE,
};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Tasks(#[from] TaskError),
    #[error(transparent)]
    Notes(#[from] NotesError),
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Shared counter of completed builds. Clones observe the same value.
#[derive(Debug, Clone, Default)]
pub struct BuildVersion(Arc<AtomicU64>);

impl BuildVersion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Records a completed build and returns the new version.
    pub fn bump(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub version: u64,
    pub task_count: usize,
    pub note_count: usize,
    pub dashboard_path: PathBuf,
    pub notepad_path: PathBuf,
}

fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    fs::write(path, html).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Regenerates both pages from scratch and bumps `version` once both are written.
pub fn build_site(
    paths: &SitePaths,
    mode: RenderMode,
    version: &BuildVersion,
) -> Result<BuildReport, BuildError> {
    info!(path = %paths.tasks_file.display(), "reading tasks");
    let tasks = load_task_set(&paths.tasks_file)?;
    info!(count = tasks.total(), "found tasks");

    info!(path = %paths.notes_dir.display(), "reading notes");
    let notes = load_notes(&paths.notes_dir)?;
    info!(count = notes.len(), "found notes");

    fs::create_dir_all(&paths.output_dir).map_err(|source| BuildError::CreateOutput {
        path: paths.output_dir.clone(),
        source,
    })?;

    let dashboard_path = paths.output_dir.join(DASHBOARD_FILE);
    write_page(&dashboard_path, &render_dashboard(&tasks, mode))?;
    info!(path = %dashboard_path.display(), "wrote dashboard");

    let notepad_path = paths.output_dir.join(NOTEPAD_FILE);
    write_page(&notepad_path, &render_notepad(&notes, mode))?;
    info!(path = %notepad_path.display(), "wrote notepad");

    Ok(BuildReport {
        version: version.bump(),
        task_count: tasks.total(),
        note_count: notes.len(),
        dashboard_path,
        notepad_path,
    })
}
