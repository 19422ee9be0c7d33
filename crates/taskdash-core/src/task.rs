use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to read task list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub completed: bool,
    pub tags: Vec<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    InProgress,
    UpNext,
    Done,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::InProgress, Section::UpNext, Section::Done];

    pub fn label(self) -> &'static str {
        match self {
            Section::InProgress => "In Progress",
            Section::UpNext => "Up Next",
            Section::Done => "Done",
        }
    }
}

/// Tasks grouped by the heading they appeared under, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSet {
    pub in_progress: Vec<Task>,
    pub up_next: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskSet {
    pub fn section(&self, section: Section) -> &[Task] {
        match section {
            Section::InProgress => &self.in_progress,
            Section::UpNext => &self.up_next,
            Section::Done => &self.done,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut Vec<Task> {
        match section {
            Section::InProgress => &mut self.in_progress,
            Section::UpNext => &mut self.up_next,
            Section::Done => &mut self.done,
        }
    }

    pub fn total(&self) -> usize {
        self.in_progress.len() + self.up_next.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

struct Patterns {
    in_progress: Regex,
    up_next: Regex,
    done: Regex,
    checkbox: Regex,
    tag: Regex,
    due: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        in_progress: Regex::new(r"(?i)^##\s+in\s*progress").expect("regex"),
        up_next: Regex::new(r"(?i)^##\s+up\s*next").expect("regex"),
        done: Regex::new(r"(?i)^##\s+done").expect("regex"),
        checkbox: Regex::new(r"^- \[([ x])\]\s+(.+)$").expect("regex"),
        tag: Regex::new(r"#([A-Za-z0-9_]+)").expect("regex"),
        due: Regex::new(r"\(due:\s*([^)]+)\)").expect("regex"),
    })
}

fn heading_section(line: &str) -> Option<Section> {
    let p = patterns();
    if p.in_progress.is_match(line) {
        Some(Section::InProgress)
    } else if p.up_next.is_match(line) {
        Some(Section::UpNext)
    } else if p.done.is_match(line) {
        Some(Section::Done)
    } else {
        None
    }
}

/// Parses the text after a checkbox marker: strips `#tag` tokens, then
/// `(due: ...)` tokens, and trims what is left.
pub fn parse_task_body(body: &str, completed: bool) -> Task {
    let p = patterns();

    let mut tags = Vec::new();
    for cap in p.tag.captures_iter(body) {
        tags.push(cap[1].to_string());
    }
    let without_tags = p.tag.replace_all(body, "");

    let mut due_date = None;
    for cap in p.due.captures_iter(&without_tags) {
        due_date = Some(cap[1].trim().to_string());
    }
    let text = p.due.replace_all(&without_tags, "").trim().to_string();

    Task {
        text,
        completed,
        tags,
        due_date,
    }
}

/// Parses a single (already trimmed) line as a checkbox task.
pub fn parse_task_line(line: &str) -> Option<Task> {
    let caps = patterns().checkbox.captures(line)?;
    let completed = &caps[1] == "x";
    Some(parse_task_body(&caps[2], completed))
}

/// Trims whitespace and the byte-order mark some editors prepend.
fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn parse_tasks(text: &str) -> TaskSet {
    let mut tasks = TaskSet::default();
    let mut current = Section::InProgress;

    for raw in text.split('\n') {
        let line = trim_line(raw);
        if let Some(section) = heading_section(line) {
            current = section;
            continue;
        }
        if let Some(task) = parse_task_line(line) {
            tasks.section_mut(current).push(task);
        }
    }
    tasks
}

/// Reads and parses the task list. A missing file is an empty task set.
pub fn load_task_set(path: &Path) -> Result<TaskSet, TaskError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_tasks(&text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(TaskSet::default()),
        Err(source) => Err(TaskError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
