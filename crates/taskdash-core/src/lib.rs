//! Parsing core for taskdash: the task list, note files and the small
//! Markdown converter used for notes.

pub mod config;
pub mod markdown;
pub mod notes;
pub mod task;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
