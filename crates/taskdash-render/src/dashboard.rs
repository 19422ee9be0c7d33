use taskdash_core::task::{Section, Task, TaskSet};

use crate::escape::{escape_angle_brackets, escape_text};
use crate::{document_head, document_tail, RenderMode, NOTEPAD_FILE};

/// Headline numbers shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub percent: u32,
}

impl TaskStats {
    pub fn from_tasks(tasks: &TaskSet) -> Self {
        let total = tasks.total();
        let completed = tasks.done.len();
        TaskStats {
            total,
            in_progress: tasks.in_progress.len(),
            completed,
            percent: completion_percent(completed, total),
        }
    }
}

/// `completed / total` as a whole percentage, rounded from the floating-point
/// product so values just under `.5` round down. Zero tasks is 0%.
pub fn completion_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

fn section_heading(section: Section) -> String {
    let icon = match section {
        Section::InProgress => "🔨",
        Section::UpNext => "📌",
        Section::Done => "✅",
    };
    format!("{icon} {}", section.label())
}

pub fn render_task(task: &Task) -> String {
    let tags: String = task
        .tags
        .iter()
        .map(|tag| format!("<span class=\"tag\">#{}</span>", escape_text(tag)))
        .collect();
    let due = match &task.due_date {
        Some(date) => format!(
            "<span class=\"due-date\">📅 {}</span>",
            escape_angle_brackets(date)
        ),
        None => String::new(),
    };
    let (check_class, text_class) = if task.completed {
        ("checked", "completed")
    } else {
        ("", "")
    };

    format!(
        "
      <div class=\"card\">
        <div class=\"task-row\">
          <span class=\"checkbox {check_class}\"></span>
          <span class=\"task-text {text_class}\">{text}</span>
          {tags}
          {due}
        </div>
      </div>",
        text = escape_text(&task.text)
    )
}

fn render_section(section: Section, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return String::new();
    }
    let rows: Vec<String> = tasks.iter().map(render_task).collect();
    format!("<h2>{}</h2>\n{}", section_heading(section), rows.join("\n"))
}

fn render_stats(stats: &TaskStats) -> String {
    format!(
        "  <div class=\"stats\">
    <div class=\"stat-card\">
      <div class=\"stat-number\">{total}</div>
      <div class=\"stat-label\">Total Tasks</div>
    </div>
    <div class=\"stat-card\">
      <div class=\"stat-number\" style=\"color: var(--color-accent)\">{in_progress}</div>
      <div class=\"stat-label\">In Progress</div>
    </div>
    <div class=\"stat-card\">
      <div class=\"stat-number\" style=\"color: var(--color-success)\">{completed}</div>
      <div class=\"stat-label\">Completed</div>
    </div>
    <div class=\"stat-card\">
      <div class=\"stat-number\" style=\"color: var(--color-warning)\">{percent}%</div>
      <div class=\"stat-label\">Progress</div>
    </div>
  </div>
",
        total = stats.total,
        in_progress = stats.in_progress,
        completed = stats.completed,
        percent = stats.percent,
    )
}

/// Renders the complete task dashboard document.
pub fn render_dashboard(tasks: &TaskSet, mode: RenderMode) -> String {
    let stats = TaskStats::from_tasks(tasks);
    let subtitle = if mode.is_live() {
        "saves auto-refresh this page"
    } else {
        "edit that file and re-run to update"
    };

    let mut html = document_head("Task Dashboard");
    html.push_str("  <h1>📋 Task Dashboard</h1>\n");
    html.push_str(&format!(
        "  <p class=\"subtitle\">Your tasks from <code>tasks.md</code> — {subtitle}.</p>\n"
    ));
    html.push_str(&format!(
        "  <a class=\"nav-link\" href=\"{NOTEPAD_FILE}\">📝 Open Notepad →</a>\n\n"
    ));
    html.push_str(&render_stats(&stats));

    for section in Section::ALL {
        html.push_str(&format!(
            "\n  {}\n",
            render_section(section, tasks.section(section))
        ));
    }

    if tasks.is_empty() {
        html.push_str(
            "\n  <div class=\"empty-state\">No tasks yet. Add some to tasks.md and re-run!</div>\n",
        );
    }

    html.push_str(&format!(
        "\n  <div class=\"footer\">\n    Generated from tasks.md · {}\n  </div>\n",
        mode.footer_hint("Edit your tasks and run <code>taskdash</code> to update")
    ));
    html.push_str(&document_tail(mode));
    html
}
