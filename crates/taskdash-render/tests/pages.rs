use pretty_assertions::assert_eq;

use taskdash_core::notes::parse_note;
use taskdash_core::task::{parse_tasks, TaskSet};
use taskdash_render::dashboard::{render_task, TaskStats};
use taskdash_render::{render_dashboard, render_notepad, RenderMode};

const SAMPLE: &str = "\
## In Progress
- [ ] Write report #docs
## Up Next
- [ ] Plan sprint (due: 2026-02-01)
## Done
- [x] Set up repo
- [x] Pick a name
";

#[test]
fn stats_count_sections() {
    let stats = TaskStats::from_tasks(&parse_tasks(SAMPLE));
    assert_eq!(
        stats,
        TaskStats {
            total: 4,
            in_progress: 1,
            completed: 2,
            percent: 50,
        }
    );
}

#[test]
fn dashboard_shows_stats_and_sections_in_order() {
    let html = render_dashboard(&parse_tasks(SAMPLE), RenderMode::Static);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>"));
    assert!(html.contains("<title>Task Dashboard</title>"));
    assert!(html.contains("<div class=\"stat-number\">4</div>"));
    assert!(html.contains(">50%</div>"));

    let in_progress = html.find("<h2>🔨 In Progress</h2>").expect("in progress");
    let up_next = html.find("<h2>📌 Up Next</h2>").expect("up next");
    let done = html.find("<h2>✅ Done</h2>").expect("done");
    assert!(in_progress < up_next && up_next < done);
    assert!(!html.contains("empty-state\">No tasks"));
}

#[test]
fn empty_sections_are_omitted() {
    let html = render_dashboard(&parse_tasks("- [ ] only one"), RenderMode::Static);
    assert!(html.contains("<h2>🔨 In Progress</h2>"));
    assert!(!html.contains("Up Next</h2>"));
    assert!(!html.contains("Done</h2>"));
}

#[test]
fn empty_task_set_shows_empty_state_and_zero_percent() {
    let html = render_dashboard(&TaskSet::default(), RenderMode::Static);
    assert!(html.contains("No tasks yet. Add some to tasks.md and re-run!"));
    assert!(html.contains(">0%</div>"));
    assert!(!html.contains("NaN"));
}

#[test]
fn task_row_marks_completion() {
    let tasks = parse_tasks("- [x] shipped #release (due: today)");
    let row = render_task(&tasks.in_progress[0]);
    assert!(row.contains("<span class=\"checkbox checked\"></span>"));
    assert!(row.contains("<span class=\"task-text completed\">shipped</span>"));
    assert!(row.contains("<span class=\"tag\">#release</span>"));
    assert!(row.contains("<span class=\"due-date\">📅 today</span>"));

    let open = parse_tasks("- [ ] pending");
    let row = render_task(&open.in_progress[0]);
    assert!(row.contains("<span class=\"checkbox \"></span>"));
    assert!(row.contains("<span class=\"task-text \">pending</span>"));
    assert!(!row.contains("due-date"));
    assert!(!row.contains("class=\"tag\""));
}

#[test]
fn task_text_is_escaped() {
    let tasks = parse_tasks("- [ ] <script>alert(\"x\")</script> & co");
    let html = render_dashboard(&tasks, RenderMode::Static);
    assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; co"));
    assert!(!html.contains("<script>alert"));
}

#[test]
fn due_date_brackets_are_escaped() {
    let tasks = parse_tasks("- [ ] thing (due: <b>soon</b>)");
    let html = render_dashboard(&tasks, RenderMode::Static);
    assert!(html.contains("📅 &lt;b&gt;soon&lt;/b&gt;"));
}

#[test]
fn live_mode_adds_script_and_changes_hints() {
    let tasks = parse_tasks(SAMPLE);
    let static_html = render_dashboard(&tasks, RenderMode::Static);
    let live_html = render_dashboard(&tasks, RenderMode::LiveRefresh);

    assert!(!static_html.contains("<script>"));
    assert!(static_html.contains("edit that file and re-run to update"));

    assert!(live_html.contains("<script>"));
    assert!(live_html.contains("fetch('/version')"));
    assert!(live_html.contains("saves auto-refresh this page"));
    assert!(live_html.contains("Watching for changes"));
}

#[test]
fn rendering_is_deterministic() {
    let tasks = parse_tasks(SAMPLE);
    assert_eq!(
        render_dashboard(&tasks, RenderMode::LiveRefresh),
        render_dashboard(&tasks, RenderMode::LiveRefresh)
    );
}

#[test]
fn notepad_embeds_note_html_unescaped() {
    let notes = vec![
        parse_note("a.md", "# Alpha\n**bold** <i>raw</i>"),
        parse_note("b.md", "[x](javascript:alert(1))"),
    ];
    let html = render_notepad(&notes, RenderMode::Static);
    assert!(html.contains("<title>Notepad</title>"));
    assert!(html.contains("2 notes found."));
    assert!(html.contains(
        "<div class=\"note-card\"><p><h1>Alpha</h1>\n<strong>bold</strong> <i>raw</i></p></div>"
    ));
    assert!(html.contains("<div class=\"note-card\"><p>[x](javascript:alert(1))</p></div>"));
    assert!(html.contains("href=\"dashboard.html\""));
}

#[test]
fn notepad_without_notes_shows_empty_state() {
    let html = render_notepad(&[], RenderMode::LiveRefresh);
    assert!(html.contains("0 notes found. Saves auto-refresh this page."));
    assert!(html.contains("No notes yet."));
    assert!(html.contains("<script>"));
}

#[test]
fn notepad_singular_count() {
    let notes = vec![parse_note("solo.md", "just text")];
    let html = render_notepad(&notes, RenderMode::Static);
    assert!(html.contains("1 note found.</p>"));
}
