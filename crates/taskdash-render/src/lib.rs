//! HTML page generation for taskdash.
//!
//! Two standalone documents are produced: the task dashboard and the notepad.
//! Both inline [`style::SHARED_CSS`] and, in [`RenderMode::LiveRefresh`], a
//! polling script that reloads the page when the server's build version moves.

pub mod dashboard;
pub mod escape;
pub mod notepad;
pub mod style;

pub use dashboard::render_dashboard;
pub use notepad::render_notepad;

pub const DASHBOARD_FILE: &str = "dashboard.html";
pub const NOTEPAD_FILE: &str = "notepad.html";
pub const VERSION_ROUTE: &str = "/version";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One-shot build; pages tell the reader to re-run the generator.
    #[default]
    Static,
    /// Served locally; pages poll the version endpoint and reload themselves.
    LiveRefresh,
}

impl RenderMode {
    pub fn is_live(self) -> bool {
        self == RenderMode::LiveRefresh
    }

    pub(crate) fn refresh_script(self) -> &'static str {
        if self.is_live() {
            AUTO_REFRESH_SCRIPT
        } else {
            ""
        }
    }

    pub(crate) fn footer_hint(self, static_hint: &'static str) -> &'static str {
        if self.is_live() {
            "Watching for changes — saves auto-refresh"
        } else {
            static_hint
        }
    }
}

const AUTO_REFRESH_SCRIPT: &str = r#"
<script>
(function() {
  var currentVersion = null;
  setInterval(function() {
    fetch('/version').then(function(r) { return r.text(); }).then(function(v) {
      if (currentVersion === null) { currentVersion = v; return; }
      if (v !== currentVersion) { location.reload(); }
    }).catch(function() {});
  }, 1500);
})();
</script>"#;

pub(crate) fn document_head(title: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>{title}</title>
  <style>{css}</style>
</head>
<body>
",
        css = style::SHARED_CSS
    )
}

pub(crate) fn document_tail(mode: RenderMode) -> String {
    format!("  {}\n</body>\n</html>", mode.refresh_script())
}
