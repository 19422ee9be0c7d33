//! Minimal Markdown-to-HTML conversion for note files.
//!
//! This is an ordered list of whole-text substitutions, not a Markdown parser.
//! Each rule runs over the full output of the previous one, so the order in
//! [`rules`] is part of the output format: headings before emphasis, bold
//! before italic, paragraph breaks before bullets.
//!
//! Nothing is escaped. Note files are local and trusted; task text goes through
//! the escaping in `taskdash-render` instead.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

enum Replacement {
    Template(&'static str),
    Bullet,
}

struct Rule {
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    fn template(pattern: &str, template: &'static str) -> Self {
        Rule {
            pattern: Regex::new(pattern).expect("markdown rule regex"),
            replacement: Replacement::Template(template),
        }
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            // Checkbox items stay as-is; they only mean something in the task list.
            Replacement::Bullet => self.pattern.replace_all(text, |caps: &Captures| {
                if caps.get(1).is_some() {
                    caps[0].to_string()
                } else {
                    "• ".to_string()
                }
            }),
        }
    }
}

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule::template(r"(?mR)^#### (.+)$", "<h4>${1}</h4>"),
            Rule::template(r"(?mR)^### (.+)$", "<h3>${1}</h3>"),
            Rule::template(r"(?mR)^## (.+)$", "<h2>${1}</h2>"),
            Rule::template(r"(?mR)^# (.+)$", "<h1>${1}</h1>"),
            Rule::template(r"(?R)\*\*(.+?)\*\*", "<strong>${1}</strong>"),
            Rule::template(r"(?R)\*(.+?)\*", "<em>${1}</em>"),
            Rule::template(r"`([^`]+)`", "<code>${1}</code>"),
            // Only http(s) targets become anchors; other schemes stay literal text.
            Rule::template(
                r"\[([^\]]+)\]\((https?://[^)]+)\)",
                r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
            ),
            Rule::template(r"(?mR)^---$", "<hr>"),
            Rule::template(r"\n\n", "</p><p>"),
            Rule {
                pattern: Regex::new(r"(?m)^- (\[[ x]\])?").expect("markdown rule regex"),
                replacement: Replacement::Bullet,
            },
        ]
    })
}

/// Converts a Markdown string into an HTML fragment wrapped in `<p>…</p>`.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut html = markdown.to_string();
    for rule in rules() {
        html = rule.apply(&html).into_owned();
    }
    format!("<p>{html}</p>")
}
