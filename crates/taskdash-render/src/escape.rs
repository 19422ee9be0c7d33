//! HTML escaping for task-list content.
//!
//! Task text and tags are plain text typed by the user and must never turn into
//! markup. Due dates only need the angle brackets neutralised.

/// Escapes `&`, `<`, `>` and `"`.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes `<` and `>` only.
pub fn escape_angle_brackets(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
