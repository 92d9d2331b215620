//! Server-rendered chat page.
//!
//! One page: the session's transcript plus the prompt form. Interactivity
//! lives in `/static/script.js`; this module only produces the initial
//! HTML so a reload shows the stored history.

use muse_conversation::{Turn, TurnRole};
use std::fmt::Write;

/// Escapes text for safe interpolation into HTML.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn role_class(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Assistant => "assistant",
        TurnRole::System => "system",
    }
}

/// Renders the chat page with the session's transcript.
#[must_use]
pub fn render_index(turns: &[Turn]) -> String {
    let mut bubbles = String::new();
    for turn in turns {
        let _ = write!(
            bubbles,
            r#"<div class="bubble {}">{}</div>"#,
            role_class(turn.role),
            escape(&turn.text)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>muse</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<main>
<h1>muse</h1>
<div id="chat">{bubbles}<div id="bottom-anchor"></div></div>
<form id="promptForm">
<textarea id="prompt" placeholder="Describe your idea..." rows="2"></textarea>
<div class="controls">
<select id="category">
<option value="story">Story</option>
<option value="music">Music</option>
<option value="art">Art</option>
<option value="other">Other</option>
</select>
<select id="style">
<option value="normal">Normal</option>
<option value="funny">Funny</option>
<option value="dark">Dark</option>
<option value="poetic">Poetic</option>
<option value="epic">Epic</option>
</select>
<select id="language">
<option value="vi">Tiếng Việt</option>
<option value="en">English</option>
<option value="ja">日本語</option>
</select>
<button id="sendBtn" type="submit">Send</button>
<button id="clearBtn" type="button">Clear</button>
</div>
</form>
</main>
<script src="/static/script.js"></script>
</body>
</html>
"#
    )
}
