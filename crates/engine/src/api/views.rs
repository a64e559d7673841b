//! HTML rendering for draw results.

use lotto_domain::DrawResult;

/// Render the draw result page for a draw taken from `[min, max)`.
pub fn draw_page(min: i32, max: i32, result: &DrawResult) -> String {
    let class = result.outcome().as_str();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Lotto</title>
</head>
<body>
<h1>Lotto</h1>
<p>Range: [{min}, {max})</p>
<p>Your number: <strong id="value">{value}</strong></p>
<p id="message" class="{class}">{message}</p>
<p><a href="/lotto?min={min}&amp;max={max}">Draw again</a></p>
</body>
</html>
"#,
        value = result.value(),
        message = escape_html(result.message()),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
