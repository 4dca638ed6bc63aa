use std::fmt::Write;

use crate::domain::{progress_percent, Summary};

/// Renders the progress page from the six-field summary contract:
/// total, target, progress, top 3, error-or-none, source label.
pub fn render_page(summary: &Summary, target: f64) -> String {
    let progress = progress_percent(summary.total(), target);

    let mut top_3 = String::new();
    for amount in summary.top_3() {
        let _ = write!(top_3, "<li>{}</li>", format_amount(*amount));
    }
    if top_3.is_empty() {
        top_3.push_str("<li class=\"empty\">no donations yet</li>");
    }

    let error_banner = match summary.error() {
        Some(message) => format!(
            "<p class=\"error\">{}</p>",
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Donation Progress</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
.bar {{ background: #eee; border-radius: 6px; overflow: hidden; }}
.bar > div {{ background: #2e7d32; color: #fff; padding: 0.25rem 0; text-align: center; width: {progress:.1}%; }}
.error {{ color: #b71c1c; }}
.source {{ color: #777; font-size: 0.8rem; }}
</style>
</head>
<body>
<h1>Donation Progress</h1>
{error_banner}
<div class="bar"><div>{progress:.1}%</div></div>
<p>{total} of {target} raised</p>
<h2>Top donations</h2>
<ol>{top_3}</ol>
<p class="source">credential source: {source}</p>
</body>
</html>
"#,
        total = format_amount(summary.total()),
        target = format_amount(target),
        source = summary.source(),
    )
}

/// Whole amounts print without a decimal tail, everything else as-is.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount}")
    }
}

/// Error text can carry remote failure messages; keep them inert.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
