//! Inline HTML template for the balance viewer page.
//!
//! One page, two states: a table of balance fields, or an error banner
//! when the upstream call failed. The balance mapping is rendered as-is;
//! nested objects show their compact JSON form.

use options_desk_tradier::Balances;
use serde_json::Value;

const PAGE_TOP: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Account Balances</title>
<style>
  body { font-family: -apple-system, 'Segoe UI', sans-serif; background: #0f1419; color: #e6e6e6; margin: 2rem; }
  h1 { font-size: 1.4rem; border-bottom: 1px solid #2a3340; padding-bottom: 0.5rem; }
  table { border-collapse: collapse; margin-top: 1rem; min-width: 24rem; }
  th, td { text-align: left; padding: 0.4rem 1rem; border-bottom: 1px solid #2a3340; }
  th { color: #8899aa; font-weight: 600; }
  td.value { font-variant-numeric: tabular-nums; }
  .error { background: #3a1f24; border: 1px solid #7a2f3a; color: #ffb3b3; padding: 0.8rem 1rem; margin-top: 1rem; border-radius: 4px; }
  .empty { color: #8899aa; margin-top: 1rem; }
</style>
</head>
<body>
<h1>Account Balances</h1>
"#;

const PAGE_BOTTOM: &str = "</body>\n</html>\n";

/// Renders the page with a table of balance fields.
#[must_use]
pub fn render_balances(balances: &Balances) -> String {
    let mut body = String::new();

    if balances.is_empty() {
        body.push_str("<p class=\"empty\">No balances returned.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Field</th><th>Value</th></tr>\n");
        for (field, value) in balances {
            body.push_str(&format!(
                "<tr><td>{}</td><td class=\"value\">{}</td></tr>\n",
                escape_html(field),
                escape_html(&format_value(value))
            ));
        }
        body.push_str("</table>\n");
    }

    format!("{PAGE_TOP}{body}{PAGE_BOTTOM}")
}

/// Renders the page with an error banner and no balances table.
#[must_use]
pub fn render_error(message: &str) -> String {
    let body = format!("<p class=\"error\">{}</p>\n", escape_html(message));
    format!("{PAGE_TOP}{body}{PAGE_BOTTOM}")
}

/// Scalar values print plainly; nested structures fall back to JSON.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
