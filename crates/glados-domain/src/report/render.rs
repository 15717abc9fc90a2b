use crate::check_in::AccountResult;
use crate::notification::PushTemplate;

/// Render one account as a report block
pub fn render_block(result: &AccountResult, template: PushTemplate) -> String {
    match template {
        PushTemplate::Markdown => format!(
            "{}. {}\nStatus: {} ({})\nPoints: {} ({:+})\nDays left: {}\nExchange: {}",
            result.index,
            result.email,
            result.status,
            result.message,
            result.points_total,
            result.points_delta,
            result.days_remaining,
            result.exchange_summary,
        ),
        PushTemplate::Html => format!(
            "<p><b>{}. {}</b><br>Status: {} ({})<br>Points: {} ({:+})<br>Days left: {}<br>Exchange: {}</p>",
            result.index,
            escape_html(&result.email),
            result.status,
            escape_html(&result.message),
            result.points_total,
            result.points_delta,
            result.days_remaining,
            escape_html(&result.exchange_summary),
        ),
    }
}

/// Concatenate every block in processing order
pub fn render_body(results: &[AccountResult], template: PushTemplate) -> String {
    let separator = match template {
        PushTemplate::Markdown => "\n\n",
        PushTemplate::Html => "\n",
    };

    results
        .iter()
        .map(|r| render_block(r, template))
        .collect::<Vec<_>>()
        .join(separator)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
