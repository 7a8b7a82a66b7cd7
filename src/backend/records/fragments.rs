/**
 * HTML Fragments
 *
 * Markup returned to HTML-over-the-wire clients: the record table, its
 * empty state and the notices shown when the store is unavailable.
 *
 * Every interpolated value goes through [`escape_html`].
 */

use std::fmt::Write;

use crate::shared::Record;

const HEADINGS: [&str; 4] = ["ID", "Name", "Surname", "Actions"];

/// Endpoint the table fragment reloads itself from
pub const TABLE_ENDPOINT: &str = "/api/test-table";

/// Escape text for use in element content and quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// The record table, or the empty state when there are no records
pub fn records_table(records: &[Record]) -> String {
    if records.is_empty() {
        return empty_state();
    }

    let mut html = String::from("<table class=\"records\">\n  <thead>\n    <tr>");
    for heading in HEADINGS {
        let _ = write!(html, "<th>{heading}</th>");
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");

    for record in records {
        let name = escape_html(&record.name);
        let surname = escape_html(&record.surname);
        let _ = write!(
            html,
            "    <tr id=\"record-{id}\" data-id=\"{id}\">\
             <td>{id}</td><td>{name}</td><td>{surname}</td>\
             <td><button class=\"update\" data-id=\"{id}\" data-name=\"{name}\" data-surname=\"{surname}\">Update</button>\
             <button class=\"delete\" data-id=\"{id}\">Delete</button></td></tr>\n",
            id = record.id,
        );
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}

pub fn empty_state() -> String {
    notice(
        "empty",
        "No data found in database",
        Some("The database appears to be empty or not properly configured."),
    )
}

pub fn not_configured() -> String {
    notice(
        "error",
        "Database not configured",
        Some("Set DATABASE_URL to enable the records API."),
    )
}

pub fn error_notice(message: &str, detail: Option<&str>) -> String {
    notice("error", message, detail)
}

/// Error notice for the table endpoint, with a control that reloads it
pub fn table_error(message: &str, detail: Option<&str>) -> String {
    let mut html = notice_body("error", message, detail);
    let _ = writeln!(
        html,
        "  <button class=\"retry\" hx-get=\"{TABLE_ENDPOINT}\" hx-target=\"closest .notice\" hx-swap=\"outerHTML\">Retry</button>"
    );
    html.push_str("</div>\n");
    html
}

fn notice(kind: &str, message: &str, detail: Option<&str>) -> String {
    let mut html = notice_body(kind, message, detail);
    html.push_str("</div>\n");
    html
}

/// Opening of a notice, left unclosed for trailing controls
fn notice_body(kind: &str, message: &str, detail: Option<&str>) -> String {
    let mut html = format!(
        "<div class=\"notice notice-{kind}\">\n  <p class=\"notice-message\">{}</p>\n",
        escape_html(message)
    );
    if let Some(detail) = detail {
        let _ = writeln!(html, "  <p class=\"notice-detail\">{}</p>", escape_html(detail));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"O'Neil\" & co</b>"), "&lt;b&gt;&quot;O&#39;Neil&quot; &amp; co&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_table_rows_are_escaped() {
        let html = records_table(&[Record {
            id: 7,
            name: "<script>".to_string(),
            surname: "Smith".to_string(),
        }]);
        assert!(html.contains("<td>7</td>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_table_renders_empty_state() {
        assert!(records_table(&[]).contains("No data found"));
    }

    #[test]
    fn test_error_notice_detail_optional() {
        assert!(!error_notice("Failed", None).contains("notice-detail"));
        assert!(error_notice("Failed", Some("disk I/O error")).contains("disk I/O error"));
        assert!(!error_notice("Failed", None).contains("Retry"));
    }

    #[test]
    fn test_table_error_offers_retry() {
        let html = table_error("Failed to fetch test data", Some("pool closed"));
        assert!(html.contains("hx-get=\"/api/test-table\""));
        assert!(html.contains(">Retry</button>"));
        assert!(html.contains("pool closed"));
        assert!(html.trim_end().ends_with("</div>"));
    }
}
