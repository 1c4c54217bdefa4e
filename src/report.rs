//! The request report: the rendered response and the renderer itself.
//!
//! [`render`] is a pure function from an environment snapshot (plus an
//! already-read body) to a [`Report`]. It performs no I/O, so the whole
//! contract is testable with a handful of `assert!`s and no web server in
//! sight. The boundary does the reading and writing: [`render_request`]
//! pulls the declared body off a stream, and [`Report::write_to`] puts the
//! finished bytes on one.

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::body;
use crate::env::{CgiEnv, WELL_KNOWN};
use crate::error::Error;
use crate::method::Method;
use crate::query;

// ── Report ───────────────────────────────────────────────────────────────────

/// A rendered CGI response: the fixed header block plus one HTML document.
///
/// Built fresh per request, used once, written once. The header block is
/// the entire CGI-side protocol: one `Content-Type` line, one blank line,
/// CRLF line endings. The document itself uses bare `\n`.
#[derive(Debug)]
pub struct Report {
    html: String,
}

impl Report {
    /// The CGI header block: content type, then the header/body delimiter.
    pub const HEADER: &'static str = "Content-Type: text/html\r\n\r\n";

    /// The HTML document, without the header block.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The full response: header block followed by the document.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::HEADER.len() + self.html.len());
        out.extend_from_slice(Self::HEADER.as_bytes());
        out.extend_from_slice(self.html.as_bytes());
        out
    }

    /// Writes the full response and flushes.
    pub async fn write_to<W: AsyncWrite + Unpin>(
        &self,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writer.write_all(Self::HEADER.as_bytes()).await?;
        writer.write_all(self.html.as_bytes()).await?;
        writer.flush().await
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Renders the request report.
///
/// Never fails and never mutates its inputs: absent variables render as
/// the placeholder, malformed query pairs are skipped, and every
/// interpolated value is escaped so the document's tag structure survives
/// arbitrary input.
///
/// `body` is the already-read request body, if one was read; pair with
/// [`read_declared`](crate::read_declared) or use [`render_request`] for
/// the gated read + render in one call.
pub fn render(env: &CgiEnv, body: Option<&[u8]>) -> Report {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n");
    html.push_str("<head><title>CGI Request Report</title></head>\n");
    html.push_str("<body>\n<h1>CGI Request Report</h1>\n");

    // The well-known variables, present or not.
    html.push_str("<h2>CGI Variables</h2>\n");
    html.push_str("<table>\n<tr><th>Variable</th><th>Value</th></tr>\n");
    for name in WELL_KNOWN {
        row(&mut html, name, env.display(name));
    }
    html.push_str("</table>\n");

    // Query parameters, in the order the query string lists them.
    let query_string = env.query_string();
    if !query_string.is_empty() {
        html.push_str("<h2>Query Parameters</h2>\n");
        html.push_str("<table>\n<tr><th>Parameter</th><th>Value</th></tr>\n");
        for (key, value) in query::pairs(query_string) {
            row(&mut html, key, value);
        }
        html.push_str("</table>\n");
    }

    // The body, or why there is none.
    html.push_str("<h2>POST Data</h2>\n");
    match body {
        Some(bytes) => {
            html.push_str(&format!("<p>Length: {} bytes</p>\n", bytes.len()));
            html.push_str(&format!(
                "<p>{}</p>\n",
                escape(&String::from_utf8_lossy(bytes)),
            ));
        }
        None if env.method() == Some(Method::Post) => {
            html.push_str("<p>No POST data received</p>\n");
        }
        None => {
            html.push_str("<p>This script expects POST for body data</p>\n");
        }
    }

    // Everything the server told us about the request, sorted.
    html.push_str("<h2>Request Environment</h2>\n");
    html.push_str("<table>\n<tr><th>Variable</th><th>Value</th></tr>\n");
    for (name, value) in env.request_vars() {
        row(&mut html, name, value);
    }
    html.push_str("</table>\n");

    html.push_str("</body>\n</html>\n");

    Report { html }
}

/// The full request-to-report operation: gated body read, then [`render`].
///
/// The only failure path is the transport (a body shorter than declared,
/// or the stream breaking). Content-level malformations degrade inside
/// [`render`] and never surface here.
pub async fn render_request<R>(env: &CgiEnv, reader: &mut R) -> Result<Report, Error>
where
    R: AsyncRead + Unpin,
{
    let body = body::read_declared(env, reader).await?;
    Ok(render(env, body.as_deref()))
}

fn row(html: &mut String, name: &str, value: &str) {
    html.push_str(&format!(
        "<tr><td>{}</td><td>{}</td></tr>\n",
        escape(name),
        escape(value),
    ));
}

/// Escapes the five HTML-significant characters. Displayed text stays the
/// raw received value; only the markup interpretation changes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::NOT_SET;

    fn env(pairs: &[(&str, &str)]) -> CgiEnv {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    fn rows(html: &str) -> Vec<&str> {
        html.lines().filter(|l| l.starts_with("<tr><td>")).collect()
    }

    #[test]
    fn header_block_is_exact() {
        let report = render(&env(&[]), None);
        let bytes = report.into_bytes();
        assert!(bytes.starts_with(b"Content-Type: text/html\r\n\r\n"));
    }

    #[test]
    fn empty_env_renders_placeholders_for_all_well_known() {
        let report = render(&env(&[]), None);
        for name in WELL_KNOWN {
            let cell = format!("<tr><td>{name}</td><td>{NOT_SET}</td></tr>");
            assert!(report.html().contains(&cell), "missing row for {name}");
        }
    }

    #[test]
    fn query_rows_in_order_and_bare_pair_skipped() {
        let report = render(&env(&[("QUERY_STRING", "a=1&b=2&c")]), None);
        let html = report.html();

        let a = html.find("<tr><td>a</td><td>1</td></tr>").unwrap();
        let b = html.find("<tr><td>b</td><td>2</td></tr>").unwrap();
        assert!(a < b);
        assert!(!html.contains("<td>c</td>"));
    }

    #[test]
    fn query_value_keeps_embedded_equals() {
        let report = render(&env(&[("QUERY_STRING", "redirect=http://x?y=z")]), None);
        assert!(report.html().contains("<td>redirect</td><td>http://x?y=z</td>"));
    }

    #[test]
    fn empty_query_string_omits_the_section() {
        let report = render(&env(&[("QUERY_STRING", "")]), None);
        assert!(!report.html().contains("Query Parameters"));
    }

    #[test]
    fn body_section_shows_length_and_text() {
        let env = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "5")]);
        let report = render(&env, Some(b"hello"));
        assert!(report.html().contains("<p>Length: 5 bytes</p>"));
        assert!(report.html().contains("<p>hello</p>"));
    }

    #[test]
    fn get_shows_expects_post_message() {
        let report = render(&env(&[("REQUEST_METHOD", "GET")]), None);
        assert!(report.html().contains("This script expects POST for body data"));
    }

    #[test]
    fn post_without_body_shows_no_data_message() {
        let env = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "0")]);
        let report = render(&env, None);
        assert!(report.html().contains("No POST data received"));
    }

    #[test]
    fn environment_table_is_filtered_and_sorted() {
        let report = render(
            &env(&[("HTTP_X", "1"), ("HTTP_A", "2"), ("FOO", "3")]),
            None,
        );
        let env_rows: Vec<&str> = rows(report.html())
            .into_iter()
            .filter(|r| r.contains("HTTP_") || r.contains("FOO"))
            .collect();
        assert_eq!(
            env_rows,
            vec![
                "<tr><td>HTTP_A</td><td>2</td></tr>",
                "<tr><td>HTTP_X</td><td>1</td></tr>",
            ],
        );
    }

    #[test]
    fn markup_in_values_is_escaped_and_tables_stay_balanced() {
        let hostile = env(&[("HTTP_EVIL", "</table><script>alert(1)</script>")]);
        let report = render(&hostile, None);
        let html = report.html();

        assert!(html.contains("&lt;/table&gt;"));
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("<table>").count(), html.matches("</table>").count());
    }

    #[test]
    fn body_text_is_escaped() {
        let env = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "13")]);
        let report = render(&env, Some(b"<b>bold</b>!!"));
        assert!(report.html().contains("&lt;b&gt;bold&lt;/b&gt;!!"));
    }

    #[tokio::test]
    async fn render_request_reads_then_renders() {
        let env = env(&[("REQUEST_METHOD", "POST"), ("CONTENT_LENGTH", "5")]);
        let mut stream = &b"hello..."[..];

        let report = render_request(&env, &mut stream).await.unwrap();
        assert!(report.html().contains("<p>hello</p>"));
        assert_eq!(stream, &b"..."[..]);
    }
}
