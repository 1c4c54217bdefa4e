//! Minimal library usage: render a synthetic GET request to stdout.
//!
//! Run with:
//!   cargo run --example render
//!
//! The real binary does the same thing against the live process
//! environment; this example shows the renderer is just a function over
//! plain values.

use ekho::{CgiEnv, render};

fn main() {
    let env: CgiEnv = [
        ("GATEWAY_INTERFACE", "CGI/1.1"),
        ("REQUEST_METHOD", "GET"),
        ("QUERY_STRING", "name=alice&mood=curious"),
        ("SCRIPT_NAME", "/cgi-bin/ekho"),
        ("SERVER_NAME", "localhost"),
        ("SERVER_PORT", "8080"),
        ("SERVER_PROTOCOL", "HTTP/1.1"),
        ("HTTP_USER_AGENT", "demo/0.1"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();

    let report = render(&env, None);
    print!("{}", String::from_utf8_lossy(&report.into_bytes()));
}
