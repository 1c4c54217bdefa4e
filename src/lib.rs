//! # ekho
//!
//! A minimal CGI request-echo responder. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The hosting web server owns the socket: it parses the request line,
//! terminates TLS, enforces limits, and hands the request over as
//! environment variables plus a readable body stream. ekho does not
//! second-guess any of that. The server does server things; the script
//! does script things.
//!
//! What the hosting server already owns (and ekho intentionally ignores):
//!
//! - **Request parsing** (request line, header folding, chunked transfer)
//! - **Routing** (which script runs for which path)
//! - **TLS, limits, timeouts** (server configuration)
//! - **Error pages** (a non-zero exit becomes the server's 500)
//!
//! What's left for ekho, the only part a diagnostic script has to get
//! right:
//!
//! - Snapshot the CGI environment ([`CgiEnv`]), treating absent variables
//!   as data, never as errors
//! - Read the request body exactly as declared: POST only, exactly
//!   `CONTENT_LENGTH` bytes, never more ([`read_declared`])
//! - Render one deterministic HTML report of it all ([`render`]): header
//!   line, blank line, document
//!
//! ## Quick start
//!
//! ```rust
//! use ekho::{CgiEnv, render};
//!
//! let env: CgiEnv = [
//!     ("REQUEST_METHOD".to_owned(), "GET".to_owned()),
//!     ("QUERY_STRING".to_owned(), "name=alice".to_owned()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = render(&env, None);
//! assert!(report.html().contains("alice"));
//! ```
//!
//! The `ekho` binary is the CGI adapter around this library: it captures
//! the real process environment, reads stdin, writes the report to stdout
//! and logs to stderr. Point your server's CGI handler at it and request
//! the script.

mod body;
mod env;
mod error;
mod method;
mod query;
mod report;

pub use body::read_declared;
pub use env::{CgiEnv, NOT_SET, WELL_KNOWN};
pub use error::Error;
pub use method::Method;
pub use query::pairs;
pub use report::{Report, render, render_request};
