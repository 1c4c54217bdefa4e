//! CGI environment snapshot.
//!
//! The hosting server delivers request metadata as environment variables.
//! [`CgiEnv`] captures them once, immutably, so the renderer works from a
//! plain value instead of global process state. Tests build snapshots with
//! `collect()`; the binary builds one with [`CgiEnv::from_process`].

use std::collections::HashMap;

use crate::method::Method;

/// The variable names every report displays, per the CGI convention.
pub const WELL_KNOWN: [&str; 11] = [
    "REQUEST_METHOD",
    "QUERY_STRING",
    "PATH_INFO",
    "SCRIPT_NAME",
    "SCRIPT_FILENAME",
    "SERVER_NAME",
    "SERVER_PORT",
    "SERVER_PROTOCOL",
    "CONTENT_TYPE",
    "CONTENT_LENGTH",
    "GATEWAY_INTERFACE",
];

/// Placeholder shown wherever a variable is absent. Absence is data, not
/// an error.
pub const NOT_SET: &str = "(not set)";

/// Request-header variables carry this prefix (`User-Agent` arrives as
/// `HTTP_USER_AGENT`).
const HEADER_PREFIX: &str = "HTTP_";

/// An immutable snapshot of the CGI environment.
///
/// Keys are case-sensitive, exactly as the server set them. Any variable
/// may be absent; every accessor degrades to a placeholder or a zero
/// value rather than failing.
pub struct CgiEnv {
    vars: HashMap<String, String>,
}

impl CgiEnv {
    /// Captures the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Raw lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Lookup for display: absent variables become [`NOT_SET`].
    pub fn display(&self, name: &str) -> &str {
        self.get(name).unwrap_or(NOT_SET)
    }

    /// The request method, if `REQUEST_METHOD` is present and one of the
    /// RFC 9110 names. Anything else is `None`, which downstream simply
    /// means "not POST".
    pub fn method(&self) -> Option<Method> {
        self.get("REQUEST_METHOD")?.parse().ok()
    }

    /// The declared body length. Absent, empty or non-integer values are
    /// zero, never an error.
    pub fn content_length(&self) -> usize {
        self.get("CONTENT_LENGTH")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// The raw query string, empty if absent.
    pub fn query_string(&self) -> &str {
        self.get("QUERY_STRING").unwrap_or("")
    }

    /// Every present variable that belongs in the report: name starts
    /// with `HTTP_` or is one of [`WELL_KNOWN`]. Sorted lexicographically
    /// by name.
    pub fn request_vars(&self) -> Vec<(&str, &str)> {
        let mut vars: Vec<(&str, &str)> = self
            .vars
            .iter()
            .filter(|(name, _)| {
                name.starts_with(HEADER_PREFIX) || WELL_KNOWN.contains(&name.as_str())
            })
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        vars.sort_by_key(|&(name, _)| name);
        vars
    }
}

impl FromIterator<(String, String)> for CgiEnv {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().collect() }
    }
}
