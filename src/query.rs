//! Query-string pair parsing.

/// Splits a query string into key/value pairs, preserving input order.
///
/// Pairs are `&`-separated; each pair splits on the **first** `=`, so a
/// value may itself contain `=` (`redirect=http://x?y=z` keeps the whole
/// URL as the value). Pieces without `=` are silently skipped.
///
/// Values are echoed raw: no percent-decoding, no `+`-to-space. The report
/// shows what the server delivered, not an interpretation of it.
pub fn pairs(query: &str) -> Vec<(&str, &str)> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .collect()
}
