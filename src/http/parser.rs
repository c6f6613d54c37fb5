use tracing::{debug, warn};

use crate::config::{HeadersConfig, config};
use crate::http::headers::HeaderMap;
use crate::http::validator::trim_http_whitespace;

impl HeaderMap {
    /// Parses a raw header block (`Name: value` lines) into a new map.
    ///
    /// Folded continuation lines are joined to the previous line. Lines
    /// without a name or without a `:` are ignored, and headers rejected by
    /// normalization or by the configured limits are skipped with a warning.
    pub fn parse(block: &str) -> HeaderMap {
        Self::parse_with_config(block, config())
    }

    /// Same as [`parse`](Self::parse), enforcing the limits of `config`.
    pub fn parse_with_config(block: &str, config: HeadersConfig) -> HeaderMap {
        let mut headers = HeaderMap::with_config(config);

        let unfolded = unfold(block);
        for line in unfolded.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };

            let name = trim_http_whitespace(name);
            if name.is_empty() {
                continue;
            }

            // `err` never carries the value, only the name.
            if let Err(err) = headers.append(name, trim_http_whitespace(value)) {
                warn!(name, %err, "skipping header line");
            }
        }

        debug!(init = "block", count = headers.len(), "headers constructed");
        headers
    }
}

// Replaces every line break followed by spaces or tabs with a single space.
fn unfold(block: &str) -> String {
    let mut result = String::with_capacity(block.len());
    let mut rest = block;

    while let Some(pos) = rest.find('\n') {
        let (line, tail) = rest.split_at(pos);
        let tail = &tail[1..];
        let continued = tail.trim_start_matches([' ', '\t']);

        if continued.len() < tail.len() {
            result.push_str(line.strip_suffix('\r').unwrap_or(line));
            result.push(' ');
        } else {
            result.push_str(line);
            result.push('\n');
        }
        rest = continued;
    }

    result.push_str(rest);
    result
}
