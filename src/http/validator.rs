//! Header name and value normalization.
//!
//! Every path of [`HeaderMap`](crate::http::headers::HeaderMap) that reads or
//! writes a header goes through [`normalize_name`] and, when a value is
//! involved, [`normalize_value`]. Stored keys and values are therefore always
//! in normalized form and never need to be normalized again on read.

use crate::http::error::HeaderError;

const HTTP_WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// Strips leading and trailing HTTP whitespace (SP, HTAB, CR, LF) only.
pub(crate) fn trim_http_whitespace(s: &str) -> &str {
    s.trim_matches(HTTP_WHITESPACE)
}

/// Returns `true` for bytes allowed in an RFC 7230 `token`.
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Trims and lower-cases a header name.
///
/// Fails with [`HeaderError::InvalidHeaderName`] when the trimmed name is
/// empty or holds anything outside the token set (whitespace, control
/// characters, separators such as `:` or `/`, non-ASCII).
pub fn normalize_name(name: &str) -> Result<String, HeaderError> {
    let trimmed = trim_http_whitespace(name);
    if trimmed.is_empty() || !trimmed.chars().all(is_token_char) {
        return Err(HeaderError::InvalidHeaderName(name.to_string()));
    }

    Ok(trimmed.to_ascii_lowercase())
}

/// Trims a header value and collapses folded line breaks into single spaces.
///
/// A line-break sequence together with the spaces and tabs surrounding it
/// becomes one space. Fails with [`HeaderError::InvalidHeaderValue`] when a
/// control character other than horizontal tab remains.
pub fn normalize_value(value: &str) -> Result<String, HeaderError> {
    let trimmed = trim_http_whitespace(value);
    let mut result = String::with_capacity(trimmed.len());

    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' || c == '\n' {
            while result.ends_with([' ', '\t']) {
                result.pop();
            }
            while chars.next_if(|&n| matches!(n, '\r' | '\n' | ' ' | '\t')).is_some() {}
            result.push(' ');
            continue;
        }

        if c.is_control() && c != '\t' {
            return Err(HeaderError::InvalidHeaderValue { name: None });
        }
        result.push(c);
    }

    Ok(result)
}
