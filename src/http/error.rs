/// Errors raised while normalizing or storing a header.
///
/// Every failure is local to the call that triggered it: the map is left
/// exactly as it was before the call. Values never appear in an error, only
/// header names do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("Invalid header name: {0:?}")]
    InvalidHeaderName(String),

    #[error("Invalid header value{}", for_name(.name))]
    InvalidHeaderValue { name: Option<String> },

    #[error("Too many headers: limit is {limit}")]
    TooManyHeaders { limit: usize },

    #[error("Value of header {name:?} exceeds {limit} bytes")]
    ValueTooLarge { name: String, limit: usize },
}

impl HeaderError {
    /// Attaches `name` to an [`InvalidHeaderValue`](Self::InvalidHeaderValue)
    /// raised without one.
    pub(crate) fn with_name(self, name: &str) -> Self {
        match self {
            HeaderError::InvalidHeaderValue { name: None } => HeaderError::InvalidHeaderValue {
                name: Some(name.to_string()),
            },
            other => other,
        }
    }
}

fn for_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" for {name:?}"),
        None => String::new(),
    }
}
