//! Conversions to and from [`http::HeaderMap`], the ecosystem's standard
//! header container.

use tracing::debug;

use crate::http::error::HeaderError;
use crate::http::headers::HeaderMap;

impl TryFrom<&http::HeaderMap> for HeaderMap {
    type Error = HeaderError;

    /// Appends every value of `headers` in iteration order, so repeated names
    /// end up comma-joined.
    fn try_from(headers: &http::HeaderMap) -> Result<Self, Self::Error> {
        let mut result = HeaderMap::new();
        for (name, value) in headers {
            let value = value.to_str().map_err(|_| HeaderError::InvalidHeaderValue {
                name: Some(name.to_string()),
            })?;
            result.append(name.as_str(), value)?;
        }

        debug!(init = "http", count = result.len(), "headers constructed");
        Ok(result)
    }
}

impl TryFrom<&HeaderMap> for http::HeaderMap {
    type Error = HeaderError;

    fn try_from(headers: &HeaderMap) -> Result<Self, Self::Error> {
        let mut result = http::HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let name = http::HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| HeaderError::InvalidHeaderName(name.to_string()))?;
            let value = http::HeaderValue::from_str(value).map_err(|_| {
                HeaderError::InvalidHeaderValue {
                    name: Some(name.to_string()),
                }
            })?;
            result.append(name, value);
        }
        Ok(result)
    }
}
