//! Case-insensitive, order-preserving HTTP header container.
//!
//! [`HeaderMap`] follows the semantics of the browser `Headers` class while
//! also remembering the raw spelling of every name:
//!
//! ```
//! use rustyheaders::HeaderMap;
//!
//! let mut headers = HeaderMap::new();
//! headers.append("X-Foo", "a")?;
//! headers.append("x-foo", "b")?;
//!
//! assert_eq!(headers.get("X-FOO")?, Some("a, b"));
//! assert_eq!(headers.raw()["x-foo"], "a, b");
//! # Ok::<(), rustyheaders::HeaderError>(())
//! ```

pub mod config;
pub mod http;

pub use self::config::HeadersConfig;
pub use self::http::{
    HeaderError, HeaderInitValue, HeaderMap, HeadersInit, normalize_name, normalize_value,
};
