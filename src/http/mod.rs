pub mod error;
pub mod headers;
pub mod init;
pub mod parser;
pub mod serialization;
pub mod validator;

#[cfg(feature = "http")]
pub mod interop;

pub use error::HeaderError;
pub use headers::HeaderMap;
pub use init::{HeaderInitValue, HeadersInit};
pub use validator::{normalize_name, normalize_value};
