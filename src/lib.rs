//! Support helpers for an HTTP client layer.
//!
//! Everything here is stateless and safe to call from multiple threads:
//! endpoint normalization, percent-encoding, charset conversion with
//! fallback, replayable response bodies, and joined-task flattening.

pub mod encoding;
pub mod endpoint;
pub mod error;
pub mod logger;
pub mod response;
pub mod task;

pub use encoding::{decode_string, decode_string_as, encode_string, encode_string_as, url_encode};
pub use endpoint::{parse_endpoint, replace_host};
pub use error::{HttpUtilError, Result};
pub use response::{read_to_string_and_close, Response};
pub use task::{downcast_failure, flatten_join};
