//! Percent-encoding and charset conversion with fallback behavior.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters gets percent-encoded.
const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a string for use in a URL component.
///
/// Input is encoded as UTF-8 bytes. Rust strings are always valid UTF-8,
/// so this cannot fail.
pub fn url_encode(input: &str) -> String {
    utf8_percent_encode(input, URL_ENCODE_SET).to_string()
}

/// Encode a string to bytes using the encoding named by `label`
/// (a WHATWG encoding label, e.g. `"iso-8859-1"`).
///
/// If the label is not recognized, a warning is logged and the string is
/// encoded as UTF-8, the runtime default.
pub fn encode_string_as(input: &str, label: &str) -> Vec<u8> {
    match encoding_rs::Encoding::for_label(label.as_bytes()) {
        Some(encoding) => {
            let (bytes, _, _) = encoding.encode(input);
            bytes.into_owned()
        }
        None => {
            tracing::warn!(
                encoding = label,
                "unknown encoding label, falling back to UTF-8"
            );
            input.as_bytes().to_vec()
        }
    }
}

/// Encode a string to bytes as UTF-8, the sane default.
pub fn encode_string(input: &str) -> Vec<u8> {
    input.as_bytes().to_vec()
}

/// Decode bytes to a string using the encoding named by `label`.
///
/// Malformed sequences are replaced with U+FFFD. If the label is not
/// recognized, a warning is logged and the bytes are decoded as UTF-8,
/// the runtime default.
pub fn decode_string_as(bytes: &[u8], label: &str) -> String {
    match encoding_rs::Encoding::for_label(label.as_bytes()) {
        Some(encoding) => {
            let (text, _, _) = encoding.decode(bytes);
            text.into_owned()
        }
        None => {
            tracing::warn!(
                encoding = label,
                "unknown encoding label, falling back to UTF-8"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Decode bytes to a string as UTF-8, the sane default.
pub fn decode_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
