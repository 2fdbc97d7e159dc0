use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::options::EncodeType;

/// Characters `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Characters `encodeURI` escapes.
const URI: &AsciiSet = &URI_COMPONENT
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'#');

/// Render `contents` as a `data:` URI for the given mime type.
///
/// The percent-encoded variants treat the contents as UTF-8 text (SVG being the usual
/// case), drop newlines, keep spaces readable and always escape `#`.
pub fn encode_file(contents: &[u8], mime_type: &str, encode_type: EncodeType) -> String {
    let set = match encode_type {
        EncodeType::Base64 => {
            return format!("data:{mime_type};base64,{}", STANDARD.encode(contents));
        }
        EncodeType::EncodeUri => URI,
        EncodeType::EncodeUriComponent => URI_COMPONENT,
    };

    let text = String::from_utf8_lossy(contents).replace(['\r', '\n'], "");
    let encoded = utf8_percent_encode(&text, set)
        .to_string()
        .replace("%20", " ")
        .replace('#', "%23");

    format!("data:{mime_type},{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SVG: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <path fill=\"#fff\"/>\n</svg>\n";

    #[test]
    fn base64_adds_data_uri_header() {
        let encoded = encode_file(b"hello", "text/plain", EncodeType::Base64);
        assert_eq!(encoded, "data:text/plain;base64,aGVsbG8=");
    }

    #[test]
    fn encode_uri_keeps_reserved_characters() {
        let encoded = encode_file(SVG.as_bytes(), "image/svg+xml", EncodeType::EncodeUri);
        assert_eq!(
            encoded,
            "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22%3E  \
             %3Cpath fill=%22%23fff%22/%3E%3C/svg%3E"
        );
    }

    #[test]
    fn encode_uri_component_escapes_reserved_characters() {
        let encoded = encode_file(SVG.as_bytes(), "image/svg+xml", EncodeType::EncodeUriComponent);
        assert!(encoded.starts_with("data:image/svg+xml,%3Csvg xmlns%3D%22http%3A%2F%2F"));
        assert!(encoded.contains("%23fff"));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('#'));
    }
}
