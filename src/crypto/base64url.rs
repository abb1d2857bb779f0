use crate::error::{JwtError, Result};
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Translate a base64url string into the standard base64 alphabet
///
/// Replaces `-` with `+` and `_` with `/`. Padding is not restored; the
/// decoding engine below accepts unpadded input.
pub fn to_standard_alphabet(text: &str) -> String {
    text.replace('-', "+").replace('_', "/")
}

/// Translate a standard base64 string into the base64url alphabet
///
/// Replaces `+` with `-` and `/` with `_`, and strips trailing `=` padding,
/// per RFC 7515's base64url variant.
pub fn to_url_alphabet(text: &str) -> String {
    let translated = text.replace('+', "-").replace('/', "_");
    translated.trim_end_matches('=').to_string()
}

/// Decode a base64url segment into a JSON value
///
/// # Arguments
/// * `segment` - A header or payload segment of a token
///
/// # Returns
/// * `Ok(T)` - The deserialized JSON content
/// * `Err(JwtError::MalformedSegment)` - Base64 decoding, UTF-8 or JSON
///   parsing failed
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T> {
    let bytes = STANDARD_NO_PAD
        .decode(to_standard_alphabet(segment))
        .map_err(|e| JwtError::MalformedSegment(format!("invalid base64: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| JwtError::MalformedSegment(format!("invalid UTF-8: {}", e)))?;
    serde_json::from_str(&text)
        .map_err(|e| JwtError::MalformedSegment(format!("invalid JSON: {}", e)))
}

/// Encode a JSON-serializable value as a base64url segment
///
/// Serializes to compact JSON (no extra whitespace, map key order preserved
/// as provided), then base64url-encodes the UTF-8 bytes. The output never
/// contains padding characters.
pub fn encode_object<T: Serialize>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value)
        .map_err(|e| JwtError::MalformedSegment(format!("JSON serialization failed: {}", e)))?;
    Ok(encode_bytes(text.as_bytes()))
}

/// Encode raw bytes as a base64url segment (used for the signature segment)
pub fn encode_bytes(bytes: &[u8]) -> String {
    to_url_alphabet(&STANDARD_NO_PAD.encode(bytes))
}

/// Decode a base64url segment into raw bytes (used for the signature segment)
pub fn decode_bytes(segment: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    STANDARD_NO_PAD.decode(to_standard_alphabet(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_alphabet_translation() {
        assert_eq!(to_standard_alphabet("a-b_c"), "a+b/c");
        assert_eq!(to_url_alphabet("a+b/c=="), "a-b_c");
        assert_eq!(to_url_alphabet("abcd"), "abcd");
    }

    #[test]
    fn test_encode_object_emits_no_padding() {
        // One-key object serializes to a length that would need padding
        let segment = encode_object(&json!({"a": 1})).unwrap();
        assert!(!segment.contains('='));
        assert!(!segment.contains('+'));
        assert!(!segment.contains('/'));
    }

    #[test]
    fn test_segment_round_trip() {
        let value = json!({"sub": "example.com", "nested": {"n": [1, 2, 3]}, "ok": true});
        let segment = encode_object(&value).unwrap();
        let decoded: Value = decode_segment(&segment).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_known_header_segment() {
        // {"alg":"HS256","typ":"JWT"} from the jwt.io example
        let decoded: Value = decode_segment("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9").unwrap();
        assert_eq!(decoded, json!({"alg": "HS256", "typ": "JWT"}));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let result: Result<Value> = decode_segment("not*base64!");
        assert!(matches!(result, Err(JwtError::MalformedSegment(_))));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let segment = encode_bytes(b"plain text, not json");
        let result: Result<Value> = decode_segment(&segment);
        assert!(matches!(result, Err(JwtError::MalformedSegment(_))));
    }

    #[test]
    fn test_bytes_round_trip_url_characters() {
        // 0xfb 0xff forces '+' and '/' in standard base64
        let bytes = [0xfbu8, 0xff, 0xbf, 0x3e, 0x00];
        let segment = encode_bytes(&bytes);
        assert!(!segment.contains('+') && !segment.contains('/') && !segment.contains('='));
        assert_eq!(decode_bytes(&segment).unwrap(), bytes);
    }
}
