use crate::crypto::signature::Algorithm;
use std::fmt;

/// JWT encoding and decoding errors
///
/// Each variant identifies exactly one validation failure, so callers can
/// distinguish "not a JWT" from "tampered" from "stale" and react accordingly
/// (e.g. respond 401 for an expired token but 400 for a malformed one).
///
/// Every failure aborts the call immediately; nothing is retried or logged
/// inside this crate.
///
/// # Example
/// ```rust
/// use hmac_jwt::{JwtError, Result, Claims};
///
/// fn handle_decode_result(result: Result<Claims>) {
///     match result {
///         Ok(claims) => println!("Token accepted: {:?}", claims),
///         Err(JwtError::TokenExpired) => println!("Token is stale"),
///         Err(JwtError::InvalidSignature) => println!("Token was tampered with"),
///         Err(e) => println!("Token rejected: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub enum JwtError {
    /// The algorithm name is not one of HS256, HS384 or HS512
    ///
    /// This error occurs when:
    /// - A decoded header declares an `alg` outside the supported set
    /// - The header carries no `alg` field at all
    UnsupportedAlgorithm(String),

    /// No secret is registered for the requested or declared algorithm
    ///
    /// The secret table never falls back to another algorithm's entry;
    /// a missing entry is always an error.
    MissingSecret(Algorithm),

    /// The token does not split into exactly three dot-separated segments
    MalformedToken,

    /// A header or payload segment is not valid base64url-encoded JSON
    ///
    /// This error occurs when:
    /// - The segment contains characters outside the base64url alphabet
    /// - The decoded bytes are not valid UTF-8
    /// - The decoded text is not valid JSON
    MalformedSegment(String),

    /// The header `typ` field is not `"JWT"`
    ///
    /// Carries the `typ` value found in the header, or an empty string
    /// if the field was absent.
    InvalidType(String),

    /// The recomputed signature does not match the presented signature
    InvalidSignature,

    /// The `exp` claim is present and not in the future
    TokenExpired,

    /// Generic cryptographic operation error
    ///
    /// This error occurs for unexpected primitive failures that don't fit
    /// into other categories; with the HMAC primitives used here it is
    /// unreachable in practice.
    Crypto(String),
}

impl fmt::Display for JwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwtError::UnsupportedAlgorithm(name) => {
                write!(f, "Unsupported JWT algorithm: {name:?}")
            }
            JwtError::MissingSecret(algorithm) => {
                write!(f, "No secret defined for {algorithm}")
            }
            JwtError::MalformedToken => {
                write!(f, "Token is not a three-segment JWT")
            }
            JwtError::MalformedSegment(msg) => {
                write!(f, "Malformed token segment: {msg}")
            }
            JwtError::InvalidType(typ) => {
                write!(f, "Invalid header typ: {typ:?}")
            }
            JwtError::InvalidSignature => {
                write!(f, "Signature verification failed")
            }
            JwtError::TokenExpired => {
                write!(f, "Token has expired")
            }
            JwtError::Crypto(msg) => {
                write!(f, "Cryptographic error: {msg}")
            }
        }
    }
}

impl std::error::Error for JwtError {}

pub type Result<T> = std::result::Result<T, JwtError>;
