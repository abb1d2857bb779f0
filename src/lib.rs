//! # hmac-jwt
//!
//! A Rust library for encoding and decoding **compact JSON Web Tokens (JWTs)**
//! signed with **symmetric HMAC** (HS256, HS384, HS512). Tokens are verified
//! against a caller-supplied table of pre-shared secrets, one secret per
//! algorithm.
//!
//! ## Features
//!
//! - **HS256 / HS384 / HS512 signing** - HMAC over SHA-256/384/512 per RFC 7518
//! - **Strict validation order** - structure, then `typ`, then signature, then
//!   expiration, so callers can tell "not a JWT" from "tampered" from "stale"
//! - **Registered claim handling** - `iat` injected on encode when absent,
//!   `exp` checked on decode when present (RFC 7519)
//! - **Constant-time signature comparison** - mismatch position does not leak
//!   through timing
//! - **Injectable clock** - deterministic `iat`/`exp` behavior in tests
//! - **Open claims model** - arbitrary caller-defined claims with preserved
//!   key order
//!
//! ## Quick Start
//!
//! ```rust
//! use hmac_jwt::{decode, encode, Algorithm, Claims, SecretTable};
//! use serde_json::json;
//!
//! // One pre-shared secret per algorithm; no defaults, no fallbacks
//! let secrets = SecretTable::new()
//!     .with_secret(Algorithm::HS256, "your-256-bit-secret");
//!
//! // Encode: `iat` is injected if the claims don't carry one
//! let mut claims = Claims::new();
//! claims.insert("sub", json!("example.com"));
//! claims.insert("exp", json!(4_000_000_000u64));
//! let token = encode(&mut claims, Algorithm::HS256, &secrets).unwrap();
//!
//! // Decode: verifies structure, typ, signature and expiration
//! let verified = decode(&token, &secrets).unwrap();
//! assert_eq!(verified, claims);
//! ```
//!
//! ## Scope
//!
//! This crate is a building block: it owns token framing, signing and
//! validation, nothing else. Secret provisioning, key rotation, revocation
//! and logging are the caller's responsibility, and asymmetric algorithms
//! (RS*, ES*, PS*) are out of scope. The decoder dispatches on the
//! algorithm declared in the token header; the secret table controls which
//! algorithms are trusted by which entries it carries.
//!
//! ## Examples
//!
//! See the roundtrip example for an end-to-end encode/verify flow:
//!
//! ```bash
//! cargo run --example roundtrip
//! ```

pub mod claims;
pub mod clock;
pub mod config;
pub mod crypto;
pub mod error;

// Re-export main types for easier access
pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SecretTable;
pub use crypto::jwt::{decode, decode_with_clock, encode, encode_with_clock};
pub use crypto::signature::Algorithm;
pub use error::{JwtError, Result};
