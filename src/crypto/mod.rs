pub mod base64url;
pub mod jwt;
pub mod signature;

// Re-export main items for easier access
pub use jwt::{decode, decode_with_clock, encode, encode_with_clock};
pub use signature::Algorithm;
