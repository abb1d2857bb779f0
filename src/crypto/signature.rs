use crate::error::{JwtError, Result};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported HMAC signature algorithms
///
/// This is a closed set: the dispatch in [`compute_signature`] matches
/// exhaustively, so adding or removing a variant forces an update of the
/// dispatch table at compile time.
///
/// Serialized as the RFC 7518 algorithm name (`"HS256"` etc.), which is also
/// the form used in the token header's `alg` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
}

impl Algorithm {
    /// The RFC 7518 name of this algorithm
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Resolve an algorithm from its RFC 7518 name
    ///
    /// # Returns
    /// * `Ok(Algorithm)` - One of the supported HMAC algorithms
    /// * `Err(JwtError::UnsupportedAlgorithm)` - Any other name, including
    ///   `"none"` and the asymmetric families (RS*, ES*, PS*)
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "HS256" => Ok(Algorithm::HS256),
            "HS384" => Ok(Algorithm::HS384),
            "HS512" => Ok(Algorithm::HS512),
            other => Err(JwtError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the raw HMAC signature for a signing input
///
/// # Arguments
/// * `algorithm` - Hash primitive selector (SHA-256/384/512 per RFC 7518 §3.1)
/// * `secret` - Shared secret for the selected algorithm
/// * `signing_input` - The exact bytes `rawHeader "." rawPayload`
///
/// # Returns
/// * `Ok(Vec<u8>)` - Raw digest bytes (32, 48 or 64 bytes)
/// * `Err(JwtError::Crypto)` - HMAC key initialization failure (unreachable
///   in practice, HMAC accepts keys of any length)
pub fn compute_signature(
    algorithm: Algorithm,
    secret: &SecretString,
    signing_input: &[u8],
) -> Result<Vec<u8>> {
    let key = secret.expose_secret().as_bytes();
    let digest = match algorithm {
        Algorithm::HS256 => {
            let mut mac = HmacSha256::new_from_slice(key)
                .map_err(|e| JwtError::Crypto(format!("HMAC-SHA256 key error: {}", e)))?;
            mac.update(signing_input);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::HS384 => {
            let mut mac = HmacSha384::new_from_slice(key)
                .map_err(|e| JwtError::Crypto(format!("HMAC-SHA384 key error: {}", e)))?;
            mac.update(signing_input);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::HS512 => {
            let mut mac = HmacSha512::new_from_slice(key)
                .map_err(|e| JwtError::Crypto(format!("HMAC-SHA512 key error: {}", e)))?;
            mac.update(signing_input);
            mac.finalize().into_bytes().to_vec()
        }
    };
    Ok(digest)
}

/// Verify a presented signature by recomputation
///
/// Recomputes the signature via [`compute_signature`] and compares the raw
/// bytes in constant time, so mismatch position is not observable through
/// timing. Returns the comparison result; a mismatch is not itself an error.
///
/// # Arguments
/// * `algorithm` - Algorithm declared by the token header
/// * `secret` - Shared secret for that algorithm
/// * `signing_input` - The exact bytes `rawHeader "." rawPayload`
/// * `presented` - Decoded signature bytes from the token's third segment
pub fn verify_signature(
    algorithm: Algorithm,
    secret: &SecretString,
    signing_input: &[u8],
    presented: &[u8],
) -> Result<bool> {
    let expected = compute_signature(algorithm, secret, signing_input)?;
    Ok(expected.ct_eq(presented).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn secret() -> SecretString {
        Secret::new("test-secret-key".to_string())
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            assert_eq!(Algorithm::from_name(algorithm.name()).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        for name in ["none", "RS256", "ES256", "hs256", ""] {
            let result = Algorithm::from_name(name);
            assert!(matches!(result, Err(JwtError::UnsupportedAlgorithm(_))));
        }
    }

    #[test]
    fn test_digest_lengths_match_hash_primitive() {
        let input = b"header.payload";
        let cases = [
            (Algorithm::HS256, 32),
            (Algorithm::HS384, 48),
            (Algorithm::HS512, 64),
        ];
        for (algorithm, len) in cases {
            let digest = compute_signature(algorithm, &secret(), input).unwrap();
            assert_eq!(digest.len(), len);
        }
    }

    #[test]
    fn test_verify_accepts_recomputed_signature() {
        let input = b"header.payload";
        let digest = compute_signature(Algorithm::HS256, &secret(), input).unwrap();
        assert!(verify_signature(Algorithm::HS256, &secret(), input, &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_flipped_byte() {
        let input = b"header.payload";
        let mut digest = compute_signature(Algorithm::HS512, &secret(), input).unwrap();
        digest[17] ^= 0x01;
        assert!(!verify_signature(Algorithm::HS512, &secret(), input, &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_length() {
        let input = b"header.payload";
        let digest = compute_signature(Algorithm::HS256, &secret(), input).unwrap();
        assert!(!verify_signature(Algorithm::HS256, &secret(), input, &digest[..31]).unwrap());
    }

    #[test]
    fn test_algorithms_produce_distinct_signatures() {
        let input = b"header.payload";
        let hs256 = compute_signature(Algorithm::HS256, &secret(), input).unwrap();
        let hs384 = compute_signature(Algorithm::HS384, &secret(), input).unwrap();
        assert_ne!(hs256, hs384[..32].to_vec());
    }
}
