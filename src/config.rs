use crate::crypto::signature::Algorithm;
use crate::error::{JwtError, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::collections::HashMap;

/// Pre-shared HMAC secrets, one per algorithm
///
/// The table is supplied by the caller on every encode and decode call; this
/// crate never retains it beyond the call and never provides default entries.
/// A missing entry for the requested or declared algorithm is an error, not a
/// fallback.
///
/// Secrets are held as [`SecretString`] so they are redacted from `Debug`
/// output and zeroized on drop. Populating the table (from environment
/// variables, config files, key stores) is the caller's responsibility.
///
/// # Security Note
/// Use a strong, randomly generated secret per algorithm — at least as many
/// bytes as the hash output (32 for HS256, 48 for HS384, 64 for HS512).
///
/// # Example
/// ```rust
/// use hmac_jwt::{Algorithm, SecretTable};
///
/// let secrets = SecretTable::new()
///     .with_secret(Algorithm::HS256, "your-256-bit-secret")
///     .with_secret(Algorithm::HS512, "your-512-bit-secret");
///
/// assert!(secrets.contains(Algorithm::HS256));
/// assert!(!secrets.contains(Algorithm::HS384));
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SecretTable {
    secrets: HashMap<Algorithm, SecretString>,
}

impl SecretTable {
    /// Create an empty secret table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a secret for an algorithm, builder style
    pub fn with_secret(mut self, algorithm: Algorithm, secret: impl Into<String>) -> Self {
        self.insert(algorithm, SecretString::new(secret.into()));
        self
    }

    /// Register a secret for an algorithm, replacing any previous entry
    pub fn insert(&mut self, algorithm: Algorithm, secret: SecretString) {
        self.secrets.insert(algorithm, secret);
    }

    /// Whether a secret is registered for the algorithm
    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.secrets.contains_key(&algorithm)
    }

    /// Number of registered secrets
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether the table holds no secrets
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Look up the secret for an algorithm
    ///
    /// # Returns
    /// * `Ok(&SecretString)` - The registered secret
    /// * `Err(JwtError::MissingSecret)` - No entry for this algorithm
    pub(crate) fn secret_for(&self, algorithm: Algorithm) -> Result<&SecretString> {
        self.secrets
            .get(&algorithm)
            .ok_or(JwtError::MissingSecret(algorithm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_lookup_returns_registered_secret() {
        let secrets = SecretTable::new().with_secret(Algorithm::HS256, "s256");
        let secret = secrets.secret_for(Algorithm::HS256).unwrap();
        assert_eq!(secret.expose_secret(), "s256");
    }

    #[test]
    fn test_lookup_missing_entry_is_an_error() {
        let secrets = SecretTable::new().with_secret(Algorithm::HS256, "s256");
        let result = secrets.secret_for(Algorithm::HS384);
        assert!(matches!(
            result,
            Err(JwtError::MissingSecret(Algorithm::HS384))
        ));
    }

    #[test]
    fn test_no_default_entries() {
        assert!(SecretTable::new().is_empty());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let secrets = SecretTable::new().with_secret(Algorithm::HS256, "hunter2");
        let rendered = format!("{:?}", secrets);
        assert!(!rendered.contains("hunter2"));
    }
}
