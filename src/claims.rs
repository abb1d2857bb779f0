use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open, ordered set of JWT claims
///
/// Claims map string names to arbitrary JSON values; callers can carry any
/// private claims alongside the two registered claims this crate recognizes:
///
/// - `iat` - issued-at, integer seconds since the Unix epoch, injected on
///   encode when absent
/// - `exp` - expiration, integer seconds since the Unix epoch, checked on
///   decode when present
///
/// Insertion order is preserved, so the JSON emitted on encode keeps the
/// caller's key order and an injected `iat` lands at the end.
///
/// # Example
/// ```rust
/// use hmac_jwt::Claims;
/// use serde_json::json;
///
/// let mut claims = Claims::new();
/// claims.insert("sub", json!("example.com"));
/// claims.insert("exp", json!(4000000000u64));
///
/// assert_eq!(claims.expiration(), Some(4000000000));
/// assert_eq!(claims.issued_at(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Create an empty claims set
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a claim, replacing any previous value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Look up a claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Whether a claim with this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of claims in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no claims
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The `iat` registered claim, if present and an integer
    pub fn issued_at(&self) -> Option<i64> {
        self.0.get("iat").and_then(Value::as_i64)
    }

    /// The `exp` registered claim, if present and an integer
    pub fn expiration(&self) -> Option<i64> {
        self.0.get("exp").and_then(Value::as_i64)
    }

    /// Ensure the `iat` claim is present (RFC 7519 §4.1.6)
    ///
    /// Sets `iat` to `now` in whole seconds when the claim is absent; an
    /// existing `iat` is never overwritten.
    pub fn ensure_issued_at(&mut self, now: DateTime<Utc>) {
        if !self.0.contains_key("iat") {
            self.0.insert("iat".to_string(), Value::from(now.timestamp()));
        }
    }

    /// Check the `exp` claim against a clock reading (RFC 7519 §4.1.4)
    ///
    /// Vacuously true when `exp` is absent. Otherwise true iff the expiration
    /// instant (`exp * 1000` milliseconds since the epoch) is strictly in the
    /// future of `now`; there is no clock-skew leeway. An `exp` that is
    /// present but not an integer counts as expired.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        if !self.0.contains_key("exp") {
            return true;
        }
        match self.expiration() {
            Some(exp) => exp.saturating_mul(1000) > now.timestamp_millis(),
            None => false,
        }
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Claims> for Map<String, Value> {
    fn from(claims: Claims) -> Self {
        claims.0
    }
}
