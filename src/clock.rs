use chrono::{DateTime, TimeZone, Utc};

/// Source of the current time for `iat` injection and `exp` checking
///
/// The encode/decode facade never reads the system clock directly; it goes
/// through this trait so tests can supply fixed timestamps instead of racing
/// real time. Production callers use [`SystemClock`] via the plain
/// [`encode`](crate::encode)/[`decode`](crate::decode) entry points.
pub trait Clock {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant, for deterministic tests
///
/// # Example
/// ```rust
/// use hmac_jwt::{Clock, FixedClock};
///
/// let clock = FixedClock::at(1_700_000_000);
/// assert_eq!(clock.now().timestamp(), 1_700_000_000);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to a Unix timestamp in whole seconds
    pub fn at(seconds: i64) -> Self {
        Self(Utc.timestamp_opt(seconds, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::at(1_700_000_000);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_system_clock_advances_from_epoch() {
        assert!(SystemClock.now().timestamp() > 1_700_000_000);
    }
}
