//! In-memory stores.
//!
//! Nothing is persisted: every collection starts empty and is lost on restart.

mod collection;
mod repository;

pub use collection::*;
pub use repository::*;

use chrono::Utc;

/// How a collection picks the id of a new entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// `current length + 1`. Ids are reused after a deletion, which existing
    /// clients may depend on.
    #[default]
    LengthPlusOne,
    /// A counter that only ever grows, so ids are never reused.
    Monotonic,
}

impl IdPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" | "length_plus_one" => Some(IdPolicy::LengthPlusOne),
            "monotonic" | "counter" => Some(IdPolicy::Monotonic),
            _ => None,
        }
    }
}

/// An entry addressable by a numeric id.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> u64;
}

/// Current time as fractional seconds since the epoch.
pub fn unix_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_policy_parse() {
        assert_eq!(IdPolicy::parse("length"), Some(IdPolicy::LengthPlusOne));
        assert_eq!(IdPolicy::parse(" Monotonic "), Some(IdPolicy::Monotonic));
        assert_eq!(IdPolicy::parse("random"), None);
    }

    #[test]
    fn test_unix_now_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(unix_now() > 1_577_836_800.0);
    }
}
