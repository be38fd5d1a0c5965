//! Mapping entity representing a shortened URL record.

use chrono::{DateTime, Utc};

/// The stored association between a short hash and its original URL.
///
/// Mappings are immutable once created: there is no update operation anywhere
/// in the system, and `registered_at` is set exactly once at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Primary key. Exactly 10 characters from `[A-Za-z0-9]`.
    pub short_hash: String,
    /// The original long URL. Unique across all mappings.
    pub original_url: String,
    /// Creation timestamp, immutable after insert.
    pub registered_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_hash: String, original_url: String, registered_at: DateTime<Utc>) -> Self {
        Self {
            short_hash,
            original_url,
            registered_at,
        }
    }
}

/// Input data for persisting a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub short_hash: String,
    pub original_url: String,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let now = Utc::now();
        let mapping = Mapping::new(
            "Ab3xY9kQz1".to_string(),
            "https://example.com".to_string(),
            now,
        );

        assert_eq!(mapping.short_hash, "Ab3xY9kQz1");
        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.registered_at, now);
    }

    #[test]
    fn test_new_mapping_creation() {
        let new_mapping = NewMapping {
            short_hash: "Qw8rT2nMx0".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            registered_at: Utc::now(),
        };

        assert_eq!(new_mapping.short_hash, "Qw8rT2nMx0");
        assert_eq!(new_mapping.original_url, "https://rust-lang.org");
    }
}
