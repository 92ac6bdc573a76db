//! Receipt identifier generation.

use uuid::Uuid;

/// Source of fresh, opaque receipt identifiers.
///
/// Every call must return a value that has not been handed out before; the
/// points store relies on this and does not guard against key collisions.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates random UUID v4 identifiers (e.g. `7fb1377b-b223-49d9-a31a-5a02701dd310`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_format() {
        let id = UuidGenerator.generate();

        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_uuid_uniqueness() {
        let ids: HashSet<String> = (0..1000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
