//! Account identifier port.

use ulid::Ulid;

/// Mints identifiers for new accounts.
pub trait IdGenerator: Send + Sync {
    /// A fresh 26-character account identifier.
    fn new_id(&self) -> String;
}

/// ULID-backed generator. ULIDs render as exactly 26 Crockford base32
/// characters; lowercased to match the rest of the account identifier space.
#[derive(Debug, Clone, Copy, Default)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn new_id(&self) -> String {
        Ulid::new().to_string().to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use botany_types::user::ID_LENGTH;

    #[test]
    fn test_ids_have_account_shape() {
        let id = UlidGenerator.new_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert_eq!(id, id.to_ascii_lowercase());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(UlidGenerator.new_id(), UlidGenerator.new_id());
    }
}
