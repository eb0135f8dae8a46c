//! Session-related types.
//!
//! Types stored in the session: authentication state and the intermediate
//! state of the two-step card set creation workflow.

use serde::{Deserialize, Serialize};

use memorycards_core::{CardSetId, UserId};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's display name.
    pub name: String,
}

/// Intermediate state of the two-step creation workflow.
///
/// Written after the set row is inserted, read by the cards step to decide
/// how many card forms to render and expect, and removed once all cards are
/// committed. The card count always comes from here, never from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCardSet {
    /// ID of the set row created in step one.
    pub id: CardSetId,
    /// Title entered in step one (displayed on the cards form).
    pub title: String,
    /// Number of cards the second step must collect.
    pub cards_number: i32,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the pending card set awaiting its cards.
    pub const PENDING_CARD_SET: &str = "pending_card_set";

    /// Key for the one-shot flash message.
    pub const FLASH: &str = "flash";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_card_set_serde_roundtrip() {
        let pending = PendingCardSet {
            id: CardSetId::new(7),
            title: "Capitals".to_string(),
            cards_number: 3,
        };

        let json = serde_json::to_string(&pending).unwrap();
        let parsed: PendingCardSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pending);
    }
}
