//! Card set and card models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use memorycards_core::{CardId, CardSetId};

/// A flashcard set.
///
/// `cards_number` is the cardinality declared at creation time. It drives how
/// many card forms the creation workflow renders and expects; the persistence
/// layer treats it as advisory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardSet {
    pub id: CardSetId,
    pub title: String,
    pub created: DateTime<Utc>,
    pub cards_number: i32,
}

/// A single question/answer card belonging to a set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Card {
    pub id: CardId,
    pub card_set_id: CardSetId,
    pub question: String,
    pub answer: String,
}

/// A card set together with all of its cards, ordered by card id ascending.
#[derive(Debug, Clone)]
pub struct CardSetWithCards {
    pub card_set: CardSet,
    pub cards: Vec<Card>,
}
