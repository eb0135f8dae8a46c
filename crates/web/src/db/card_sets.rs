//! Card set repository for database operations.

use sqlx::PgPool;

use memorycards_core::CardSetId;

use super::RepositoryError;
use crate::models::{Card, CardSet, CardSetWithCards};

/// Repository for card set database operations.
pub struct CardSetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CardSetRepository<'a> {
    /// Create a new card set repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an empty card set and return its ID.
    ///
    /// The creation timestamp is assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        title: &str,
        cards_number: i32,
    ) -> Result<CardSetId, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO card_sets (title, cards_number, created)
            VALUES ($1, $2, NOW())
            RETURNING id
            ",
        )
        .bind(title)
        .bind(cards_number)
        .fetch_one(self.pool)
        .await?;

        Ok(CardSetId::new(id))
    }

    /// Get a card set by ID together with all of its cards.
    ///
    /// Cards are returned ordered by card id ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no set matches the ID.
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: CardSetId) -> Result<CardSetWithCards, RepositoryError> {
        let card_set: CardSet = sqlx::query_as(
            r"
            SELECT id, title, created, cards_number
            FROM card_sets
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        let cards: Vec<Card> = sqlx::query_as(
            r"
            SELECT id, card_set_id, question, answer
            FROM cards
            WHERE card_set_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(CardSetWithCards { card_set, cards })
    }

    /// List all card sets, newest first, without their cards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<CardSet>, RepositoryError> {
        let card_sets: Vec<CardSet> = sqlx::query_as(
            r"
            SELECT id, title, created, cards_number
            FROM card_sets
            ORDER BY id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(card_sets)
    }
}
