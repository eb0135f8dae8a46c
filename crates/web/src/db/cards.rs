//! Card repository for database operations.

use sqlx::PgPool;

use memorycards_core::CardSetId;

use super::RepositoryError;

/// Repository for card database operations.
pub struct CardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CardRepository<'a> {
    /// Create a new card repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append one card to an existing set.
    ///
    /// The foreign key on `card_set_id` is the only integrity check here; how
    /// many cards a set is supposed to hold is enforced by the creation
    /// workflow, not this layer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the referenced set does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        card_set_id: CardSetId,
        question: &str,
        answer: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cards (card_set_id, question, answer)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(card_set_id)
        .bind(question)
        .bind(answer)
        .execute(self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    /// Insert all cards for a set in a single transaction.
    ///
    /// Either every card is inserted or none are, so a set never ends up
    /// with fewer cards than were submitted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the referenced set does not exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert_many(
        &self,
        card_set_id: CardSetId,
        cards: &[(String, String)],
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        for (question, answer) in cards {
            sqlx::query(
                r"
                INSERT INTO cards (card_set_id, question, answer)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(card_set_id)
            .bind(question)
            .bind(answer)
            .execute(&mut *tx)
            .await
            .map_err(map_insert_error)?;
        }

        tx.commit().await?;

        Ok(())
    }
}

/// Map a card insert error, surfacing FK violations as `Conflict`.
fn map_insert_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_foreign_key_violation()
    {
        return RepositoryError::Conflict("card set does not exist".to_owned());
    }
    RepositoryError::Database(e)
}
