//! Session middleware configuration and session value helpers.
//!
//! Sets up `PostgreSQL`-backed sessions using tower-sessions.

use sqlx::PgPool;
use tower_sessions::{Expiry, Session, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::AppConfig;
use crate::models::{PendingCardSet, session_keys};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "mc_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with `PostgreSQL` store.
///
/// # Arguments
///
/// * `pool` - `PostgreSQL` connection pool
/// * `config` - Application configuration (for the Secure cookie flag)
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &AppConfig,
) -> SessionManagerLayer<PostgresStore> {
    // Note: The sessions table must be created via migration
    let store = PostgresStore::new(pool.clone());

    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

// =============================================================================
// Flash messages
// =============================================================================

/// Store a one-shot flash message.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_flash(
    session: &Session,
    message: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::FLASH, message).await
}

/// Take the flash message, clearing it from the session.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn take_flash(
    session: &Session,
) -> Result<Option<String>, tower_sessions::session::Error> {
    session.remove::<String>(session_keys::FLASH).await
}

// =============================================================================
// Pending card set (two-step creation workflow)
// =============================================================================

/// Store the pending card set created in step one.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_pending_card_set(
    session: &Session,
    pending: &PendingCardSet,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::PENDING_CARD_SET, pending).await
}

/// Read the pending card set, leaving it in the session.
///
/// The cards step reads (rather than pops) so a validation failure can be
/// retried; the state is removed only once the cards are committed.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn pending_card_set(
    session: &Session,
) -> Result<Option<PendingCardSet>, tower_sessions::session::Error> {
    session.get::<PendingCardSet>(session_keys::PENDING_CARD_SET).await
}

/// Remove the pending card set once the workflow completes.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_pending_card_set(
    session: &Session,
) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<PendingCardSet>(session_keys::PENDING_CARD_SET)
        .await?;
    Ok(())
}
