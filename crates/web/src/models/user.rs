//! User model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use memorycards_core::{Email, UserId};

/// A registered user.
///
/// The password hash never leaves the `db` and `services::auth` modules.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub created: DateTime<Utc>,
}
