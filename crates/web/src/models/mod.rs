//! Domain models and session-stored types.

pub mod card_set;
pub mod session;
pub mod user;

pub use card_set::{Card, CardSet, CardSetWithCards};
pub use session::{CurrentUser, PendingCardSet, keys as session_keys};
pub use user::User;
