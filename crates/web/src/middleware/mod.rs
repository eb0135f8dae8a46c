//! HTTP middleware and session plumbing.
//!
//! Session state is always reached through an explicit `Session` handle
//! passed into handlers (or the extractors here), never process-wide state.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAuth, clear_current_user, set_current_user};
pub use session::{
    clear_pending_card_set, create_session_layer, pending_card_set, set_flash,
    set_pending_card_set, take_flash,
};
