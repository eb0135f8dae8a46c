//! HTTP route handlers for the memorycards site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (latest card sets)
//!
//! # Card sets
//! GET  /cardset/view/{id}      - View a card set with its cards
//! GET  /cardset/create         - Card set form (requires auth)
//! POST /cardset/create         - Create the set row (requires auth)
//!
//! # Cards (step two of the creation workflow)
//! GET  /cards/create/{id}      - Card forms for the pending set (requires auth)
//! POST /cards/create/{id}      - Commit the cards (requires auth)
//!
//! # Users
//! GET  /user/signup            - Signup page
//! POST /user/signup            - Signup action
//! GET  /user/login             - Login page
//! POST /user/login             - Login action
//! POST /user/logout            - Logout action (requires auth)
//! ```

pub mod card_sets;
pub mod cards;
pub mod home;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the card set routes router.
pub fn card_set_routes() -> Router<AppState> {
    Router::new()
        .route("/view/{id}", get(card_sets::view))
        .route(
            "/create",
            get(card_sets::create_page).post(card_sets::create),
        )
}

/// Create the cards routes router.
pub fn card_routes() -> Router<AppState> {
    Router::new().route(
        "/create/{id}",
        get(cards::create_page).post(cards::create),
    )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(users::signup_page).post(users::signup))
        .route("/login", get(users::login_page).post(users::login))
        .route("/logout", post(users::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/cardset", card_set_routes())
        .nest("/cards", card_routes())
        .nest("/user", user_routes())
}
