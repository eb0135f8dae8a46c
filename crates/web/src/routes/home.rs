//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;

use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalAuth, take_flash};
use crate::models::CardSet;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub flash: Option<String>,
    pub authenticated: bool,
    pub card_sets: Vec<CardSet>,
}

/// Display the home page with the latest card sets, newest first.
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> Result<HomeTemplate> {
    let card_sets = crate::db::CardSetRepository::new(state.pool())
        .list_all()
        .await?;

    Ok(HomeTemplate {
        flash: take_flash(&session).await?,
        authenticated: user.is_some(),
        card_sets,
    })
}
