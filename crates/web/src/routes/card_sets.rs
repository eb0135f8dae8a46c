//! Card set route handlers.
//!
//! Viewing a set is public; creating one is the first step of the two-step
//! creation workflow and requires a logged-in user.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use memorycards_core::CardSetId;

use crate::db::{CardSetRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::CardSetCreateForm;
use crate::middleware::{OptionalAuth, RequireAuth, set_flash, set_pending_card_set, take_flash};
use crate::models::{Card, CardSet, PendingCardSet};
use crate::state::AppState;

/// Card set detail template.
#[derive(Template, WebTemplate)]
#[template(path = "view.html")]
pub struct ViewTemplate {
    pub flash: Option<String>,
    pub authenticated: bool,
    pub card_set: CardSet,
    pub cards: Vec<Card>,
}

/// Card set creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "create.html")]
pub struct CreateTemplate {
    pub flash: Option<String>,
    pub authenticated: bool,
    pub form: CardSetCreateForm,
}

/// Parse a path segment as a card set id.
///
/// Non-numeric and non-positive values are indistinguishable from a missing
/// row, so both map to a 404.
fn parse_id(raw: &str) -> Result<CardSetId> {
    match raw.parse::<i32>() {
        Ok(id) if id >= 1 => Ok(CardSetId::new(id)),
        _ => Err(AppError::NotFound(format!("card set {raw}"))),
    }
}

/// Display a card set with all of its cards.
pub async fn view(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Path(id): Path<String>,
) -> Result<ViewTemplate> {
    let id = parse_id(&id)?;

    let with_cards = CardSetRepository::new(state.pool())
        .get(id)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("card set {id}")),
            other => AppError::Database(other),
        })?;

    Ok(ViewTemplate {
        flash: take_flash(&session).await?,
        authenticated: user.is_some(),
        card_set: with_cards.card_set,
        cards: with_cards.cards,
    })
}

/// Display the card set creation form.
pub async fn create_page(RequireAuth(_user): RequireAuth, session: Session) -> Result<Response> {
    let template = CreateTemplate {
        flash: take_flash(&session).await?,
        authenticated: true,
        form: CardSetCreateForm::default(),
    };

    Ok(template.into_response())
}

/// Handle the card set creation form submission.
///
/// On success the set row is inserted immediately and the workflow state is
/// stashed in the session; the user is sent to the cards step. On validation
/// failure the form is re-rendered with HTTP 422.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    session: Session,
    Form(mut form): Form<CardSetCreateForm>,
) -> Result<Response> {
    form.validate();

    if !form.errors.is_valid() {
        let template = CreateTemplate {
            flash: None,
            authenticated: true,
            form,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
    }

    let id = CardSetRepository::new(state.pool())
        .insert(&form.title, form.cards_number)
        .await?;

    set_pending_card_set(
        &session,
        &PendingCardSet {
            id,
            title: form.title,
            cards_number: form.cards_number,
        },
    )
    .await?;

    set_flash(&session, "Empty card set successfully created!").await?;

    Ok(Redirect::to(&format!("/cards/create/{id}")).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert!(parse_id("1").is_ok());
        assert!(parse_id("42").is_ok());
    }

    #[test]
    fn test_parse_id_rejects_bad_input_as_not_found() {
        for raw in ["0", "-3", "abc", "1.5", ""] {
            assert!(matches!(parse_id(raw), Err(AppError::NotFound(_))), "{raw}");
        }
    }
}
