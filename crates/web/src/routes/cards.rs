//! Card route handlers (step two of the creation workflow).
//!
//! The number of card forms rendered and accepted always comes from the
//! session-stored pending state, never from the client. The body of the
//! submission repeats `question`/`answer` once per card, so it is decoded
//! explicitly from the raw form body.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, RawForm, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use memorycards_core::CardSetId;

use crate::db::CardRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::{CardForm, decode_card_forms, empty_card_forms};
use crate::middleware::{
    RequireAuth, clear_pending_card_set, pending_card_set, set_flash, take_flash,
};
use crate::models::PendingCardSet;
use crate::state::AppState;

/// Card forms template for the pending set.
#[derive(Template, WebTemplate)]
#[template(path = "create_cards.html")]
pub struct CreateCardsTemplate {
    pub flash: Option<String>,
    pub authenticated: bool,
    pub title: String,
    pub card_set_id: CardSetId,
    pub forms: Vec<CardForm>,
    pub non_field_errors: Vec<String>,
}

/// Fetch the pending set and check it matches the path id.
///
/// A missing or mismatched pending state means the workflow was never
/// started (or was started for a different set), so the caller restarts it.
async fn matching_pending(session: &Session, raw_id: &str) -> Result<Option<PendingCardSet>> {
    let Some(pending) = pending_card_set(session).await? else {
        return Ok(None);
    };

    let matches = raw_id
        .parse::<i32>()
        .is_ok_and(|id| id >= 1 && CardSetId::new(id) == pending.id);

    Ok(matches.then_some(pending))
}

/// Display the card forms for the pending set.
pub async fn create_page(
    RequireAuth(_user): RequireAuth,
    session: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let Some(pending) = matching_pending(&session, &id).await? else {
        return Ok(Redirect::to("/cardset/create").into_response());
    };

    let count = usize::try_from(pending.cards_number).unwrap_or_default();

    let template = CreateCardsTemplate {
        flash: take_flash(&session).await?,
        authenticated: true,
        title: pending.title,
        card_set_id: pending.id,
        forms: empty_card_forms(count),
        non_field_errors: Vec::new(),
    };

    Ok(template.into_response())
}

/// Handle the card forms submission, committing all cards at once.
///
/// A malformed body (unpaired fields) is a 400; a card count that does not
/// match the declared cardinality, or a blank question/answer, re-renders the
/// forms with HTTP 422. All cards are inserted in a single transaction, and
/// only then is the pending state cleared.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> Result<Response> {
    let Some(pending) = matching_pending(&session, &id).await? else {
        return Ok(Redirect::to("/cardset/create").into_response());
    };

    let mut forms = decode_card_forms(&body)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let expected = usize::try_from(pending.cards_number).unwrap_or_default();

    if forms.len() != expected {
        forms.resize_with(expected, CardForm::default);

        let template = CreateCardsTemplate {
            flash: None,
            authenticated: true,
            title: pending.title,
            card_set_id: pending.id,
            forms,
            non_field_errors: vec![format!(
                "This card set must contain exactly {} cards",
                pending.cards_number
            )],
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
    }

    for form in &mut forms {
        form.validate();
    }

    if forms.iter().any(|f| !f.errors.is_valid()) {
        let template = CreateCardsTemplate {
            flash: None,
            authenticated: true,
            title: pending.title,
            card_set_id: pending.id,
            forms,
            non_field_errors: Vec::new(),
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
    }

    let pairs: Vec<(String, String)> = forms
        .into_iter()
        .map(|f| (f.question, f.answer))
        .collect();

    CardRepository::new(state.pool())
        .insert_many(pending.id, &pairs)
        .await?;

    clear_pending_card_set(&session).await?;
    set_flash(&session, "Card set successfully created!").await?;

    Ok(Redirect::to(&format!("/cardset/view/{}", pending.id)).into_response())
}
