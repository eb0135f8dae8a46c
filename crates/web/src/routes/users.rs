//! User route handlers: signup, login, logout.
//!
//! Login and logout are privilege changes, so the session token is renewed
//! before the session is written.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::filters;
use crate::forms::{UserLoginForm, UserSignupForm};
use crate::middleware::{
    OptionalAuth, RequireAuth, clear_current_user, set_current_user, set_flash, take_flash,
};
use crate::models::CurrentUser;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub flash: Option<String>,
    pub authenticated: bool,
    pub form: UserSignupForm,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub flash: Option<String>,
    pub authenticated: bool,
    pub form: UserLoginForm,
}

/// Display the signup page.
pub async fn signup_page(OptionalAuth(user): OptionalAuth, session: Session) -> Result<Response> {
    let template = SignupTemplate {
        flash: take_flash(&session).await?,
        authenticated: user.is_some(),
        form: UserSignupForm::default(),
    };

    Ok(template.into_response())
}

/// Handle the signup form submission.
///
/// A duplicate email is reported as a field error on the form rather than a
/// bare error response, so the user can correct it in place.
pub async fn signup(
    OptionalAuth(user): OptionalAuth,
    State(state): State<AppState>,
    session: Session,
    Form(mut form): Form<UserSignupForm>,
) -> Result<Response> {
    form.validate();

    if !form.errors.is_valid() {
        let template = SignupTemplate {
            flash: None,
            authenticated: user.is_some(),
            form,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
    }

    let result = AuthService::new(state.pool())
        .register(&form.name, &form.email, &form.password)
        .await;

    match result {
        Ok(_) => {
            set_flash(&session, "Your signup was successful. Please log in.").await?;
            Ok(Redirect::to("/user/login").into_response())
        }
        Err(AuthError::UserAlreadyExists) => {
            form.errors
                .add_field_error("email", "Email address is already in use");
            let template = SignupTemplate {
                flash: None,
                authenticated: user.is_some(),
                form,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

/// Display the login page.
pub async fn login_page(OptionalAuth(user): OptionalAuth, session: Session) -> Result<Response> {
    let template = LoginTemplate {
        flash: take_flash(&session).await?,
        authenticated: user.is_some(),
        form: UserLoginForm::default(),
    };

    Ok(template.into_response())
}

/// Handle the login form submission.
///
/// Wrong email and wrong password collapse into one generic message so the
/// form cannot be used to probe which addresses are registered.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(mut form): Form<UserLoginForm>,
) -> Result<Response> {
    form.validate();

    if !form.errors.is_valid() {
        let template = LoginTemplate {
            flash: None,
            authenticated: false,
            form,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
    }

    let result = AuthService::new(state.pool())
        .login(&form.email, &form.password)
        .await;

    match result {
        Ok(user) => {
            // Renew the session token before elevating privileges
            session.cycle_id().await?;
            set_current_user(
                &session,
                &CurrentUser {
                    id: user.id,
                    name: user.name,
                },
            )
            .await?;

            Ok(Redirect::to("/cardset/create").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            form.errors
                .add_non_field_error("Email or password is incorrect");
            let template = LoginTemplate {
                flash: None,
                authenticated: false,
                form,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
        Err(e) => Err(AppError::Auth(e)),
    }
}

/// Handle logout.
pub async fn logout(RequireAuth(_user): RequireAuth, session: Session) -> Result<Response> {
    // Renew the session token before dropping privileges
    session.cycle_id().await?;
    clear_current_user(&session).await?;
    set_flash(&session, "You've been logged out successfully!").await?;

    Ok(Redirect::to("/").into_response())
}
