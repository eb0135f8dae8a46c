//! Form types and decoding.
//!
//! Simple forms decode through `axum::Form` with serde derives. The cards
//! form repeats its `question`/`answer` fields once per card, which the
//! urlencoded deserializer cannot express, so it gets an explicit decode
//! function over the raw body instead.

use serde::Deserialize;
use thiserror::Error;

use crate::validator::{self, EMAIL_RX, Validator};

/// Step one of the creation workflow: title and declared card count.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CardSetCreateForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cards_number: i32,
    #[serde(skip)]
    pub errors: Validator,
}

impl CardSetCreateForm {
    /// Run all field checks, accumulating errors.
    pub fn validate(&mut self) {
        self.errors.check_field(
            validator::not_blank(&self.title),
            "title",
            "This field cannot be blank",
        );
        self.errors.check_field(
            validator::max_chars(&self.title, 100),
            "title",
            "This field cannot be more than 100 characters long",
        );
        self.errors.check_field(
            validator::permitted_int_range(self.cards_number, 3, 10),
            "cards_number",
            "This field must be at range from 3 to 10",
        );
    }
}

/// One question/answer pair of the cards form.
#[derive(Debug, Default, Clone)]
pub struct CardForm {
    pub question: String,
    pub answer: String,
    pub errors: Validator,
}

impl CardForm {
    /// Run all field checks, accumulating errors.
    pub fn validate(&mut self) {
        self.errors.check_field(
            validator::not_blank(&self.question),
            "question",
            "This field cannot be blank",
        );
        self.errors.check_field(
            validator::not_blank(&self.answer),
            "answer",
            "This field cannot be blank",
        );
    }
}

/// Signup form data.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UserSignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(skip)]
    pub errors: Validator,
}

impl UserSignupForm {
    /// Run all field checks, accumulating errors.
    pub fn validate(&mut self) {
        self.errors.check_field(
            validator::not_blank(&self.name),
            "name",
            "This field cannot be blank",
        );
        self.errors.check_field(
            validator::max_chars(&self.name, 255),
            "name",
            "This field cannot be more than 255 characters long",
        );
        self.errors.check_field(
            validator::not_blank(&self.email),
            "email",
            "This field cannot be blank",
        );
        self.errors.check_field(
            validator::matches(&self.email, &EMAIL_RX),
            "email",
            "This field must be a valid email address",
        );
        self.errors.check_field(
            validator::not_blank(&self.password),
            "password",
            "This field cannot be blank",
        );
        self.errors.check_field(
            validator::min_chars(&self.password, 8),
            "password",
            "This field must be at least 8 characters long",
        );
    }
}

/// Login form data.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UserLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(skip)]
    pub errors: Validator,
}

impl UserLoginForm {
    /// Run all field checks, accumulating errors.
    pub fn validate(&mut self) {
        self.errors.check_field(
            validator::not_blank(&self.email),
            "email",
            "This field cannot be blank",
        );
        self.errors.check_field(
            validator::matches(&self.email, &EMAIL_RX),
            "email",
            "This field must be a valid email address",
        );
        self.errors.check_field(
            validator::not_blank(&self.password),
            "password",
            "This field cannot be blank",
        );
    }
}

/// Errors from the explicit cards form decoder.
#[derive(Debug, Error)]
pub enum FormDecodeError {
    /// The body had unequal numbers of `question` and `answer` fields.
    #[error("unpaired question/answer fields")]
    UnpairedFields,
}

/// Decode the repeated `question`/`answer` fields of the cards form.
///
/// Fields are paired in submission order. Unknown keys are ignored.
///
/// # Errors
///
/// Returns `FormDecodeError::UnpairedFields` if the counts differ.
pub fn decode_card_forms(body: &[u8]) -> Result<Vec<CardForm>, FormDecodeError> {
    let mut questions = Vec::new();
    let mut answers = Vec::new();

    for (key, value) in url::form_urlencoded::parse(body) {
        match key.as_ref() {
            "question" => questions.push(value.into_owned()),
            "answer" => answers.push(value.into_owned()),
            _ => {}
        }
    }

    if questions.len() != answers.len() {
        return Err(FormDecodeError::UnpairedFields);
    }

    Ok(questions
        .into_iter()
        .zip(answers)
        .map(|(question, answer)| CardForm {
            question,
            answer,
            errors: Validator::new(),
        })
        .collect())
}

/// A list of `n` blank card forms for rendering the cards step.
#[must_use]
pub fn empty_card_forms(n: usize) -> Vec<CardForm> {
    (0..n).map(|_| CardForm::default()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_card_forms_pairs_in_order() {
        let body = b"question=Q1&answer=A1&question=Q2&answer=A2";
        let forms = decode_card_forms(body).unwrap();
        assert_eq!(forms.len(), 2);
        assert_eq!(forms[0].question, "Q1");
        assert_eq!(forms[0].answer, "A1");
        assert_eq!(forms[1].question, "Q2");
        assert_eq!(forms[1].answer, "A2");
    }

    #[test]
    fn test_decode_card_forms_urldecodes() {
        let body = b"question=What%20is%202%2B2%3F&answer=4";
        let forms = decode_card_forms(body).unwrap();
        assert_eq!(forms[0].question, "What is 2+2?");
    }

    #[test]
    fn test_decode_card_forms_ignores_stray_keys() {
        let body = b"question=Q&csrf=x&answer=A";
        let forms = decode_card_forms(body).unwrap();
        assert_eq!(forms.len(), 1);
    }

    #[test]
    fn test_decode_card_forms_rejects_unpaired() {
        let body = b"question=Q1&answer=A1&question=Q2";
        assert!(matches!(
            decode_card_forms(body),
            Err(FormDecodeError::UnpairedFields)
        ));
    }

    #[test]
    fn test_decode_card_forms_empty_body() {
        let forms = decode_card_forms(b"").unwrap();
        assert!(forms.is_empty());
    }

    #[test]
    fn test_card_set_create_form_validation() {
        let mut form = CardSetCreateForm {
            title: String::new(),
            cards_number: 2,
            errors: Validator::new(),
        };
        form.validate();
        assert!(!form.errors.is_valid());
        assert!(form.errors.field_error("title").is_some());
        assert!(form.errors.field_error("cards_number").is_some());

        let mut form = CardSetCreateForm {
            title: "Capitals".to_string(),
            cards_number: 3,
            errors: Validator::new(),
        };
        form.validate();
        assert!(form.errors.is_valid());
    }

    #[test]
    fn test_card_form_validation() {
        let mut form = CardForm {
            question: "Q".to_string(),
            answer: "   ".to_string(),
            errors: Validator::new(),
        };
        form.validate();
        assert!(form.errors.field_error("question").is_none());
        assert!(form.errors.field_error("answer").is_some());
    }

    #[test]
    fn test_signup_form_validation() {
        let mut form = UserSignupForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            errors: Validator::new(),
        };
        form.validate();
        assert!(form.errors.field_error("email").is_some());
        assert!(form.errors.field_error("password").is_some());
        assert!(form.errors.field_error("name").is_none());
    }

    #[test]
    fn test_login_form_validation() {
        let mut form = UserLoginForm {
            email: "a@x.com".to_string(),
            password: "password1".to_string(),
            errors: Validator::new(),
        };
        form.validate();
        assert!(form.errors.is_valid());
    }

    #[test]
    fn test_empty_card_forms() {
        let forms = empty_card_forms(5);
        assert_eq!(forms.len(), 5);
        assert!(forms.iter().all(|f| f.question.is_empty()));
    }
}
