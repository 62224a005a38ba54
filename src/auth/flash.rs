//! One-shot messages carried across a redirect in a short-lived cookie.
//!
//! The cookie stores a stable code rather than the text itself so the value
//! never needs escaping.

use actix_web::{
    cookie::{time, Cookie, SameSite},
    http::header,
    HttpRequest, HttpResponse, HttpResponseBuilder,
};

use crate::validation::match_form::MATCH_FORM_FLASH;
use crate::validation::signup::SignupError;

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Signup(SignupError),
    MatchForm,
}

impl Flash {
    pub fn code(&self) -> &'static str {
        match self {
            Flash::Signup(SignupError::InvalidFirstName) => "invalid_first_name",
            Flash::Signup(SignupError::InvalidLastName) => "invalid_last_name",
            Flash::Signup(SignupError::NumberOutOfRange) => "number_out_of_range",
            Flash::Signup(SignupError::PasswordTooShort) => "password_too_short",
            Flash::Signup(SignupError::PasswordMismatch) => "password_mismatch",
            Flash::Signup(SignupError::EmailTaken) => "email_taken",
            Flash::Signup(SignupError::NumberTaken) => "number_taken",
            Flash::MatchForm => "match_form",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let flash = match code {
            "invalid_first_name" => Flash::Signup(SignupError::InvalidFirstName),
            "invalid_last_name" => Flash::Signup(SignupError::InvalidLastName),
            "number_out_of_range" => Flash::Signup(SignupError::NumberOutOfRange),
            "password_too_short" => Flash::Signup(SignupError::PasswordTooShort),
            "password_mismatch" => Flash::Signup(SignupError::PasswordMismatch),
            "email_taken" => Flash::Signup(SignupError::EmailTaken),
            "number_taken" => Flash::Signup(SignupError::NumberTaken),
            "match_form" => Flash::MatchForm,
            _ => return None,
        };
        Some(flash)
    }

    pub fn message(&self) -> String {
        match self {
            Flash::Signup(error) => error.to_string(),
            Flash::MatchForm => MATCH_FORM_FLASH.to_string(),
        }
    }
}

/// 303 to `location` with `flash` queued for the next page.
pub fn redirect_with_flash(location: &str, flash: Flash) -> HttpResponse {
    let cookie = Cookie::build(FLASH_COOKIE, flash.code())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(5))
        .finish();

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish()
}

/// Read the pending flash, if any.
pub fn take_flash(req: &HttpRequest) -> Option<Flash> {
    req.cookie(FLASH_COOKIE)
        .and_then(|cookie| Flash::from_code(cookie.value()))
}

/// Make sure a rendered flash is not shown twice.
pub fn clear_flash(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    builder.cookie(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_maps_back_to_its_flash() {
        let all = [
            Flash::Signup(SignupError::InvalidFirstName),
            Flash::Signup(SignupError::InvalidLastName),
            Flash::Signup(SignupError::NumberOutOfRange),
            Flash::Signup(SignupError::PasswordTooShort),
            Flash::Signup(SignupError::PasswordMismatch),
            Flash::Signup(SignupError::EmailTaken),
            Flash::Signup(SignupError::NumberTaken),
            Flash::MatchForm,
        ];
        for flash in all {
            assert_eq!(Flash::from_code(flash.code()), Some(flash.clone()));
        }
        assert_eq!(Flash::from_code("nonsense"), None);
    }

    #[test]
    fn match_form_flash_uses_the_generic_text() {
        assert_eq!(Flash::MatchForm.message(), "Please fill in the blanks.");
    }
}
