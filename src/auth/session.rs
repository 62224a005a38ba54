use actix_web::{
    cookie::{time, Cookie, SameSite},
    dev::Payload,
    http::{header, StatusCode},
    web, FromRequest, HttpRequest, HttpResponse, ResponseError,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use std::future::{ready, Ready};

use crate::config::session::SessionSettings;
use crate::models::auth::SessionClaims;

pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no signed-in user")]
    Anonymous,
    #[error("session settings are not registered")]
    MissingSettings,
}

impl ResponseError for SessionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SessionError::Anonymous => StatusCode::SEE_OTHER,
            SessionError::MissingSettings => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Protected pages bounce anonymous visitors to the login form
            SessionError::Anonymous => redirect_to("/login"),
            SessionError::MissingSettings => HttpResponse::InternalServerError().finish(),
        }
    }
}

pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn issue_session_token(
    user_id: i32,
    settings: &SessionSettings,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(settings.expiration_hours);

    let claims = SessionClaims {
        sub: user_id.to_string(),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.expose_secret().as_bytes()),
    )
}

pub fn decode_session_token(
    token: &str,
    settings: &SessionSettings,
) -> Result<i32, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(settings.secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    token_data
        .claims
        .sub
        .parse::<i32>()
        .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject.into())
}

pub fn session_cookie(token: String, settings: &SessionSettings) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(settings.expiration_hours))
        .finish()
}

pub fn session_removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();
    cookie
}

/// Request-scoped view of who is asking. Anonymous when the cookie is
/// missing, forged or expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionContext {
    pub user_id: Option<i32>,
}

impl SessionContext {
    pub fn from_request_parts(req: &HttpRequest) -> Result<Self, SessionError> {
        let settings = req
            .app_data::<web::Data<SessionSettings>>()
            .ok_or(SessionError::MissingSettings)?;

        let user_id = req.cookie(SESSION_COOKIE).and_then(|cookie| {
            match decode_session_token(cookie.value(), settings) {
                Ok(user_id) => Some(user_id),
                Err(e) => {
                    tracing::debug!("Ignoring invalid session cookie: {}", e);
                    None
                }
            }
        });

        Ok(Self { user_id })
    }
}

impl FromRequest for SessionContext {
    type Error = SessionError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_request_parts(req))
    }
}

/// Extractor for protected pages: resolves to the user id or redirects to
/// `/login`.
#[derive(Debug, Clone, Copy)]
pub struct SignedInUser {
    pub user_id: i32,
}

impl FromRequest for SignedInUser {
    type Error = SessionError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = SessionContext::from_request_parts(req).and_then(|context| {
            context
                .user_id
                .map(|user_id| SignedInUser { user_id })
                .ok_or(SessionError::Anonymous)
        });
        ready(result)
    }
}
