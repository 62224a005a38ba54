// src/handlers/auth_handler.rs
use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::session::{issue_session_token, redirect_to, session_cookie, session_removal_cookie};
use crate::config::session::SessionSettings;
use crate::db::users::get_user_by_email;
use crate::models::auth::LoginForm;
use crate::utils::password::verify_password;
use crate::views::{layout::html, pages};

const INVALID_CREDENTIALS: &str = "Invalid email or password.";

pub async fn login_page() -> HttpResponse {
    html(HttpResponse::Ok(), pages::login(None))
}

#[tracing::instrument(
    name = "Login user attempt",
    skip(login_form, pool, session_settings),
    fields(
        email = %login_form.email
    )
)]
pub async fn login_user(
    login_form: web::Form<LoginForm>,
    pool: web::Data<PgPool>,
    session_settings: web::Data<SessionSettings>
) -> HttpResponse {
    let user = match get_user_by_email(pool.get_ref(), &login_form.email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::info!("User not found or invalid credentials");
            return html(HttpResponse::Ok(), pages::login(Some(INVALID_CREDENTIALS)));
        }
        Err(e) => {
            tracing::error!("Database error occurred: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    if !verify_password(login_form.password.expose_secret(), &user.password) {
        tracing::info!("Invalid password");
        return html(HttpResponse::Ok(), pages::login(Some(INVALID_CREDENTIALS)));
    }

    let token = match issue_session_token(user.id, &session_settings) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Error generating session token: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    tracing::info!(user_id = user.id, "User logged in");
    let mut response = redirect_to("/");
    if let Err(e) = response.add_cookie(&session_cookie(token, &session_settings)) {
        tracing::error!("Failed to attach session cookie: {:?}", e);
        return HttpResponse::InternalServerError().finish();
    }
    response
}

pub async fn logout_user() -> HttpResponse {
    let mut response = redirect_to("/login");
    if let Err(e) = response.add_removal_cookie(&session_removal_cookie()) {
        tracing::error!("Failed to clear session cookie: {:?}", e);
    }
    response
}
