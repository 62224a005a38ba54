// src/routes/auth.rs
use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::config::session::SessionSettings;
use crate::handlers::auth_handler::{login_page, login_user, logout_user};
use crate::models::auth::LoginForm;

#[get("/login")]
async fn login_form() -> HttpResponse {
    login_page().await
}

#[post("/login")]
async fn login(
    form: web::Form<LoginForm>,
    pool: web::Data<PgPool>,
    session_settings: web::Data<SessionSettings>
) -> HttpResponse {
    login_user(form, pool, session_settings).await
}

#[get("/logout")]
async fn logout() -> HttpResponse {
    logout_user().await
}
