use actix_web::{get, route, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::SignedInUser;
use crate::handlers::page_handler;

#[get("/")]
async fn home(user: SignedInUser) -> HttpResponse {
    page_handler::home(user).await
}

#[get("/playtime")]
async fn playtime(user: SignedInUser) -> HttpResponse {
    page_handler::playtime(user).await
}

#[route("/stats", method = "GET", method = "POST")]
async fn stats(user: SignedInUser) -> HttpResponse {
    page_handler::stats(user).await
}

#[route("/matchHistory", method = "GET", method = "POST")]
async fn match_history(user: SignedInUser) -> HttpResponse {
    page_handler::match_history(user).await
}

#[get("/profile")]
async fn profile(pool: web::Data<PgPool>, user: SignedInUser) -> HttpResponse {
    page_handler::profile(pool, user).await
}
