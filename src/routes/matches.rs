use std::collections::HashMap;

use actix_web::{get, post, web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::SignedInUser;
use crate::handlers::match_handler;
use crate::models::user_match::SaveStatsRequest;

#[get("/addMatches")]
async fn add_match_form(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    user: SignedInUser,
) -> HttpResponse {
    match_handler::add_match_page(req, pool, user).await
}

#[post("/addMatches")]
async fn add_match(
    user: SignedInUser,
    form: web::Form<HashMap<String, String>>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match_handler::add_match(form, pool, user).await
}

#[get("/getMatches")]
async fn get_matches(pool: web::Data<PgPool>) -> HttpResponse {
    match_handler::get_matches(pool).await
}

#[post("/saveStats")]
async fn save_stats(
    request: web::Json<SaveStatsRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match_handler::save_stats(request, pool).await
}
