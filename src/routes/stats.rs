use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::session::{SessionContext, SignedInUser};
use crate::handlers::stats_handler::{self, PlayTimeQuery};

#[get("/winRate")]
async fn win_rate(pool: web::Data<PgPool>, user: SignedInUser) -> HttpResponse {
    stats_handler::win_rate_page(pool, user).await
}

#[get("/getStats")]
async fn get_stats(pool: web::Data<PgPool>, session: SessionContext) -> HttpResponse {
    stats_handler::get_stats(pool, session).await
}

#[get("/getYears")]
async fn get_years(pool: web::Data<PgPool>) -> HttpResponse {
    stats_handler::get_years(pool).await
}

#[get("/getPlayTimeData")]
async fn get_play_time_data(
    query: web::Query<PlayTimeQuery>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    stats_handler::get_play_time_data(query, pool).await
}
