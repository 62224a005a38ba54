use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::session::{SessionContext, SignedInUser};
use crate::db::helpers::database_failure;
use crate::db::matches::{get_all_matches, get_match_years, get_matches_per_month};
use crate::db::user_matches::get_player_totals;
use crate::models::stats::MonthlyCount;
use crate::stats::{order_current_user_first, win_rate_report};
use crate::views::{layout::html, pages};

#[derive(Debug, Deserialize)]
pub struct PlayTimeQuery {
    // Kept textual so that a malformed year yields an empty list, not a 400
    pub year: Option<String>,
}

#[tracing::instrument(name = "Win rate report", skip(pool, user), fields(user_id = user.user_id))]
pub async fn win_rate_page(pool: web::Data<PgPool>, user: SignedInUser) -> HttpResponse {
    let matches = match get_all_matches(&pool).await {
        Ok(matches) => matches,
        Err(e) => return database_failure(e),
    };

    let report = win_rate_report(&matches);
    tracing::debug!(
        matches = matches.len(),
        overall = report.overall_win_rate,
        "Computed win rates"
    );
    html(HttpResponse::Ok(), pages::win_rate(&report))
}

#[tracing::instrument(name = "Player totals", skip(pool))]
pub async fn get_stats(pool: web::Data<PgPool>, session: SessionContext) -> HttpResponse {
    match get_player_totals(&pool).await {
        Ok(rows) => HttpResponse::Ok().json(order_current_user_first(rows, session.user_id)),
        Err(e) => database_failure(e),
    }
}

#[tracing::instrument(name = "Match years", skip(pool))]
pub async fn get_years(pool: web::Data<PgPool>) -> HttpResponse {
    match get_match_years(&pool).await {
        Ok(years) => HttpResponse::Ok().json(years),
        Err(e) => database_failure(e),
    }
}

#[tracing::instrument(name = "Matches per month", skip(pool))]
pub async fn get_play_time_data(
    query: web::Query<PlayTimeQuery>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    let year = match query.year.as_deref().and_then(|y| y.trim().parse::<i32>().ok()) {
        Some(year) => year,
        None => return HttpResponse::Ok().json(Vec::<MonthlyCount>::new()),
    };

    match get_matches_per_month(&pool, year).await {
        Ok(months) => HttpResponse::Ok().json(months),
        Err(e) => database_failure(e),
    }
}
