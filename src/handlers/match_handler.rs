use std::collections::HashMap;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::auth::flash::{clear_flash, redirect_with_flash, take_flash, Flash};
use crate::auth::session::{redirect_to, SignedInUser};
use crate::db::helpers::{database_failure, json_error, require_record};
use crate::db::matches::{get_all_matches, get_latest_match_id, get_match_by_id, insert_match};
use crate::db::user_matches::insert_user_match;
use crate::db::users::{get_all_users, get_user_by_id, get_user_ids};
use crate::models::user_match::{SaveStatsRequest, StatLine};
use crate::validation::match_form::{parse_match_form, MatchForm};
use crate::views::{layout::html, pages};

#[tracing::instrument(name = "Render add match form", skip(req, pool, user), fields(user_id = user.user_id))]
pub async fn add_match_page(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    user: SignedInUser,
) -> HttpResponse {
    let players = match get_all_users(&pool).await {
        Ok(players) => players,
        Err(e) => return database_failure(e),
    };
    let flash = take_flash(&req).map(|flash| flash.message());

    let mut builder = HttpResponse::Ok();
    clear_flash(&mut builder);
    html(builder, pages::add_match(&players, flash.as_deref()))
}

/// Create one match plus a stat row for every registered player, all in one
/// transaction. Nothing is written unless the whole form is valid.
#[tracing::instrument(name = "Add match", skip(form, pool, user), fields(user_id = user.user_id))]
pub async fn add_match(
    form: web::Form<HashMap<String, String>>,
    pool: web::Data<PgPool>,
    user: SignedInUser,
) -> HttpResponse {
    let user_ids = match get_user_ids(&pool).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("Failed to load players: {:?}", e);
            return redirect_with_flash("/addMatches", Flash::MatchForm);
        }
    };

    let match_form = match parse_match_form(&form, &user_ids) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::info!(problems = ?e.problems, "Match form rejected");
            return redirect_with_flash("/addMatches", Flash::MatchForm);
        }
    };

    match store_match(&pool, &match_form).await {
        Ok(match_id) => {
            tracing::info!(match_id, players = match_form.player_stats.len(), "Match recorded");
            redirect_to("/")
        }
        Err(e) => {
            tracing::error!("Failed to store match: {:?}", e);
            redirect_with_flash("/addMatches", Flash::MatchForm)
        }
    }
}

async fn store_match(pool: &PgPool, match_form: &MatchForm) -> Result<i32, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let match_id = insert_match(&mut tx, &match_form.new_match).await?;
    for (user_id, stats) in &match_form.player_stats {
        insert_user_match(&mut *tx, *user_id, match_id, stats).await?;
    }

    tx.commit().await?;
    Ok(match_id)
}

async fn store_stats(
    pool: &PgPool,
    user_id: i32,
    match_id: i32,
    stats: &StatLine,
) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    insert_user_match(&mut *tx, user_id, match_id, stats).await?;
    tx.commit().await
}

#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn get_matches(pool: web::Data<PgPool>) -> HttpResponse {
    match get_all_matches(&pool).await {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => database_failure(e),
    }
}

/// Attach one player's numbers to a match.
///
/// Without an explicit `match_id` the most recently created match is used.
/// That fallback races with concurrent match creation.
#[tracing::instrument(
    name = "Save player stats",
    skip(request, pool),
    fields(user_id = ?request.user_id, match_id = ?request.match_id)
)]
pub async fn save_stats(
    request: web::Json<SaveStatsRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    let request = request.into_inner();
    let (user_id, stats) = match (request.user_id, request.stats) {
        (Some(user_id), Some(stats)) => (user_id, stats),
        _ => return json_error(HttpResponse::BadRequest(), "Missing data"),
    };

    if let Err(response) = require_record(get_user_by_id(&pool, user_id).await, "User not found") {
        return response;
    }

    let match_id = match request.match_id {
        Some(match_id) => match require_record(get_match_by_id(&pool, match_id).await, "Match not found") {
            Ok(found) => found.id,
            Err(response) => return response,
        },
        None => match get_latest_match_id(&pool).await {
            Ok(Some(latest)) => {
                tracing::warn!(match_id = latest, "No match_id supplied, using the latest match");
                latest
            }
            Ok(None) => return json_error(HttpResponse::NotFound(), "No matches found"),
            Err(e) => return database_failure(e),
        },
    };

    match store_stats(&pool, user_id, match_id, &stats).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Stats saved successfully!" })),
        Err(e) => {
            // The transaction is rolled back when dropped uncommitted
            tracing::error!("Failed to save stats: {:?}", e);
            json_error(HttpResponse::InternalServerError(), e.to_string())
        }
    }
}
