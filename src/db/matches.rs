use sqlx::{PgPool, Postgres, Transaction};

use crate::models::football_match::{Match, NewMatch};
use crate::models::stats::MonthlyCount;

const MATCH_COLUMNS: &str =
    "id, home_team, away_team, home_team_result, away_team_result, date, location";

pub async fn insert_match(
    tx: &mut Transaction<'_, Postgres>,
    new_match: &NewMatch,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO matches (home_team, away_team, home_team_result, away_team_result, date, location)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&new_match.home_team)
    .bind(&new_match.away_team)
    .bind(new_match.home_team_result)
    .bind(new_match.away_team_result)
    .bind(new_match.date)
    .bind(&new_match.location)
    .fetch_one(&mut **tx)
    .await
}

pub async fn get_all_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(&format!("SELECT {} FROM matches ORDER BY id", MATCH_COLUMNS))
        .fetch_all(pool)
        .await
}

pub async fn get_match_by_id(pool: &PgPool, match_id: i32) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(&format!("SELECT {} FROM matches WHERE id = $1", MATCH_COLUMNS))
        .bind(match_id)
        .fetch_optional(pool)
        .await
}

/// Highest match id, i.e. the most recently created match.
pub async fn get_latest_match_id(pool: &PgPool) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar("SELECT MAX(id) FROM matches")
        .fetch_one(pool)
        .await
}

pub async fn get_match_years(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT DISTINCT EXTRACT(YEAR FROM date)::INT AS year
        FROM matches
        WHERE date IS NOT NULL
        ORDER BY year
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_matches_per_month(pool: &PgPool, year: i32) -> Result<Vec<MonthlyCount>, sqlx::Error> {
    sqlx::query_as::<_, MonthlyCount>(
        r#"
        SELECT EXTRACT(MONTH FROM date)::INT AS month, COUNT(id) AS count
        FROM matches
        WHERE EXTRACT(YEAR FROM date)::INT = $1
        GROUP BY month
        ORDER BY month
        "#,
    )
    .bind(year)
    .fetch_all(pool)
    .await
}
