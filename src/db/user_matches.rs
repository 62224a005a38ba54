use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::stats::PlayerTotals;
use crate::models::user_match::StatLine;

pub async fn insert_user_match<'e, E>(
    executor: E,
    user_id: i32,
    match_id: i32,
    stats: &StatLine,
) -> Result<i32, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar(
        r#"
        INSERT INTO user_match (
            user_id, match_id, goals, shots, shots_on_target,
            passes, fouls, yellow_cards, red_cards
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(match_id)
    .bind(stats.goals)
    .bind(stats.shots)
    .bind(stats.shots_on_target)
    .bind(stats.passes)
    .bind(stats.fouls)
    .bind(stats.yellow_cards)
    .bind(stats.red_cards)
    .fetch_one(executor)
    .await
}

/// Per-player sums over every stat row. The inner join leaves out players
/// that have no rows at all.
pub async fn get_player_totals(pool: &PgPool) -> Result<Vec<PlayerTotals>, sqlx::Error> {
    sqlx::query_as::<_, PlayerTotals>(
        r#"
        SELECT
            u.id AS user_id,
            u.first_name,
            u.last_name,
            COALESCE(SUM(um.goals), 0)::BIGINT AS total_goals,
            COALESCE(SUM(um.shots), 0)::BIGINT AS total_shots,
            COALESCE(SUM(um.shots_on_target), 0)::BIGINT AS total_shots_on_target,
            COALESCE(SUM(um.passes), 0)::BIGINT AS total_passes,
            COALESCE(SUM(um.fouls), 0)::BIGINT AS total_fouls,
            COALESCE(SUM(um.yellow_cards), 0)::BIGINT AS total_yellow_cards,
            COALESCE(SUM(um.red_cards), 0)::BIGINT AS total_red_cards
        FROM users u
        JOIN user_match um ON u.id = um.user_id
        GROUP BY u.id, u.first_name, u.last_name
        ORDER BY u.id
        "#,
    )
    .fetch_all(pool)
    .await
}
