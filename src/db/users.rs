use sqlx::PgPool;

use crate::models::user::{NewUser, User, UserSummary};

pub async fn insert_user(pool: &PgPool, user: &NewUser) -> Result<i32, sqlx::Error> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO users (first_name, last_name, email, number, password)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(user.number)
    .bind(&user.password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    Ok(id)
}

pub async fn get_all_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, number, password FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_user_summaries(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
    sqlx::query_as::<_, UserSummary>("SELECT id, last_name FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_user_ids(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query_scalar("SELECT id FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_user_by_id(pool: &PgPool, user_id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, number, password FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, number, password FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_number(pool: &PgPool, number: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, first_name, last_name, email, number, password FROM users WHERE number = $1 LIMIT 1",
    )
    .bind(number)
    .fetch_optional(pool)
    .await
}
