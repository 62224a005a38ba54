use serde_json::{json, Value};

mod common;
use common::utils::{browser, create_player, spawn_app, spawn_app_without_db};

fn full_stats() -> Value {
    json!({
        "goals": 1,
        "shots": 4,
        "shots_on_target": 2,
        "passes": 30,
        "fouls": 1,
        "yellow_cards": 0,
        "red_cards": 0
    })
}

#[tokio::test]
async fn save_stats_without_user_id_returns_400() {
    let test_app = spawn_app_without_db().await;
    let client = browser();

    let response = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "stats": full_stats() }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body, json!({ "error": "Missing data" }));
}

#[tokio::test]
async fn save_stats_without_stats_returns_400() {
    let test_app = spawn_app_without_db().await;
    let client = browser();

    let response = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": 1 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn save_stats_with_incomplete_stats_returns_json_400() {
    let test_app = spawn_app_without_db().await;
    let client = browser();

    let response = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": 1, "stats": { "goals": 2 } }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.expect("Body should be JSON");
    assert!(body.get("error").is_some());
}

#[tokio::test]
#[ignore = "requires a running Postgres (configuration/base.yml)"]
async fn save_stats_for_unknown_user_returns_404() {
    let test_app = spawn_app().await;
    let client = browser();

    let response = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": 9999, "stats": full_stats() }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
#[ignore = "requires a running Postgres (configuration/base.yml)"]
async fn save_stats_without_any_match_returns_404() {
    let test_app = spawn_app().await;
    let client = browser();
    let (_, user_id) = create_player(&test_app, "Bob", "Smith", 7).await;

    let response = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": user_id, "stats": full_stats() }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["error"], "No matches found");
}

async fn insert_match(test_app: &common::utils::TestApp, home: i32, away: i32) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO matches (home_team, away_team, home_team_result, away_team_result, date, location) \
         VALUES ('Team A', 'Team B', $1, $2, '2024-05-18', 'StadiumX') RETURNING id",
    )
    .bind(home)
    .bind(away)
    .fetch_one(&test_app.db_pool)
    .await
    .expect("Failed to insert match.")
}

#[tokio::test]
#[ignore = "requires a running Postgres (configuration/base.yml)"]
async fn save_stats_attaches_to_the_requested_or_latest_match() {
    let test_app = spawn_app().await;
    let client = browser();
    let (_, user_id) = create_player(&test_app, "Bob", "Smith", 7).await;
    let first_match = insert_match(&test_app, 1, 0).await;
    let latest_match = insert_match(&test_app, 2, 2).await;

    let explicit = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": user_id, "match_id": first_match, "stats": full_stats() }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, explicit.status().as_u16());
    let body: Value = explicit.json().await.expect("Body should be JSON");
    assert_eq!(body["message"], "Stats saved successfully!");

    let implicit = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": user_id, "stats": full_stats() }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, implicit.status().as_u16());

    let match_ids: Vec<i32> = sqlx::query_scalar(
        "SELECT match_id FROM user_match WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(&test_app.db_pool)
    .await
    .expect("Failed to fetch stat rows.");
    assert_eq!(match_ids, vec![first_match, latest_match]);
}

#[tokio::test]
#[ignore = "requires a running Postgres (configuration/base.yml)"]
async fn save_stats_for_unknown_match_returns_404() {
    let test_app = spawn_app().await;
    let client = browser();
    let (_, user_id) = create_player(&test_app, "Bob", "Smith", 7).await;
    insert_match(&test_app, 1, 0).await;

    let response = client
        .post(&format!("{}/saveStats", &test_app.address))
        .json(&json!({ "user_id": user_id, "match_id": 4242, "stats": full_stats() }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let body: Value = response.json().await.expect("Body should be JSON");
    assert_eq!(body["error"], "Match not found");
}
