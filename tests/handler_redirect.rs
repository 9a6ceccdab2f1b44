mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test]
async fn test_redirect_counts_click(pool: PgPool) {
    let server = common::create_seeded_server(pool.clone()).await;

    let before = common::click_count_of(&pool, "jet.fuel/2H1PG").await;

    let response = server.get("/jet.fuel/2H1PG").await;
    response.assert_status(StatusCode::FOUND);

    let after = common::click_count_of(&pool, "jet.fuel/2H1PG").await;
    assert_eq!(after, before + 1);
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = common::create_seeded_server(pool).await;

    let response = server.get("/jet.fuel/unknown").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["code"], "not_found");
}

#[sqlx::test]
async fn test_redirect_uses_prefix(pool: PgPool) {
    let server = common::create_seeded_server(pool.clone()).await;

    server.get("/other.prefix/2H1PG").await.assert_status_not_found();
    server.get("/2H1PG").await.assert_status_not_found();

    assert_eq!(common::click_count_of(&pool, "jet.fuel/2H1PG").await, 5);
}

#[sqlx::test]
async fn test_redirect_with_custom_prefix(pool: PgPool) {
    let topic_id = common::create_test_topic(&pool, "Go").await;
    common::create_test_link(&pool, "go/docs", "https://docs.rs", 0, topic_id).await;

    let state = jet_fuel::state::AppState::new(std::sync::Arc::new(pool), "go");
    let server = axum_test::TestServer::new(jet_fuel::routes::router(state)).unwrap();

    let response = server.get("/go/docs").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://docs.rs");
}
