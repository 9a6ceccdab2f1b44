#![allow(dead_code)]

use axum_test::TestServer;
use jet_fuel::config::DEFAULT_SHORT_LINK_PREFIX;
use jet_fuel::infrastructure::persistence::reseed;
use jet_fuel::routes::router;
use jet_fuel::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Replaces the database contents with the demo data.
///
/// Topics: `1 Docs`, `2 Social`. Links 1-2 belong to topic 1, 3-4 to topic 2.
pub async fn seed(pool: &PgPool) {
    reseed(pool).await.unwrap();
}

pub async fn create_test_topic(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO topics (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_link(
    pool: &PgPool,
    short_link: &str,
    long_link: &str,
    click_count: i64,
    topic_id: i64,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO links (link_title, long_link, short_link, click_count, topic_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(format!("title for {short_link}"))
    .bind(long_link)
    .bind(short_link)
    .bind(click_count)
    .bind(topic_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn click_count_of(pool: &PgPool, short_link: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_link = $1")
        .bind(short_link)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), DEFAULT_SHORT_LINK_PREFIX)
}

/// Full application router over `pool`.
pub fn create_test_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

/// Full application router over `pool` after loading the demo data.
pub async fn create_seeded_server(pool: PgPool) -> TestServer {
    seed(&pool).await;
    create_test_server(pool)
}
