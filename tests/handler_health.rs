mod common;

use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_check_healthy(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"]["status"], "ok");
    assert!(json["version"].is_string());
}

