//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and click accounting.
///
/// Counter updates are single `UPDATE ... RETURNING` statements; PostgreSQL's
/// row lock serializes concurrent writers of the same link. Resolution
/// saturates at the `BIGINT` maximum so a link stays reachable.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (link_title, long_link, short_link, click_count, topic_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, link_title, long_link, short_link, click_count, topic_id
            "#,
        )
        .bind(new_link.link_title)
        .bind(new_link.long_link)
        .bind(new_link.short_link)
        .bind(new_link.click_count)
        .bind(new_link.topic_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            "SELECT id, link_title, long_link, short_link, click_count, topic_id FROM links",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn list_by_topic(&self, topic_id: i64) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT id, link_title, long_link, short_link, click_count, topic_id
            FROM links
            WHERE topic_id = $1
            "#,
        )
        .bind(topic_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn resolve_and_count(&self, short_link: &str) -> Result<Option<String>, AppError> {
        let long_link = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE links
            SET click_count = CASE
                WHEN click_count < 9223372036854775807 THEN click_count + 1
                ELSE click_count
            END
            WHERE short_link = $1
            RETURNING long_link
            "#,
        )
        .bind(short_link)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(long_link)
    }

    async fn record_click(&self, short_link: &str, reported: i64) -> Result<Option<i64>, AppError> {
        let click_count = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE links
            SET click_count = GREATEST(click_count, $2) + 1
            WHERE short_link = $1
            RETURNING click_count
            "#,
        )
        .bind(short_link)
        .bind(reported)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(click_count)
    }
}
