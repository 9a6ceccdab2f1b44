//! PostgreSQL implementation of topic repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTopic, Topic};
use crate::domain::repositories::TopicRepository;
use crate::error::AppError;

/// PostgreSQL repository for topics.
pub struct PgTopicRepository {
    pool: Arc<PgPool>,
}

impl PgTopicRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    async fn create(&self, new_topic: NewTopic) -> Result<Topic, AppError> {
        let topic = sqlx::query_as::<_, Topic>(
            "INSERT INTO topics (name) VALUES ($1) RETURNING id, name",
        )
        .bind(new_topic.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(topic)
    }

    async fn list(&self) -> Result<Vec<Topic>, AppError> {
        let topics = sqlx::query_as::<_, Topic>("SELECT id, name FROM topics")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(topics)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Topic>, AppError> {
        let topic = sqlx::query_as::<_, Topic>("SELECT id, name FROM topics WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(topic)
    }
}
