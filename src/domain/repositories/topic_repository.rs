//! Repository trait for topic data access.

use crate::domain::entities::{NewTopic, Topic};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing topics.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTopicRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Inserts a topic and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_topic: NewTopic) -> Result<Topic, AppError>;

    /// Returns every topic. No ordering is guaranteed.
    async fn list(&self) -> Result<Vec<Topic>, AppError>;

    /// Finds a topic by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Topic))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Topic>, AppError>;
}
