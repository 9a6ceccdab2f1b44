//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links and their click counters.
///
/// Both counter operations must be atomic in the store: implementations may
/// not read the counter, modify it in memory and write it back.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short link already exists.
    /// Returns [`AppError::Validation`] if `topic_id` references no topic.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Returns every link. No ordering is guaranteed.
    async fn list(&self) -> Result<Vec<Link>, AppError>;

    /// Returns the links belonging to `topic_id`, empty if there are none.
    async fn list_by_topic(&self, topic_id: i64) -> Result<Vec<Link>, AppError>;

    /// Increments the click counter of the link keyed by `short_link` by one
    /// and returns its destination.
    ///
    /// Returns `Ok(None)` when no link matches.
    async fn resolve_and_count(&self, short_link: &str) -> Result<Option<String>, AppError>;

    /// Records one click on top of a client-reported count:
    /// `click_count = max(click_count, reported) + 1`.
    ///
    /// Returns the new counter value, or `Ok(None)` when no link matches.
    async fn record_click(&self, short_link: &str, reported: i64)
    -> Result<Option<i64>, AppError>;
}
