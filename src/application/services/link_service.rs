//! Link creation and listing service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkDraft};
use crate::domain::repositories::{LinkRepository, TopicRepository};
use crate::error::AppError;

/// Service for creating and listing links.
///
/// Creation validates the payload and checks that the referenced topic
/// exists before anything is written.
pub struct LinkService<L: LinkRepository, T: TopicRepository> {
    link_repository: Arc<L>,
    topic_repository: Arc<T>,
}

impl<L: LinkRepository, T: TopicRepository> LinkService<L, T> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, topic_repository: Arc<T>) -> Self {
        Self {
            link_repository,
            topic_repository,
        }
    }

    /// Validates and stores a new link.
    ///
    /// `click_count` defaults to `0` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - a required field is missing or empty (missing-field message)
    /// - `topic_id` does not reference an existing topic
    ///
    /// Returns [`AppError::Conflict`] if the short link is already taken.
    pub async fn create_link(&self, draft: LinkDraft) -> Result<Link, AppError> {
        let new_link = draft.into_new_link()?;

        if self
            .topic_repository
            .find_by_id(new_link.topic_id)
            .await?
            .is_none()
        {
            return Err(AppError::validation(format!(
                "Topic with id {} does not exist.",
                new_link.topic_id
            )));
        }

        let link = self.link_repository.create(new_link).await?;
        tracing::info!(
            link_id = link.id,
            short_link = %link.short_link,
            topic_id = link.topic_id,
            "Link created"
        );

        Ok(link)
    }

    /// Returns every link, unordered.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Returns the links of one topic.
    ///
    /// An unknown topic yields an empty list, not an error.
    pub async fn list_links_by_topic(&self, topic_id: i64) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_by_topic(topic_id).await
    }
}
