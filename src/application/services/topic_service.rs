//! Topic creation and listing service.

use std::sync::Arc;

use crate::domain::entities::{Topic, TopicDraft};
use crate::domain::repositories::TopicRepository;
use crate::error::AppError;

pub struct TopicService<T: TopicRepository> {
    topic_repository: Arc<T>,
}

impl<T: TopicRepository> TopicService<T> {
    pub fn new(topic_repository: Arc<T>) -> Self {
        Self { topic_repository }
    }

    /// Validates and stores a new topic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the missing-field message if
    /// `name` is absent or empty. Nothing is written in that case.
    pub async fn create_topic(&self, draft: TopicDraft) -> Result<Topic, AppError> {
        let new_topic = draft.into_new_topic()?;

        let topic = self.topic_repository.create(new_topic).await?;
        tracing::info!(topic_id = topic.id, name = %topic.name, "Topic created");

        Ok(topic)
    }

    /// Returns every topic, unordered.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, AppError> {
        self.topic_repository.list().await
    }
}
