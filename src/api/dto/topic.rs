//! DTOs for topic endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Topic, TopicDraft};

/// Body of `POST /api/v1/topics`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTopicRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CreateTopicRequest> for TopicDraft {
    fn from(request: CreateTopicRequest) -> Self {
        TopicDraft { name: request.name }
    }
}

#[derive(Debug, Serialize)]
pub struct TopicItem {
    pub id: i64,
    pub name: String,
}

impl From<Topic> for TopicItem {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            name: topic.name,
        }
    }
}
