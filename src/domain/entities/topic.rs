//! Topic entity.

use validator::Validate;

/// A named category grouping related links.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Topic {
    pub id: i64,
    pub name: String,
}

impl Topic {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

/// Validated input for inserting a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub name: String,
}

/// Raw topic input as received from a client.
#[derive(Debug, Clone, Default, Validate)]
pub struct TopicDraft {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

impl TopicDraft {
    /// Validates the draft and converts it into a [`NewTopic`].
    pub fn into_new_topic(self) -> Result<NewTopic, validator::ValidationErrors> {
        self.validate()?;

        Ok(NewTopic {
            name: self.name.unwrap_or_default(),
        })
    }
}
