//! Link entity representing a shortened URL mapping.

use validator::Validate;

/// Largest click count a client may set or report.
///
/// Keeps every later `+ 1` on the counter far away from the `BIGINT` limit.
pub const MAX_CLICK_COUNT: i64 = i32::MAX as i64;

/// A short link belonging to a topic.
///
/// `short_link` holds the full public key (`<prefix>/<code>`), not just the
/// code. `click_count` only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub link_title: String,
    pub long_link: String,
    pub short_link: String,
    pub click_count: i64,
    pub topic_id: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        link_title: String,
        long_link: String,
        short_link: String,
        click_count: i64,
        topic_id: i64,
    ) -> Self {
        Self {
            id,
            link_title,
            long_link,
            short_link,
            click_count,
            topic_id,
        }
    }
}

/// Validated input for inserting a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub link_title: String,
    pub long_link: String,
    pub short_link: String,
    pub click_count: i64,
    pub topic_id: i64,
}

/// Raw link input as received from a client.
///
/// Every field is optional here so that a missing field surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Validate)]
pub struct LinkDraft {
    #[validate(required, length(min = 1))]
    pub link_title: Option<String>,

    #[validate(required, length(min = 1))]
    pub long_link: Option<String>,

    #[validate(required, length(min = 1))]
    pub short_link: Option<String>,

    #[validate(range(min = 0, max = MAX_CLICK_COUNT))]
    pub click_count: Option<i64>,

    #[validate(required)]
    pub topic_id: Option<i64>,
}

impl LinkDraft {
    /// Validates the draft and converts it into a [`NewLink`].
    ///
    /// `click_count` defaults to `0` and must lie in `0..=MAX_CLICK_COUNT`.
    pub fn into_new_link(self) -> Result<NewLink, validator::ValidationErrors> {
        self.validate()?;

        Ok(NewLink {
            link_title: self.link_title.unwrap_or_default(),
            long_link: self.long_link.unwrap_or_default(),
            short_link: self.short_link.unwrap_or_default(),
            click_count: self.click_count.unwrap_or(0),
            topic_id: self.topic_id.unwrap_or_default(),
        })
    }
}
