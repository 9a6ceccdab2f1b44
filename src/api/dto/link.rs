//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::domain::entities::{Link, LinkDraft};

/// Body of `POST /api/v1/links`.
///
/// `click_count` and `topic_id` accept either a JSON number or a numeric
/// string, e.g. `"click_count": "0"`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub link_title: Option<String>,

    #[serde(default)]
    pub long_link: Option<String>,

    #[serde(default)]
    pub short_link: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub click_count: Option<i64>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub topic_id: Option<i64>,
}

impl From<CreateLinkRequest> for LinkDraft {
    fn from(request: CreateLinkRequest) -> Self {
        LinkDraft {
            link_title: request.link_title,
            long_link: request.long_link,
            short_link: request.short_link,
            click_count: request.click_count,
            topic_id: request.topic_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub link_title: String,
    pub long_link: String,
    pub short_link: String,
    pub click_count: i64,
    pub topic_id: i64,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            link_title: link.link_title,
            long_link: link.long_link,
            short_link: link.short_link,
            click_count: link.click_count,
            topic_id: link.topic_id,
        }
    }
}
