//! DTOs for the click counter endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::application::services::resolver_service::ClickReport;

/// Confirmation text returned by `PUT /api/v1/links/clickCountIncr`.
pub const CLICK_COUNT_RESPONSE: &str = "click_count successfully incremented";

/// Body of `PUT /api/v1/links/clickCountIncr`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickCountRequest {
    #[serde(default)]
    pub short_link_text: Option<String>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub click_count: Option<i64>,
}

impl From<ClickCountRequest> for ClickReport {
    fn from(request: ClickCountRequest) -> Self {
        ClickReport {
            short_link_text: request.short_link_text,
            click_count: request.click_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClickCountResponse {
    pub response: &'static str,
    pub click_count: i64,
}

impl ClickCountResponse {
    pub fn new(click_count: i64) -> Self {
        Self {
            response: CLICK_COUNT_RESPONSE,
            click_count,
        }
    }
}
