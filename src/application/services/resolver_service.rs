//! Short link resolution and click accounting.
//!
//! Two paths touch a link's counter:
//!
//! - **Resolution** (`GET /<prefix>/<code>`): the hot path. One atomic
//!   statement finds the link, bumps its counter by one and returns the
//!   destination.
//! - **Click report** (`PUT /api/v1/links/clickCountIncr`): an administrative
//!   path. The client reports the count it has observed and the store records
//!   one click on top of the larger of the stored and reported values, so the
//!   counter never moves backwards.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{MAX_CLICK_COUNT, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Raw click report as received from a client.
#[derive(Debug, Clone, Default, Validate)]
pub struct ClickReport {
    /// Full short link key, e.g. `jet.fuel/5ZvQv`.
    #[validate(required, length(min = 1))]
    pub short_link_text: Option<String>,

    /// Count observed by the client. Absent means `0`.
    #[validate(range(min = 0, max = MAX_CLICK_COUNT))]
    pub click_count: Option<i64>,
}

/// Resolves short codes to destinations and maintains click counters.
///
/// Holds no counter state of its own; every call goes to the store.
pub struct ResolverService<L: LinkRepository> {
    link_repository: Arc<L>,
    prefix: String,
}

impl<L: LinkRepository> ResolverService<L> {
    /// Creates a resolver for short links under `prefix` (e.g. `jet.fuel`).
    pub fn new(link_repository: Arc<L>, prefix: impl Into<String>) -> Self {
        Self {
            link_repository,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolves `code` to its destination and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link is stored under
    /// `<prefix>/<code>`.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let short_link = ShortLink::new(&self.prefix, code)
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        match self
            .link_repository
            .resolve_and_count(short_link.as_str())
            .await?
        {
            Some(long_link) => {
                tracing::debug!(short_link = %short_link, %long_link, "Resolved short link");
                Ok(long_link)
            }
            None => {
                tracing::debug!(short_link = %short_link, "Short link not found");
                Err(AppError::not_found("Short link not found"))
            }
        }
    }

    /// Records one click for the link named in `report`.
    ///
    /// The stored counter becomes `max(stored, reported) + 1`. Returns the new
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `short_link_text` is missing or
    /// `click_count` is outside `0..=MAX_CLICK_COUNT`.
    /// Returns [`AppError::NotFound`] if no link matches `short_link_text`.
    pub async fn increment_click_count(&self, report: ClickReport) -> Result<i64, AppError> {
        report.validate()?;

        let short_link = report.short_link_text.unwrap_or_default();
        let reported = report.click_count.unwrap_or(0);

        let click_count = self
            .link_repository
            .record_click(&short_link, reported)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))?;

        tracing::info!(%short_link, reported, click_count, "Click count updated");

        Ok(click_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .withf(|short_link| short_link == "jet.fuel/2H1PG")
            .times(1)
            .returning(|_| Ok(Some("http://www.twitter.com/".to_string())));

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let destination = service.resolve("2H1PG").await.unwrap();
        assert_eq!(destination, "http://www.twitter.com/");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .times(1)
            .returning(|_| Ok(None));

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let err = service.resolve("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_empty_code_skips_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_resolve_and_count().times(0);

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let err = service.resolve("").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_propagates_store_error() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_resolve_and_count()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error")));

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let err = service.resolve("2H1PG").await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_increment_click_count() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .withf(|short_link, reported| short_link == "jet.fuel/5ZvQv" && *reported == 9)
            .times(1)
            .returning(|_, reported| Ok(Some(reported.max(3) + 1)));

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let click_count = service
            .increment_click_count(ClickReport {
                short_link_text: Some("jet.fuel/5ZvQv".to_string()),
                click_count: Some(9),
            })
            .await
            .unwrap();

        assert_eq!(click_count, 10);
    }

    #[tokio::test]
    async fn test_increment_click_count_defaults_reported_to_zero() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .withf(|_, reported| *reported == 0)
            .times(1)
            .returning(|_, _| Ok(Some(4)));

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let click_count = service
            .increment_click_count(ClickReport {
                short_link_text: Some("jet.fuel/5ZvQv".to_string()),
                click_count: None,
            })
            .await
            .unwrap();

        assert_eq!(click_count, 4);
    }

    #[tokio::test]
    async fn test_increment_click_count_unknown_link() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_record_click()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let err = service
            .increment_click_count(ClickReport {
                short_link_text: Some("jet.fuel/missing".to_string()),
                click_count: Some(1),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_increment_click_count_rejects_bad_report() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_record_click().times(0);

        let service = ResolverService::new(Arc::new(mock_repo), "jet.fuel");

        let missing = service
            .increment_click_count(ClickReport::default())
            .await
            .unwrap_err();
        assert!(matches!(missing, AppError::Validation { .. }));

        let negative = service
            .increment_click_count(ClickReport {
                short_link_text: Some("jet.fuel/5ZvQv".to_string()),
                click_count: Some(-2),
            })
            .await
            .unwrap_err();
        assert!(matches!(negative, AppError::Validation { .. }));

        let huge = service
            .increment_click_count(ClickReport {
                short_link_text: Some("jet.fuel/5ZvQv".to_string()),
                click_count: Some(i64::MAX),
            })
            .await
            .unwrap_err();
        assert!(matches!(huge, AppError::Validation { .. }));
    }
}
