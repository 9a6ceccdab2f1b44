//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{LinkService, ResolverService, TopicService};
use crate::infrastructure::persistence::{PgLinkRepository, PgTopicRepository};

/// Concrete service types wired over PostgreSQL.
pub type PgTopicService = TopicService<PgTopicRepository>;
pub type PgLinkService = LinkService<PgLinkRepository, PgTopicRepository>;
pub type PgResolverService = ResolverService<PgLinkRepository>;

/// Application state cloned into every request.
///
/// Everything is behind `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub topic_service: Arc<PgTopicService>,
    pub link_service: Arc<PgLinkService>,
    pub resolver_service: Arc<PgResolverService>,
}

impl AppState {
    /// Builds repositories and services over `pool`.
    ///
    /// `prefix` is the short link prefix (e.g. `jet.fuel`).
    pub fn new(pool: Arc<PgPool>, prefix: &str) -> Self {
        let topic_repository = Arc::new(PgTopicRepository::new(pool.clone()));
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

        Self {
            topic_service: Arc::new(TopicService::new(topic_repository.clone())),
            link_service: Arc::new(LinkService::new(link_repository.clone(), topic_repository)),
            resolver_service: Arc::new(ResolverService::new(link_repository, prefix)),
            pool,
        }
    }

    /// The prefix short links are served under.
    pub fn prefix(&self) -> &str {
        self.resolver_service.prefix()
    }
}
