//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! bound at runtime and rows are mapped with `sqlx::FromRow`.
//!
//! # Repositories
//!
//! - [`PgTopicRepository`] - Topic storage and retrieval
//! - [`PgLinkRepository`] - Link storage, retrieval and click accounting

pub mod pg_link_repository;
pub mod pg_topic_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_topic_repository::PgTopicRepository;

use sqlx::PgPool;

/// Demo data loaded by `admin seed` and by the seeded integration tests.
pub const DEMO_SEED: &str = include_str!("../../../seeds/demo.sql");

/// Empties both tables, restarts their identities and loads [`DEMO_SEED`].
///
/// Runs in a single transaction so a failed seed leaves the previous data in
/// place.
pub async fn reseed(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE links, topics RESTART IDENTITY CASCADE")
        .execute(&mut *tx)
        .await?;

    sqlx::raw_sql(DEMO_SEED).execute(&mut *tx).await?;

    tx.commit().await
}
