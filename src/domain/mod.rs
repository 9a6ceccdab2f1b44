//! Domain layer containing business entities and store contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define the contract the store must honour and are
//! implemented in [`crate::infrastructure::persistence`].
//!
//! - [`entities`] - Topics, links and short link keys
//! - [`repositories`] - Store traits
//!
//! # Click Accounting
//!
//! Click counters are never cached in process. Every change goes through a
//! single atomic statement in the store, so concurrent redirects of the same
//! short link cannot lose updates.

pub mod entities;
pub mod repositories;
