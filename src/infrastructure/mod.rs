//! Infrastructure layer for external integrations.
//!
//! Implements the store contracts defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
