//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs deserialize with every field optional and are converted into
//! domain drafts; the services decide what is missing.

pub mod click_count;
pub mod health;
pub mod link;
pub mod topic;
