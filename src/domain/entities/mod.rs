//! Core domain entities.
//!
//! Entities are plain data structures. Each persisted entity comes with:
//! - a `New*` struct holding validated fields ready for insertion
//! - a `*Draft` struct holding the raw, possibly incomplete input that
//!   services validate before anything reaches the store
//!
//! # Entity Types
//!
//! - [`Topic`] - A named group of links
//! - [`Link`] - A short link with its destination and click counter
//! - [`ShortLink`] - The `<prefix>/<code>` lookup key of a link

pub mod link;
pub mod short_link;
pub mod topic;

pub use link::{Link, LinkDraft, MAX_CLICK_COUNT, NewLink};
pub use short_link::ShortLink;
pub use topic::{NewTopic, Topic, TopicDraft};
