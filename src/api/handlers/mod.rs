//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod not_found;
pub mod redirect;
pub mod topics;

pub use health::health_handler;
pub use links::{click_count_handler, create_link_handler, link_list_handler, topic_links_handler};
pub use not_found::not_found_handler;
pub use redirect::redirect_handler;
pub use topics::{create_topic_handler, topic_list_handler};

