//! Application layer services implementing business logic.
//!
//! Services validate input before touching the store, then delegate to the
//! repository traits. HTTP handlers only talk to services.
//!
//! # Available Services
//!
//! - [`services::topic_service::TopicService`] - Topic creation and listing
//! - [`services::link_service::LinkService`] - Link creation and listing
//! - [`services::resolver_service::ResolverService`] - Short link resolution and click accounting

pub mod services;
