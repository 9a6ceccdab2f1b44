//! Business logic services for the application layer.

pub mod link_service;
pub mod resolver_service;
pub mod topic_service;

pub use link_service::LinkService;
pub use resolver_service::ResolverService;
pub use topic_service::TopicService;
