//! Web page handlers.

pub mod index;

pub use index::index_handler;
