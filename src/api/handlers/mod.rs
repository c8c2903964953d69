//! HTTP request handlers.

pub mod list_handler;

pub use list_handler::list_routes;
