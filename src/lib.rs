//! crud-list - CRUD HTTP service for contact list records
//!
//! Exposes create, delete, update, lookup-by-name and paginated listing over
//! a single `list` table, answering every request with a uniform
//! `{msg, code, data?}` JSON envelope.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Record entity and its create/update payloads
//! - **services**: Record use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Response envelope and pagination
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewRecord, Record, RecordPatch};
pub use errors::{AppError, AppResult};
