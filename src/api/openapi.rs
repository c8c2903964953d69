//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::list_handler;
use crate::domain::{NewRecord, Record, RecordPatch};
use crate::types::EmptyObject;

/// OpenAPI documentation for the list service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "crud-list",
        version = "0.1.0",
        description = "CRUD service for contact list records. Every response is a {msg, code, data?} envelope with HTTP 200; `code` carries 200, 400 or 500.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        list_handler::add_record,
        list_handler::delete_record,
        list_handler::update_record,
        list_handler::list_by_name,
        list_handler::list_records,
    ),
    components(
        schemas(Record, NewRecord, RecordPatch, EmptyObject)
    ),
    tags(
        (name = "List", description = "Contact list record operations")
    )
)]
pub struct ApiDoc;
