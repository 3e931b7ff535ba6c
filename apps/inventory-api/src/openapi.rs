//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Inventory items backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for the service.
///
/// Item routes live at the root, so the domain document is merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}
