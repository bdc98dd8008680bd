//! OpenAPI specification definition for the cafe API.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Drinks
        crate::cafe::routes::drinks::get_drinks,
        crate::cafe::routes::drinks::get_drinks_detail,
        crate::cafe::routes::drinks::create_drink,
        crate::cafe::routes::drinks::update_drink,
        crate::cafe::routes::drinks::delete_drink,
        // OpenAPI
        crate::cafe::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::cafe::models::Drink,
        crate::cafe::models::DrinkSummary,
        crate::cafe::models::Ingredient,
        crate::cafe::models::ShortIngredient,
        crate::cafe::routes::drinks::DrinkPayload,
        crate::cafe::routes::drinks::RecipeInput,
        crate::cafe::routes::drinks::MenuResponse,
        crate::cafe::routes::drinks::DrinkDetailResponse,
        crate::cafe::routes::drinks::DeleteDrinkResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Drinks", description = "Drink CRUD with permission scopes"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Cafe API",
        description = "REST API for the coffee-shop drink menu",
        version = "1.0.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8082", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();

        if openapi.components.is_none() {
            openapi.components = Some(utoipa::openapi::Components::new());
        }

        let components = openapi.components.as_mut().unwrap();
        use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
