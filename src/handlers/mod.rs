pub mod orders;
pub mod pricing;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
pub struct ScreenLink {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChooserResponse {
    pub title: String,
    pub screens: Vec<ScreenLink>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        chooser,
        orders::list_orders,
        orders::next_page,
        orders::previous_page,
        orders::set_limit,
        orders::get_order,
        orders::transcribe_order,
        pricing::list_groups,
        pricing::select_group,
        pricing::get_prices,
    ),
    components(schemas(
        ChooserResponse,
        ScreenLink,
        orders::OrderPageResponse,
        orders::OrderSummaryResponse,
        orders::OrderDetailResponse,
        orders::TranscriptionResponse,
        pricing::GroupListResponse,
        pricing::GroupResponse,
        pricing::SelectionResponse,
        pricing::PriceListResponse,
    )),
    tags(
        (name = "orders", description = "Order browser"),
        (name = "pricing", description = "Customer group price browser"),
    )
)]
pub struct ApiDoc;

/// GET /
///
/// Lists the two screens.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Available screens", body = ChooserResponse),
    ),
    tag = "orders"
)]
pub async fn chooser() -> HttpResponse {
    HttpResponse::Ok().json(ChooserResponse {
        title: "Seleccione una aplicación".to_string(),
        screens: vec![
            ScreenLink {
                name: "App Pedidos".to_string(),
                path: "/orders".to_string(),
            },
            ScreenLink {
                name: "App Productos".to_string(),
                path: "/pricing/groups".to_string(),
            },
        ],
    })
}

pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Mount every route. Browser state is supplied by the caller as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(chooser))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/orders")
                .route("", web::get().to(orders::list_orders))
                .route("/next", web::post().to(orders::next_page))
                .route("/previous", web::post().to(orders::previous_page))
                .route("/limit/{limit}", web::put().to(orders::set_limit))
                .route("/{id}", web::get().to(orders::get_order))
                .route(
                    "/{id}/transcription",
                    web::post().to(orders::transcribe_order),
                ),
        )
        .service(
            web::scope("/pricing")
                .route("/groups", web::get().to(pricing::list_groups))
                .route(
                    "/groups/{id}/prices",
                    web::post().to(pricing::select_group),
                )
                .route("/prices", web::get().to(pricing::get_prices)),
        );
}
