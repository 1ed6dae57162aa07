use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::pricing_browser::{PriceView, PricingBrowser, SurfaceStatus};
use crate::errors::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct GroupResponse {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GroupListResponse {
    pub items: Vec<GroupResponse>,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SelectionResponse {
    pub group_id: u32,
    pub status: SurfaceStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PriceListResponse {
    pub group_id: Option<u32>,
    pub status: SurfaceStatus,
    /// One paragraph per reference.
    pub blocks: Vec<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceSearchParams {
    /// Accent and case insensitive substring. Empty shows everything.
    #[serde(default)]
    pub q: String,
}

impl From<PriceView> for PriceListResponse {
    fn from(view: PriceView) -> Self {
        PriceListResponse {
            group_id: view.group_id,
            status: view.status,
            blocks: view.blocks,
            notice: view.notice,
        }
    }
}

/// GET /pricing/groups
#[utoipa::path(
    get,
    path = "/pricing/groups",
    responses(
        (status = 200, description = "Customer groups", body = GroupListResponse),
    ),
    tag = "pricing"
)]
pub async fn list_groups(browser: web::Data<PricingBrowser>) -> Result<HttpResponse, AppError> {
    let view = web::block(move || browser.groups()).await?;
    Ok(HttpResponse::Ok().json(GroupListResponse {
        items: view
            .groups
            .into_iter()
            .map(|g| GroupResponse {
                id: g.id,
                name: g.name,
            })
            .collect(),
        notice: view.notice,
    }))
}

/// POST /pricing/groups/{id}/prices
///
/// Starts loading the group's prices in the background. A newer selection
/// replaces this one; poll `GET /pricing/prices` for the result.
#[utoipa::path(
    post,
    path = "/pricing/groups/{id}/prices",
    params(
        ("id" = u32, Path, description = "Customer group id"),
    ),
    responses(
        (status = 202, description = "Fetch started", body = SelectionResponse),
    ),
    tag = "pricing"
)]
pub async fn select_group(
    browser: web::Data<PricingBrowser>,
    path: web::Path<u32>,
) -> HttpResponse {
    let group_id = path.into_inner();
    // Detached: the surface picks up the result.
    drop(browser.select_group(group_id));
    HttpResponse::Accepted().json(SelectionResponse {
        group_id,
        status: SurfaceStatus::Loading,
    })
}

/// GET /pricing/prices?q=
#[utoipa::path(
    get,
    path = "/pricing/prices",
    params(PriceSearchParams),
    responses(
        (status = 200, description = "Current price listing", body = PriceListResponse),
    ),
    tag = "pricing"
)]
pub async fn get_prices(
    browser: web::Data<PricingBrowser>,
    query: web::Query<PriceSearchParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(PriceListResponse::from(browser.view(&query.q)))
}
