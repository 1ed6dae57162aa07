use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::formatter::{format_money, format_order_summary};
use crate::application::order_browser::{OrderBrowser, OrderDetail, PageView};
use crate::errors::AppError;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryResponse {
    pub id: u32,
    pub reference: String,
    pub customer: String,
    pub total: String,
    pub date: String,
    pub current_state: u32,
    /// The list row as displayed.
    pub line: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPageResponse {
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<OrderSummaryResponse>,
    /// User-visible error notice; the page is empty when set.
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDetailResponse {
    pub id: u32,
    pub text: String,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptionResponse {
    pub id: u32,
    pub message: String,
}

impl From<PageView> for OrderPageResponse {
    fn from(view: PageView) -> Self {
        OrderPageResponse {
            limit: view.page.window.limit,
            offset: view.page.window.offset,
            items: view
                .page
                .orders
                .iter()
                .map(|o| OrderSummaryResponse {
                    id: o.id,
                    reference: o.reference.clone(),
                    customer: format!("{} {}", o.customer_first_name, o.customer_last_name),
                    total: format_money(&o.total_paid),
                    date: o.date_added.to_string(),
                    current_state: o.current_state,
                    line: format_order_summary(o),
                })
                .collect(),
            notice: view.notice,
        }
    }
}

impl From<OrderDetail> for OrderDetailResponse {
    fn from(detail: OrderDetail) -> Self {
        OrderDetailResponse {
            id: detail.order_id,
            text: detail.text,
            notice: detail.notice,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Fetches the current page again, newest orders first.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Current page of orders", body = OrderPageResponse),
    ),
    tag = "orders"
)]
pub async fn list_orders(browser: web::Data<OrderBrowser>) -> Result<HttpResponse, AppError> {
    let view = web::block(move || browser.refresh()).await?;
    Ok(HttpResponse::Ok().json(OrderPageResponse::from(view)))
}

/// POST /orders/next
#[utoipa::path(
    post,
    path = "/orders/next",
    responses(
        (status = 200, description = "Next page of orders", body = OrderPageResponse),
    ),
    tag = "orders"
)]
pub async fn next_page(browser: web::Data<OrderBrowser>) -> Result<HttpResponse, AppError> {
    let view = web::block(move || browser.next_page()).await?;
    Ok(HttpResponse::Ok().json(OrderPageResponse::from(view)))
}

/// POST /orders/previous
///
/// Never goes below offset 0.
#[utoipa::path(
    post,
    path = "/orders/previous",
    responses(
        (status = 200, description = "Previous page of orders", body = OrderPageResponse),
    ),
    tag = "orders"
)]
pub async fn previous_page(browser: web::Data<OrderBrowser>) -> Result<HttpResponse, AppError> {
    let view = web::block(move || browser.previous_page()).await?;
    Ok(HttpResponse::Ok().json(OrderPageResponse::from(view)))
}

/// PUT /orders/limit/{limit}
///
/// Changes the page size and returns to the first page.
#[utoipa::path(
    put,
    path = "/orders/limit/{limit}",
    params(
        ("limit" = i64, Path, description = "One of 50, 100, 150, 200"),
    ),
    responses(
        (status = 200, description = "First page with the new size", body = OrderPageResponse),
        (status = 400, description = "Limit not offered by the selector"),
    ),
    tag = "orders"
)]
pub async fn set_limit(
    browser: web::Data<OrderBrowser>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let limit = path.into_inner();
    let view = web::block(move || browser.set_limit(limit)).await??;
    Ok(HttpResponse::Ok().json(OrderPageResponse::from(view)))
}

/// GET /orders/{id}
///
/// Detail block of an order on the current page, with its line items.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = u32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Rendered order", body = OrderDetailResponse),
        (status = 404, description = "Order not on the current page"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    browser: web::Data<OrderBrowser>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let detail = web::block(move || browser.order_detail(order_id)).await??;
    Ok(HttpResponse::Ok().json(OrderDetailResponse::from(detail)))
}

/// POST /orders/{id}/transcription
///
/// Appends the order's detail block to the transcript file.
#[utoipa::path(
    post,
    path = "/orders/{id}/transcription",
    params(
        ("id" = u32, Path, description = "Order id"),
    ),
    responses(
        (status = 201, description = "Block appended", body = TranscriptionResponse),
        (status = 404, description = "Order not on the current page"),
        (status = 500, description = "Line items unavailable or transcript file not writable"),
    ),
    tag = "orders"
)]
pub async fn transcribe_order(
    browser: web::Data<OrderBrowser>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let detail = web::block(move || browser.transcribe(order_id)).await??;
    Ok(HttpResponse::Created().json(TranscriptionResponse {
        id: detail.order_id,
        message: "Pedido transcrito con éxito.".to_string(),
    }))
}
