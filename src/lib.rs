pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use application::order_browser::OrderBrowser;
use application::pricing_browser::PricingBrowser;
use application::transcript::TranscriptLog;
use infrastructure::{DieselOrderRepository, DieselPricingRepository};

pub use config::AppConfig;
pub use db::{create_pool, DbPool};

/// Build and return an actix-web `Server` serving both screens.
///
/// Each screen gets its own state; they only share the connection pool.
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(pool: DbPool, config: &AppConfig) -> std::io::Result<actix_web::dev::Server> {
    let orders = web::Data::new(OrderBrowser::new(
        Arc::new(DieselOrderRepository::new(pool.clone())),
        TranscriptLog::new(config.transcript_path.clone()),
    ));
    let pricing = web::Data::new(PricingBrowser::new(Arc::new(
        DieselPricingRepository::new(pool, config.lang_id),
    )));

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(orders.clone())
            .app_data(pricing.clone())
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.clone(), config.port))?
    .run())
}
