pub mod aggregator;
pub mod formatter;
pub mod order_browser;
pub mod paginator;
pub mod pricing_browser;
pub mod search;
pub mod transcript;
