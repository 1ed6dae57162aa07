use super::errors::DomainError;
use super::order::{Order, OrderLineItem, PageWindow};
use super::pricing::{CustomerGroup, PriceObservation};

pub trait OrderRepository: Send + Sync + 'static {
    /// Orders for `window`, newest `date_add` first.
    fn fetch_orders(&self, window: PageWindow) -> Result<Vec<Order>, DomainError>;
    fn fetch_line_items(&self, order_id: u32) -> Result<Vec<OrderLineItem>, DomainError>;
}

pub trait PricingRepository: Send + Sync + 'static {
    fn fetch_groups(&self) -> Result<Vec<CustomerGroup>, DomainError>;
    /// Ordered by product, then variant, then specific price row.
    fn fetch_price_observations(&self, group_id: u32)
        -> Result<Vec<PriceObservation>, DomainError>;
}
