use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub reference: String,
    pub total_paid: BigDecimal,
    pub date_added: NaiveDateTime,
    pub current_state: u32,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_email: String,
    pub delivery_address: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineItem {
    pub product_name: String,
    pub product_reference: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
}

/// A `LIMIT`/`OFFSET` pair. Only the paginator changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

/// The orders shown for one window. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPage {
    pub window: PageWindow,
    pub orders: Vec<Order>,
}

impl CurrentPage {
    pub fn empty(window: PageWindow) -> Self {
        Self {
            window,
            orders: Vec::new(),
        }
    }

    pub fn find(&self, order_id: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }
}
