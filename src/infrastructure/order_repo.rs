use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderLineItem, PageWindow};
use crate::domain::ports::OrderRepository;
use crate::schema::{address, customer, order_detail, orders};

use super::models::{OrderDetailRow, OrderListingRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl From<OrderListingRow> for Order {
    fn from(row: OrderListingRow) -> Self {
        Order {
            id: row.id_order,
            reference: row.reference.unwrap_or_default(),
            total_paid: row.total_paid,
            date_added: row.date_add,
            current_state: row.current_state,
            customer_first_name: row.firstname,
            customer_last_name: row.lastname,
            customer_email: row.email,
            delivery_address: row.address1,
            city: row.city,
            postal_code: row.postcode.unwrap_or_default(),
        }
    }
}

impl From<OrderDetailRow> for OrderLineItem {
    fn from(row: OrderDetailRow) -> Self {
        OrderLineItem {
            product_name: row.product_name,
            product_reference: row.product_reference.unwrap_or_default(),
            quantity: row.product_quantity,
            unit_price: row.product_price,
        }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn fetch_orders(&self, window: PageWindow) -> Result<Vec<Order>, DomainError> {
        if window.limit <= 0 || window.offset < 0 {
            return Err(DomainError::InvalidInput(format!(
                "invalid page window {:?}",
                window
            )));
        }
        let mut conn = self.pool.get()?;

        let rows: Vec<OrderListingRow> = orders::table
            .inner_join(customer::table)
            .inner_join(address::table)
            .select((
                orders::id_order,
                orders::reference,
                orders::total_paid,
                orders::date_add,
                orders::current_state,
                customer::firstname,
                customer::lastname,
                customer::email,
                address::address1,
                address::city,
                address::postcode,
            ))
            .order(orders::date_add.desc())
            .limit(window.limit)
            .offset(window.offset)
            .load(&mut conn)?;

        log::debug!("Fetched {} orders for {:?}", rows.len(), window);
        Ok(rows.into_iter().map(Order::from).collect())
    }

    fn fetch_line_items(&self, order_id: u32) -> Result<Vec<OrderLineItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_detail::table
            .filter(order_detail::id_order.eq(order_id))
            .select(OrderDetailRow::as_select())
            .load(&mut conn)?;

        log::debug!("Fetched {} line items for order {}", rows.len(), order_id);
        Ok(rows.into_iter().map(OrderLineItem::from).collect())
    }
}
