use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Numeric, Text, Unsigned};

use crate::schema::order_detail;

/// `ps_orders` joined with its customer and delivery address.
#[derive(Debug, Clone, Queryable)]
pub struct OrderListingRow {
    pub id_order: u32,
    pub reference: Option<String>,
    pub total_paid: BigDecimal,
    pub date_add: NaiveDateTime,
    pub current_state: u32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub address1: String,
    pub city: String,
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_detail)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderDetailRow {
    pub product_name: String,
    pub product_quantity: u32,
    pub product_price: BigDecimal,
    pub product_reference: Option<String>,
}

#[derive(Debug, Clone, Queryable)]
pub struct GroupRow {
    pub id_group: u32,
    pub name: String,
}

/// One row of the raw group price query.
#[derive(Debug, Clone, QueryableByName)]
pub struct PriceRow {
    #[diesel(sql_type = Unsigned<Integer>)]
    pub id_product: u32,
    #[diesel(sql_type = Text)]
    pub product_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub reference: Option<String>,
    #[diesel(sql_type = Nullable<Numeric>)]
    pub price: Option<BigDecimal>,
}
