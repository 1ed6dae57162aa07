use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerGroup {
    pub id: u32,
    pub name: String,
}

/// One row of the group price join.
///
/// `effective_reference` is the variant reference when the row has a variant,
/// otherwise the product reference. `price` is `None` when the group has no
/// specific price for the row.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceObservation {
    pub product_id: u32,
    pub product_name: String,
    pub effective_reference: Option<String>,
    pub price: Option<BigDecimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceReferenceGroup {
    pub effective_reference: String,
    pub product_name: String,
    pub prices: Vec<Option<BigDecimal>>,
}
