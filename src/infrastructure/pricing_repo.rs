use diesel::prelude::*;
use diesel::sql_types::{Integer, Unsigned};

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::PricingRepository;
use crate::domain::pricing::{CustomerGroup, PriceObservation};
use crate::schema::{customer_group, group_lang};

use super::models::{GroupRow, PriceRow};

// NOTE: raw SQL, the specific price join matches on product OR variant.
// Reference groups are built in the order of this ORDER BY.
const PRICE_OBSERVATIONS_SQL: &str = "\
SELECT p.id_product, pl.name AS product_name, \
       IFNULL(pa.reference, p.reference) AS reference, \
       sp.price \
FROM ps_product p \
JOIN ps_product_lang pl ON p.id_product = pl.id_product \
LEFT JOIN ps_product_attribute pa ON p.id_product = pa.id_product \
LEFT JOIN ps_specific_price sp \
       ON (p.id_product = sp.id_product OR pa.id_product_attribute = sp.id_product_attribute) \
      AND sp.id_group = ? \
WHERE pl.id_lang = ? \
ORDER BY p.id_product, pa.id_product_attribute, sp.id_specific_price";

pub struct DieselPricingRepository {
    pool: DbPool,
    lang_id: u32,
}

impl DieselPricingRepository {
    pub fn new(pool: DbPool, lang_id: u32) -> Self {
        Self { pool, lang_id }
    }
}

impl From<PriceRow> for PriceObservation {
    fn from(row: PriceRow) -> Self {
        PriceObservation {
            product_id: row.id_product,
            product_name: row.product_name,
            effective_reference: row.reference,
            price: row.price,
        }
    }
}

impl PricingRepository for DieselPricingRepository {
    fn fetch_groups(&self) -> Result<Vec<CustomerGroup>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<GroupRow> = customer_group::table
            .inner_join(group_lang::table)
            .filter(group_lang::id_lang.eq(self.lang_id))
            .select((customer_group::id_group, group_lang::name))
            .load(&mut conn)?;

        log::debug!("Fetched {} customer groups", rows.len());
        Ok(rows
            .into_iter()
            .map(|g| CustomerGroup {
                id: g.id_group,
                name: g.name,
            })
            .collect())
    }

    fn fetch_price_observations(
        &self,
        group_id: u32,
    ) -> Result<Vec<PriceObservation>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<PriceRow> = diesel::sql_query(PRICE_OBSERVATIONS_SQL)
            .bind::<Unsigned<Integer>, _>(group_id)
            .bind::<Unsigned<Integer>, _>(self.lang_id)
            .load(&mut conn)?;

        log::debug!(
            "Fetched {} price observations for group {}",
            rows.len(),
            group_id
        );
        Ok(rows.into_iter().map(PriceObservation::from).collect())
    }
}
