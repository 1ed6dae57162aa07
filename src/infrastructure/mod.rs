pub mod models;
pub mod order_repo;
pub mod pricing_repo;

#[cfg(test)]
pub(crate) mod test_support;

pub use order_repo::DieselOrderRepository;
pub use pricing_repo::DieselPricingRepository;

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::DataSource(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::DataSource(e.to_string())
    }
}
