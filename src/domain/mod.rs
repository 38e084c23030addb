//! Module for the types defining the store aggregation domain.

use std::fmt;

mod store;
mod transaction;

pub use store::StoreState;
pub use transaction::Transaction;

pub type Money = rust_decimal::Decimal;

/// Label of the revenue column in the published reports. A product id equal
/// to this label is skipped both as a ranking key and as a report row.
pub(crate) const REVENUE_LABEL: &str = "CA";

/// Id identifying the store a transaction was recorded in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Id identifying a sold product.
#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
