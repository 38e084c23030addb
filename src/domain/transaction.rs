//! Module defining the domain type representing a single transaction line

use crate::domain::{Money, ProductId, StoreId};

/// One sale extracted from a transaction log line: which product was sold in
/// which store, and at which price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    product_id: ProductId,
    store_id: StoreId,
    price: Money,
}

impl Transaction {
    pub(crate) fn new(product_id: ProductId, store_id: StoreId, price: Money) -> Self {
        Self {
            product_id,
            store_id,
            price,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub(crate) fn into_parts(self) -> (StoreId, ProductId, Money) {
        (self.store_id, self.product_id, self.price)
    }
}
