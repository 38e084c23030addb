//! Module defining the running totals kept per store

use std::collections::{HashMap, hash_map::Entry};

use crate::domain::{Money, ProductId};

/// The accumulated state of a single store: its revenue so far and how often
/// each product was sold. Product ids are also kept in first-seen order,
/// which the ranked views and the report rows iterate in.
#[derive(Debug, Default)]
pub struct StoreState {
    revenue: Money,
    product_counts: HashMap<ProductId, u64>,
    product_order: Vec<ProductId>,
}

impl StoreState {
    /// Folds one sale into the store: bumps the product's count and adds the
    /// price to the revenue. Every sale contributes its price exactly once.
    pub(crate) fn record_sale(&mut self, product_id: ProductId, price: Money) {
        match self.product_counts.entry(product_id) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                self.product_order.push(entry.key().clone());
                entry.insert(1);
            }
        }
        self.revenue += price;
    }

    pub fn revenue(&self) -> Money {
        self.revenue
    }

    /// Number of times the given product was sold in this store.
    pub fn product_count(&self, product_id: &ProductId) -> u64 {
        self.product_counts.get(product_id).copied().unwrap_or(0)
    }

    pub fn distinct_products(&self) -> usize {
        self.product_order.len()
    }

    /// Products with their counts, in the order they were first seen.
    pub fn products(&self) -> impl Iterator<Item = (&ProductId, u64)> {
        self.product_order.iter().map(|id| {
            let count = self
                .product_counts
                .get(id)
                .copied()
                .expect("every ordered product id has a count");
            (id, count)
        })
    }

    /// The first product seen in this store whose id differs from `excluded`.
    pub fn first_product_except(&self, excluded: &str) -> Option<&ProductId> {
        self.product_order.iter().find(|id| id.as_str() != excluded)
    }
}
