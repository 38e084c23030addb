//! Ranked views derived from a finished aggregation.

use crate::domain::{REVENUE_LABEL, StoreId, StoreState};
use crate::engine::Aggregation;

/// How many stores the revenue report keeps.
pub const TOP_STORE_COUNT: usize = 50;

/// The `limit` stores with the highest revenue, descending.
///
/// The sort is stable: stores with equal revenue keep their encounter order.
/// Fewer than `limit` entries are returned when the aggregation holds fewer
/// stores.
pub fn top_stores_by_revenue(
    aggregation: &Aggregation,
    limit: usize,
) -> Vec<(&StoreId, &StoreState)> {
    let mut entries: Vec<_> = aggregation.stores().collect();
    entries.sort_by(|(_, a), (_, b)| b.revenue().cmp(&a.revenue()));
    entries.truncate(limit);
    entries
}

/// All stores, ordered descending by the first product id recorded for each
/// store; a product id equal to the revenue label is skipped when picking
/// the key. Stores without such a product sort last.
///
/// The key is an arbitrary string, not a product metric; the ordering is kept
/// as published.
pub fn stores_by_leading_product(aggregation: &Aggregation) -> Vec<(&StoreId, &StoreState)> {
    let mut entries: Vec<_> = aggregation.stores().collect();
    entries.sort_by(|(_, a), (_, b)| {
        let key_a = a.first_product_except(REVENUE_LABEL);
        let key_b = b.first_product_except(REVENUE_LABEL);
        key_b.cmp(&key_a)
    });
    entries
}
