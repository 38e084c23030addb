//! Module for the core aggregation logic of the reporter

use std::collections::HashMap;
use std::io::BufRead;

use tracing::info;

use crate::domain::{StoreId, StoreState};
use crate::error::Error;
use crate::input::LineBatches;

mod ranking;

pub use ranking::{TOP_STORE_COUNT, stores_by_leading_product, top_stores_by_revenue};

/// Batches are counted and a progress line is logged every this many.
const PROGRESS_BATCH_INTERVAL: usize = 1000;

/// The accumulator the whole transaction log is folded into: one
/// [`StoreState`] per store, plus the order in which stores were first seen.
///
/// Built incrementally, one line at a time, and never reset mid-run. Stores
/// iterate in encounter order, which makes every derived view deterministic
/// for a byte-identical input.
#[derive(Debug, Default)]
pub struct Aggregation {
    stores: HashMap<StoreId, StoreState>,
    order: Vec<StoreId>,
    records: u64,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a batch of transaction lines into the accumulator. Any
    /// malformed line aborts the fold; there is no recovery path.
    pub fn fold_batch(&mut self, batch: &[String]) -> Result<(), Error> {
        for line in batch {
            self.fold_line(line)?;
        }
        Ok(())
    }

    fn fold_line(&mut self, line: &str) -> Result<(), Error> {
        self.records += 1;
        let tx = crate::input::parse_record(line, self.records)?;
        let (store_id, product_id, price) = tx.into_parts();

        let state = match self.stores.entry(store_id) {
            std::collections::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            std::collections::hash_map::Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(StoreState::default())
            }
        };
        state.record_sale(product_id, price);
        Ok(())
    }

    pub fn store_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of transaction records folded so far.
    pub fn record_count(&self) -> u64 {
        self.records
    }

    pub fn get(&self, store_id: &StoreId) -> Option<&StoreState> {
        self.stores.get(store_id)
    }

    /// Stores with their state, in the order they were first seen.
    pub fn stores(&self) -> impl Iterator<Item = (&StoreId, &StoreState)> {
        self.order.iter().map(|id| {
            let state = self
                .stores
                .get(id)
                .expect("every ordered store id has a state");
            (id, state)
        })
    }
}

/// Reads the remaining input in bounded batches and folds every transaction
/// into a fresh [`Aggregation`].
///
/// The reader must be positioned after the header line. `chunk_size` is the
/// byte threshold per batch; a batch always completes its trailing line.
pub fn aggregate(reader: impl BufRead, chunk_size: usize) -> Result<Aggregation, Error> {
    let mut aggregation = Aggregation::new();

    for (batch_index, batch) in LineBatches::new(reader, chunk_size).enumerate() {
        if batch_index % PROGRESS_BATCH_INTERVAL == 0 {
            info!(batches = batch_index, "processing transaction batches");
        }
        aggregation.fold_batch(&batch?)?;
    }

    Ok(aggregation)
}
