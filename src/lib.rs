mod config;
mod domain;
mod engine;
mod error;
mod input;
mod output;
mod telemetry;

use std::fs::File;
use std::io::{BufRead, BufReader};

pub use config::Config;
pub use domain::{Money, ProductId, StoreId, StoreState};
pub use engine::{
    Aggregation, TOP_STORE_COUNT, aggregate, stores_by_leading_product, top_stores_by_revenue,
};
pub use error::Error;
pub use output::{product_report_path, write_product_reports, write_store_report};
pub use telemetry::setup_logging;

/// Runs the full reporting pipeline described by `config`.
///
/// Opens the transaction log, skips its header line, folds the remaining
/// lines into an in-memory aggregation in bounded batches, and writes the
/// two reports: the 50 stores with highest revenue, and one product
/// frequency file per store.
///
/// # Error handling
///
/// The pipeline has no recovery path: the first malformed record, price that
/// does not parse, or I/O failure aborts the run with the corresponding
/// [`Error`]. A run either writes both reports or leaves no consistent
/// output behind.
///
/// # Example
///
/// ```no_run
/// use clap::Parser;
/// use store_report_rs::{Config, run, setup_logging};
///
/// setup_logging().unwrap();
///
/// let config = Config::parse();
/// if let Err(e) = run(&config) {
///     eprintln!("run failed: {e}");
/// }
/// ```
pub fn run(config: &Config) -> Result<(), Error> {
    let file = File::open(&config.input_path)?;
    let mut reader = BufReader::new(file);

    // the first line is the column header, not data
    let mut header = String::new();
    reader.read_line(&mut header)?;

    tracing::info!(input = %config.input_path.display(), "processing data");
    let aggregation = aggregate(reader, config.chunk_size_bytes)?;

    tracing::info!(
        stores = aggregation.store_count(),
        records = aggregation.record_count(),
        "sorting data"
    );
    let top_stores = top_stores_by_revenue(&aggregation, TOP_STORE_COUNT);
    let product_order = stores_by_leading_product(&aggregation);

    tracing::info!("saving data to csv");
    write_store_report(&top_stores, &config.store_report_path())?;
    write_product_reports(&product_order, &config.output_product_dir)?;

    Ok(())
}
