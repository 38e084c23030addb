//! Module defining the run configuration recognized by the binary

use std::path::PathBuf;

use clap::Parser;

/// Aggregates a month of pipe-delimited transactions into revenue and
/// product-frequency reports.
#[derive(Debug, Parser)]
#[command(name = "store-report-rs", about = "Store revenue and product frequency reports", long_about = None)]
pub struct Config {
    /// Path to the pipe-delimited transaction log
    pub input_path: PathBuf,

    /// Byte threshold after which a read batch is cut (the trailing line is
    /// always completed)
    #[arg(long, default_value_t = 1_000_000)]
    pub chunk_size_bytes: usize,

    /// File name of the store revenue report; ".csv" is appended
    #[arg(long, default_value = "top-50-store")]
    pub output_store_filename: String,

    /// Directory receiving the per-store product reports
    #[arg(long, default_value = "top-products-by_store")]
    pub output_product_dir: PathBuf,
}

impl Config {
    /// Full path of the store revenue report file.
    pub fn store_report_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.csv", self.output_store_filename))
    }
}
