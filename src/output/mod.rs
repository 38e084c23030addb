//! Module defining the serialization of the ranked views into the published report files.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{Money, REVENUE_LABEL, StoreId, StoreState};
use crate::error::{Error, output_write};


/// Upper bound of product rows per store file.
const MAX_PRODUCT_ROWS: usize = 100;

// The published header lines spell the column names with spaced-out
// characters; both are kept verbatim.
const STORE_REPORT_HEADER: &str = "c o d e _ m a g a s i n | C A";
const PRODUCT_REPORT_HEADER: &str =
    "c o d e _ m a g a s i n | i d e n t i f i a n t _ p r o d u i t | C A";

#[derive(Serialize)]
struct StoreRow<'a> {
    store: &'a str,
    revenue: Money,
}

#[derive(Serialize)]
struct ProductRow<'a> {
    store: &'a str,
    product: &'a str,
    revenue: Money,
}

/// Writes the store revenue report: the header line, then one
/// `store_id|revenue` row per entry, in the given order. An existing file at
/// `path` is overwritten.
pub fn write_store_report(stores: &[(&StoreId, &StoreState)], path: &Path) -> Result<(), Error> {
    let mut writer = report_writer(path)?;

    writer
        .write_record([STORE_REPORT_HEADER])
        .map_err(|e| output_write(path, e))?;

    for (store_id, state) in stores {
        writer
            .serialize(StoreRow {
                store: store_id.as_str(),
                revenue: state.revenue(),
            })
            .map_err(|e| output_write(path, e))?;
    }

    writer.flush().map_err(|e| output_write(path, e))?;
    Ok(())
}

/// Writes one product report per store into `dir` (created if absent), in the
/// given store order. Existing files are overwritten.
///
/// Each file holds the header line, then up to 100 `store_id|product_id|revenue`
/// rows in product first-seen order. Rows whose product id equals the revenue
/// column label are omitted. The revenue column repeats the store total on
/// every row, as the published schema does.
pub fn write_product_reports(
    stores: &[(&StoreId, &StoreState)],
    dir: &Path,
) -> Result<(), Error> {
    std::fs::create_dir_all(dir).map_err(|e| output_write(dir, e))?;

    for (store_id, state) in stores {
        let path = product_report_path(dir, store_id);
        write_product_report(store_id, state, &path)?;
    }
    Ok(())
}

fn write_product_report(
    store_id: &StoreId,
    state: &StoreState,
    path: &Path,
) -> Result<(), Error> {
    let mut writer = report_writer(path)?;

    writer
        .write_record([PRODUCT_REPORT_HEADER])
        .map_err(|e| output_write(path, e))?;

    let revenue = state.revenue();
    let products = state
        .products()
        .filter(|(id, _)| id.as_str() != REVENUE_LABEL)
        .take(MAX_PRODUCT_ROWS);

    for (product_id, _count) in products {
        writer
            .serialize(ProductRow {
                store: store_id.as_str(),
                product: product_id.as_str(),
                revenue,
            })
            .map_err(|e| output_write(path, e))?;
    }

    writer.flush().map_err(|e| output_write(path, e))?;
    Ok(())
}

/// The report file path for one store's product report.
pub fn product_report_path(dir: &Path, store_id: &StoreId) -> PathBuf {
    dir.join(format!("top-100-products-store-{store_id}.csv"))
}

// Reports are pipe-delimited and never quoted; headers are written by hand
// since they are not a delimiter join of the column names. The writer must
// be flexible: the header is a single field, the data rows are not.
fn report_writer(path: &Path) -> Result<csv::Writer<File>, Error> {
    csv::WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(csv::QuoteStyle::Never)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| output_write(path, e))
}
