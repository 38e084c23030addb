//! Module defining the chunked reading of the transaction log and the parsing of individual records into validated domain types.

use std::io::BufRead;

use crate::domain::{Money, ProductId, StoreId, Transaction};
use crate::error::Error;


/// Iterator turning a text source into batches of complete lines.
///
/// Lines are accumulated until the number of bytes read reaches `chunk_size`;
/// the trailing line is always completed, so a batch may overshoot the
/// threshold by up to one line and a line is never split across batches.
/// Yielded lines have their terminators stripped. Iteration ends when the
/// source is exhausted; an empty batch is never yielded. The source is
/// consumed once.
pub(crate) struct LineBatches<R> {
    reader: R,
    chunk_size: usize,
    done: bool,
}

impl<R: BufRead> LineBatches<R> {
    pub(crate) fn new(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk_size,
            done: false,
        }
    }

    fn next_batch(&mut self) -> Result<Vec<String>, Error> {
        let mut batch = Vec::new();
        let mut bytes_read = 0;

        loop {
            let mut line = String::new();
            let read = self.reader.read_line(&mut line)?;
            if read == 0 {
                self.done = true;
                break;
            }
            bytes_read += read;

            let end = line.trim_end_matches(['\r', '\n']).len();
            line.truncate(end);
            batch.push(line);

            if bytes_read >= self.chunk_size {
                break;
            }
        }

        Ok(batch)
    }
}

impl<R: BufRead> Iterator for LineBatches<R> {
    type Item = Result<Vec<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_batch() {
            Ok(batch) if batch.is_empty() => None,
            Ok(batch) => Some(Ok(batch)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Parses one pipe-delimited record.
///
/// A record carries exactly 6 fields; the product id, store id, and price sit
/// at indices 2, 3, and 5. Any other arity is fatal. `record` is the 1-based
/// position of the line within the data portion of the log, used for error
/// context.
pub(crate) fn parse_record(line: &str, record: u64) -> Result<Transaction, Error> {
    let fields: Vec<&str> = line.split('|').collect();
    let [_, _, product_id, store_id, _, price] = fields[..] else {
        return Err(Error::MalformedRecord {
            record,
            fields: fields.len(),
        });
    };

    let price: Money = price.trim().parse().map_err(|_| Error::PriceParse {
        record,
        value: price.to_string(),
    })?;

    Ok(Transaction::new(
        ProductId::new(product_id),
        StoreId::new(store_id),
        price,
    ))
}
