use csv::ReaderBuilder;
use tracing::debug;

use super::BatchRow;
use crate::common::{QRError, QRResult};

/// Column holding the payload of each row.
pub const DATA_COLUMN: &str = "data";

/// Parses CSV text with a header row and collects the `data` field of every record.
pub fn read_rows(bytes: &[u8]) -> QRResult<Vec<BatchRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let col = rdr
        .headers()?
        .iter()
        .position(|h| h == DATA_COLUMN)
        .ok_or(QRError::MissingColumn)?;
    debug!(col, "Found data column");

    rdr.records()
        .map(|rec| {
            let rec = rec?;
            let data = rec.get(col).unwrap_or_default().to_string();
            Ok(BatchRow { data })
        })
        .collect()
}
