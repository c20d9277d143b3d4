mod archive;
mod table;

pub use archive::zip_files;
pub use table::{read_rows, DATA_COLUMN};

use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};

use crate::builder::generate_qr_code;
use crate::common::{QRError, QRResult, Style};

// Batch types
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BatchRow {
    pub data: String,
}

impl From<&str> for BatchRow {
    fn from(data: &str) -> Self {
        Self { data: data.to_string() }
    }
}

#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// Number of images written
    pub count: usize,
    /// Entry names, in row order
    pub files: Vec<String>,
    /// Zip archive holding every image
    pub archive: Vec<u8>,
}

pub fn file_name(row: usize) -> String {
    format!("qr_{row}.png")
}

// Batch driver
//------------------------------------------------------------------------------

/// Encodes every row with the shared `style` and writes `qr_{row}.png` into `dir`.
///
/// Stops at the first failing row; its index is attached to the error.
pub fn write_batch<I>(dir: &Path, rows: I, style: Style) -> QRResult<Vec<PathBuf>>
where
    I: IntoIterator<Item = BatchRow>,
{
    style.validate()?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let img = generate_qr_code(&row.data, style, None).map_err(|e| e.at_row(i))?;
            let path = dir.join(file_name(i));
            img.save_with_format(&path, ImageFormat::Png)
                .map_err(|e| QRError::ImageEncode(e).at_row(i))?;
            debug!(row = i, path = %path.display(), "Wrote QR code");
            Ok(path)
        })
        .collect()
}

/// Runs a batch inside a temporary directory and returns the zipped results.
///
/// The directory and everything written to it is removed before returning,
/// whether the batch succeeded or not.
pub fn run_batch<I>(rows: I, style: Style) -> QRResult<BatchOutput>
where
    I: IntoIterator<Item = BatchRow>,
{
    run_batch_in(&std::env::temp_dir(), rows, style)
}

/// Same as [`run_batch`] with the temporary directory created under `parent`.
pub fn run_batch_in<I>(parent: &Path, rows: I, style: Style) -> QRResult<BatchOutput>
where
    I: IntoIterator<Item = BatchRow>,
{
    let dir = tempfile::Builder::new().prefix("qrstudio-batch-").tempdir_in(parent)?;
    debug!(dir = %dir.path().display(), "Created batch directory");

    let paths = write_batch(dir.path(), rows, style)?;
    let files: Vec<String> = (0..paths.len()).map(file_name).collect();
    let archive = zip_files(files.iter().map(String::as_str).zip(paths.iter().map(PathBuf::as_path)))?;

    info!(count = paths.len(), archive_len = archive.len(), "Batch QR codes generated");
    Ok(BatchOutput { count: paths.len(), files, archive })
}
