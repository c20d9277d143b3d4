use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum QRError {
    // Validation
    #[error("Please enter text or a URL.")]
    EmptyData,
    #[error("CSV must have a 'data' column.")]
    MissingColumn,
    #[error("Invalid color {0:?}, expected a hex value like #1a2b3c")]
    InvalidColor(String),
    #[error("Invalid error correction level {0:?}, expected one of L, M, Q, H")]
    InvalidECLevel(String),
    #[error("Invalid version {0}, expected 1 to 40")]
    InvalidVersion(u8),
    #[error("Invalid module size, must be at least 1 pixel")]
    InvalidModuleSize,
    #[error("Data too long to fit in a QR code")]
    DataTooLong,
    #[error("Image too large, side length must not exceed {} pixels", crate::common::MAX_IMAGE_SIZE)]
    ImageTooLarge,
    #[error("QR symbol could not be built: {0}")]
    Symbol(#[from] qrcode::types::QrError),

    // Decode
    #[error("Logo is not a readable image: {0}")]
    LogoDecode(#[source] image::ImageError),
    #[error("Uploaded file is not a readable image: {0}")]
    ImageDecode(#[source] image::ImageError),
    #[error("Malformed table: {0}")]
    Table(#[from] csv::Error),

    // Output
    #[error("Failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),
    #[error("Failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Batch
    #[error("Row {row}: {source}")]
    BatchRow {
        row: usize,
        #[source]
        source: Box<QRError>,
    },
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ErrorKind {
    /// Missing or unusable input, reported back to the user as is
    Validation,
    /// Input bytes that could not be parsed as an image or table
    Decode,
    /// Failures while producing output
    Io,
}

impl QRError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyData
            | Self::MissingColumn
            | Self::InvalidColor(_)
            | Self::InvalidECLevel(_)
            | Self::InvalidVersion(_)
            | Self::InvalidModuleSize
            | Self::DataTooLong
            | Self::ImageTooLarge
            | Self::Symbol(_) => ErrorKind::Validation,
            Self::LogoDecode(_) | Self::ImageDecode(_) | Self::Table(_) => ErrorKind::Decode,
            Self::ImageEncode(_) | Self::Archive(_) | Self::Io(_) => ErrorKind::Io,
            Self::BatchRow { source, .. } => source.kind(),
        }
    }

    pub(crate) fn at_row(self, row: usize) -> Self {
        Self::BatchRow { row, source: Box::new(self) }
    }
}

pub type QRResult<T> = Result<T, QRError>;
