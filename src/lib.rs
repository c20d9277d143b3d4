//! # qrstudio
//!
//! Generate styled QR codes, batch-generate them from CSV files, and scan QR codes
//! from images.
//!
//! ## Features
//!
//! - **QR Code Generation**: Custom foreground/background colors and an optional logo
//!   composited at the center
//! - **Batch Generation**: One QR code per row of a CSV file with a `data` column,
//!   bundled into a zip archive
//! - **QR Code Scanning**: Detect and decode a QR code from a PNG or JPEG image
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrstudio::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Black on white, 10 pixels per module, 5 module quiet zone
//! let img = QRBuilder::new("https://example.com").build()?;
//! assert_eq!(img.width(), 350);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust,no_run
//! use qrstudio::{Color, ECLevel, Palette, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logo = std::fs::read("logo.png")?;
//! let palette = Palette::new("#1e3a8a".parse()?, Color::WHITE);
//!
//! let img = QRBuilder::new("https://example.com")
//!     .palette(palette)         // Module colors - if not provided, defaults to black on white
//!     .ec_level(ECLevel::H)     // Error correction level - if not provided, defaults to ECLevel::M
//!     .module_size(8)           // Pixels per module - if not provided, defaults to 10
//!     .quiet_zone(4)            // Border in modules - if not provided, defaults to 5
//!     .logo(&logo)              // Centered logo, a quarter of the image in each direction
//!     .build()?;
//! img.save("styled_qr.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading a QR Code
//!
//! ```rust
//! use qrstudio::{builder::encode_png, reader::scan, QRBuilder, ScanResult};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let png = encode_png(&QRBuilder::new("Hello, world!").build()?)?;
//!
//! match scan(&png)? {
//!     ScanResult::Found(msg) => assert_eq!(msg, "Hello, world!"),
//!     ScanResult::NotFound => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Batch Generation
//!
//! ```rust
//! use qrstudio::{batch::{read_rows, run_batch}, Style};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rows = read_rows(b"data\nfirst\nsecond\n")?;
//! let out = run_batch(rows, Style::default())?;
//! assert_eq!(out.files, ["qr_0.png", "qr_1.png"]);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod builder;
pub mod common;
pub mod handlers;
pub mod reader;

pub use builder::{generate_qr_code, QRBuilder, QR};
pub use common::{Color, ECLevel, ErrorKind, Palette, QRError, QRResult, Style};
pub use reader::ScanResult;
