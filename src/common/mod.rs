pub mod error;
pub mod palette;
pub mod style;

pub use error::*;
pub use palette::*;
pub use style::*;
