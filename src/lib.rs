pub mod config;
pub mod core;
pub mod detection;

pub use crate::core::converter::{parse_integer, Conversion, Converter, Mode};
pub use crate::core::error::ConversionError;
pub use crate::core::roman::RomanNumeralCodec;
pub use crate::core::words::NumberWordsCodec;
pub use detection::{detect_mode, AutoDetector, AutoDetectorConfig};
