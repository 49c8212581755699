//! 입력 형태 자동 감지 모듈

mod auto_detect;
pub mod validator;

pub use auto_detect::{detect_mode, AutoDetector, AutoDetectorConfig};
pub use validator::{is_integer_literal, is_number_phrase, is_number_word, is_roman_alphabet};
