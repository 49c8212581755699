//! 변환 실패 유형

/// 변환 실패
///
/// 모든 실패는 입력 검증 실패이며, 재시도로 달라지지 않음
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 코덱이 지원하는 범위를 벗어난 정수
    OutOfRange { value: String, min: i64, max: i64 },
    /// 로마 숫자 문법에 맞지 않는 문자열
    InvalidFormat(String),
    /// 숫자 단어로 인식할 수 없는 토큰
    InvalidWord(String),
    /// 빈 입력 (공백만 있는 경우 포함)
    EmptyInput,
    /// 정수로 해석할 수 없는 숫자 입력
    InvalidNumber(String),
}

impl ConversionError {
    pub(crate) fn out_of_range(value: impl ToString, min: i64, max: i64) -> Self {
        ConversionError::OutOfRange {
            value: value.to_string(),
            min,
            max,
        }
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::OutOfRange { value, min, max } => {
                write!(f, "{} is out of range (expected {} to {})", value, min, max)
            }
            ConversionError::InvalidFormat(s) => write!(f, "'{}' is not a valid Roman numeral", s),
            ConversionError::InvalidWord(w) => write!(f, "'{}' is not a recognized number word", w),
            ConversionError::EmptyInput => write!(f, "input is empty"),
            ConversionError::InvalidNumber(s) => write!(f, "'{}' is not a whole number", s),
        }
    }
}

impl std::error::Error for ConversionError {}
