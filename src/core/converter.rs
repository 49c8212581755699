//! 변환 모드 선택 및 통합 변환기
//!
//! 화면(또는 CLI)은 입력 한 칸과 모드만 넘기고, 결과 문자열이나
//! 실패 메시지를 그대로 표시합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ConversionError;
use crate::core::roman::RomanNumeralCodec;
use crate::core::words::NumberWordsCodec;
use crate::detection::{is_integer_literal, AutoDetector, AutoDetectorConfig};

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// 입력 형태를 보고 자동 선택
    Auto,
    /// 정수 -> 로마 숫자
    ToRoman,
    /// 로마 숫자 -> 정수
    FromRoman,
    /// 정수 -> 영어 단어
    ToWords,
    /// 영어 단어 -> 정수
    FromWords,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Auto,
        Mode::ToRoman,
        Mode::FromRoman,
        Mode::ToWords,
        Mode::FromWords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::ToRoman => "to-roman",
            Mode::FromRoman => "from-roman",
            Mode::ToWords => "to-words",
            Mode::FromWords => "from-words",
        }
    }

    /// 반대 방향 모드 (Auto는 그대로)
    pub fn inverse(&self) -> Mode {
        match self {
            Mode::Auto => Mode::Auto,
            Mode::ToRoman => Mode::FromRoman,
            Mode::FromRoman => Mode::ToRoman,
            Mode::ToWords => Mode::FromWords,
            Mode::FromWords => Mode::ToWords,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Mode::ALL
            .iter()
            .find(|mode| mode.as_str() == needle)
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = Mode::ALL.iter().map(|m| m.as_str()).collect();
                format!("unknown mode '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// 변환 한 건의 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// 실제 적용된 모드 (Auto는 해석된 모드로 바뀜)
    pub mode: Mode,
    pub input: String,
    pub output: String,
}

/// 통합 변환기
#[derive(Debug, Clone, Default)]
pub struct Converter {
    /// 로마 숫자 출력을 소문자로
    lowercase_roman: bool,
    detector: AutoDetector,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase_roman(mut self, lowercase: bool) -> Self {
        self.lowercase_roman = lowercase;
        self
    }

    /// Auto 모드에서 1~3999 정수를 로마 숫자로 변환할지
    pub fn with_prefer_roman(mut self, prefer_roman: bool) -> Self {
        self.detector = AutoDetector::new(AutoDetectorConfig { prefer_roman });
        self
    }

    pub fn lowercase_roman(&self) -> bool {
        self.lowercase_roman
    }

    /// 지정한 모드로 입력 한 칸을 변환
    pub fn convert(&self, mode: Mode, input: &str) -> Result<Conversion, ConversionError> {
        let resolved = match mode {
            Mode::Auto => self.resolve_auto(input)?,
            other => other,
        };

        let output = match resolved {
            Mode::ToRoman => {
                let roman = RomanNumeralCodec::encode(parse_integer(input)?)?;
                if self.lowercase_roman {
                    roman.to_ascii_lowercase()
                } else {
                    roman
                }
            }
            Mode::FromRoman => RomanNumeralCodec::decode(input)?.to_string(),
            Mode::ToWords => NumberWordsCodec::encode(parse_integer(input)?)?,
            Mode::FromWords => NumberWordsCodec::decode(input)?.to_string(),
            Mode::Auto => unreachable!("auto mode is resolved above"),
        };

        Ok(Conversion {
            mode: resolved,
            input: input.trim().to_string(),
            output,
        })
    }

    /// 입력 형태로 모드를 정한 뒤 변환
    pub fn convert_auto(&self, input: &str) -> Result<Conversion, ConversionError> {
        self.convert(Mode::Auto, input)
    }

    fn resolve_auto(&self, input: &str) -> Result<Mode, ConversionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        match self.detector.detect(trimmed) {
            Some(mode) => {
                log::debug!("자동 감지: {:?} -> {}", trimmed, mode);
                Ok(mode)
            }
            // 숫자처럼 시작하면 숫자 오류, 그 외에는 단어 해석 오류를 보여줌
            None if trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') => {
                Err(ConversionError::InvalidNumber(trimmed.to_string()))
            }
            None => Ok(Mode::FromWords),
        }
    }
}

/// 10진 정수 문자열 해석
///
/// 부호(+/-)와 자릿수 구분용 쉼표/밑줄을 허용함
pub fn parse_integer(input: &str) -> Result<i64, ConversionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }
    if !is_integer_literal(trimmed) {
        return Err(ConversionError::InvalidNumber(trimmed.to_string()));
    }

    let digits: String = trimmed.chars().filter(|c| *c != ',' && *c != '_').collect();
    // 형식은 맞으므로 실패 원인은 i64 범위 초과뿐
    digits
        .parse::<i64>()
        .map_err(|_| ConversionError::out_of_range(trimmed, i64::MIN, i64::MAX))
}
