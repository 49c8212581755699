//! 입력 형태로 변환 모드 자동 선택
//!
//! 판별 순서:
//! 1. 정수 -> 로마 숫자 범위면 ToRoman (설정에 따라), 아니면 ToWords
//! 2. 모든 토큰이 숫자 단어 -> FromWords
//! 3. 로마 숫자 기호만 -> FromRoman
//!
//! 숫자 단어 중 로마 숫자 기호만으로 된 것은 없으므로 2, 3은 겹치지 않음

use crate::core::converter::Mode;
use crate::core::tables::{ROMAN_MAX, ROMAN_MIN};

use super::validator::{is_integer_literal, is_number_phrase, is_roman_alphabet};

/// 자동 감지기 설정
#[derive(Debug, Clone)]
pub struct AutoDetectorConfig {
    /// 1~3999 정수를 로마 숫자로 변환 (false면 항상 영어 단어)
    pub prefer_roman: bool,
}

impl Default for AutoDetectorConfig {
    fn default() -> Self {
        Self { prefer_roman: true }
    }
}

/// 변환 모드 자동 감지기
#[derive(Debug, Clone, Default)]
pub struct AutoDetector {
    config: AutoDetectorConfig,
}

impl AutoDetector {
    pub fn new(config: AutoDetectorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(AutoDetectorConfig::default())
    }

    pub fn prefers_roman(&self) -> bool {
        self.config.prefer_roman
    }

    /// 입력에 맞는 모드 판별. 판별 불가 시 None
    pub fn detect(&self, input: &str) -> Option<Mode> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        if is_integer_literal(text) {
            return Some(self.integer_mode(text));
        }
        if is_number_phrase(text) {
            return Some(Mode::FromWords);
        }
        if is_roman_alphabet(text) {
            return Some(Mode::FromRoman);
        }
        None
    }

    fn integer_mode(&self, literal: &str) -> Mode {
        if !self.config.prefer_roman {
            return Mode::ToWords;
        }
        let digits: String = literal.chars().filter(|c| *c != ',' && *c != '_').collect();
        // i64 범위를 넘는 값은 ToWords에서 범위 오류로 보고됨
        match digits.parse::<i64>() {
            Ok(n) if (ROMAN_MIN..=ROMAN_MAX).contains(&n) => Mode::ToRoman,
            _ => Mode::ToWords,
        }
    }
}

/// 기본 설정으로 모드 판별
pub fn detect_mode(input: &str) -> Option<Mode> {
    AutoDetector::with_defaults().detect(input)
}
