//! 입력 형태 판별용 검사 함수

use crate::core::tables::{roman_symbol_value, NEGATIVE_WORD, ZERO_WORD};
use crate::core::words::word_value;

/// 모든 문자가 로마 숫자 기호인지 (대소문자 무시)
///
/// 문법 검사는 하지 않음. "IIII"도 true
pub fn is_roman_alphabet(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| roman_symbol_value(c).is_some())
}

/// 부호 + 10진 숫자 형태인지
///
/// 자릿수 사이의 쉼표/밑줄 구분자 허용 ("1,000", "1_000")
pub fn is_integer_literal(text: &str) -> bool {
    let body = text.strip_prefix(['-', '+']).unwrap_or(text);
    if body.is_empty() {
        return false;
    }

    let bytes = body.as_bytes();
    // 구분자는 숫자 사이에만
    if !bytes[0].is_ascii_digit() || !bytes[bytes.len() - 1].is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for &b in bytes {
        match b {
            b'0'..=b'9' => prev_separator = false,
            b',' | b'_' if !prev_separator => prev_separator = true,
            _ => return false,
        }
    }
    true
}

/// 숫자 단어인지 (zero, negative 포함, 대소문자 무시)
pub fn is_number_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower == ZERO_WORD || lower == NEGATIVE_WORD || word_value(&lower).is_some()
}

/// 모든 토큰이 숫자 단어인 문장인지
pub fn is_number_phrase(text: &str) -> bool {
    let mut tokens = text.split_whitespace().peekable();
    tokens.peek().is_some() && tokens.all(is_number_word)
}
