//! 정수 <-> 로마 숫자 변환

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::ConversionError;
use crate::core::tables::{roman_symbol_value, ROMAN_MAX, ROMAN_MIN, ROMAN_TABLE};

lazy_static! {
    /// 표준 로마 숫자 문법 (1~3999)
    static ref ROMAN_GRAMMAR: Regex =
        Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
            .expect("roman numeral grammar must compile");
}

/// 로마 숫자 코덱
pub struct RomanNumeralCodec;

impl RomanNumeralCodec {
    /// 정수를 로마 숫자로 변환 (1~3999)
    ///
    /// # Examples
    /// ```
    /// use numeral::RomanNumeralCodec;
    /// assert_eq!(RomanNumeralCodec::encode(1994).unwrap(), "MCMXCIV");
    /// ```
    pub fn encode(n: i64) -> Result<String, ConversionError> {
        if !(ROMAN_MIN..=ROMAN_MAX).contains(&n) {
            return Err(ConversionError::out_of_range(n, ROMAN_MIN, ROMAN_MAX));
        }

        // 탐욕 감산: 큰 기호부터 가능한 만큼 붙임
        let mut remaining = n as u32;
        let mut result = String::with_capacity(15);
        for &(value, symbol) in ROMAN_TABLE.iter() {
            while remaining >= value {
                result.push_str(symbol);
                remaining -= value;
            }
        }

        log::debug!("로마 숫자 변환: {} -> {}", n, result);
        Ok(result)
    }

    /// 로마 숫자를 정수로 변환 (대소문자 무시, 앞뒤 공백 무시)
    ///
    /// # Examples
    /// ```
    /// use numeral::RomanNumeralCodec;
    /// assert_eq!(RomanNumeralCodec::decode("mcmxciv").unwrap(), 1994);
    /// ```
    pub fn decode(input: &str) -> Result<i64, ConversionError> {
        let numeral = input.trim().to_ascii_uppercase();
        if !is_valid_roman(&numeral) {
            return Err(ConversionError::InvalidFormat(input.trim().to_string()));
        }

        let values: Vec<i64> = numeral
            .chars()
            .filter_map(roman_symbol_value)
            .map(i64::from)
            .collect();

        // 다음 기호가 더 크면 감산 쌍
        let mut total = 0i64;
        let mut i = 0;
        while i < values.len() {
            let current = values[i];
            match values.get(i + 1) {
                Some(&next) if next > current => {
                    total += next - current;
                    i += 2;
                }
                _ => {
                    total += current;
                    i += 1;
                }
            }
        }

        if !(ROMAN_MIN..=ROMAN_MAX).contains(&total) {
            return Err(ConversionError::out_of_range(total, ROMAN_MIN, ROMAN_MAX));
        }

        log::debug!("로마 숫자 해석: {} -> {}", numeral, total);
        Ok(total)
    }
}

/// 대문자 로마 숫자가 표준 문법을 만족하는지 검사
///
/// 문법 자체는 빈 문자열도 허용하므로 따로 거부함
pub fn is_valid_roman(numeral: &str) -> bool {
    !numeral.is_empty() && ROMAN_GRAMMAR.is_match(numeral)
}
