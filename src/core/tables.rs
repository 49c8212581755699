//! 로마 숫자 / 영어 숫자 단어 조회 테이블

/// 로마 숫자 기호 테이블 (값 내림차순, 감산 쌍 포함)
///
/// 탐욕 인코딩은 이 순서에 의존함
pub const ROMAN_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// 로마 숫자로 표현 가능한 최솟값
pub const ROMAN_MIN: i64 = 1;
/// 로마 숫자로 표현 가능한 최댓값
pub const ROMAN_MAX: i64 = 3999;

/// 일의 자리 단어 (0은 단독으로 쓰이지 않음)
pub const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// 10~19
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// 십의 자리 단어 (0, 1은 사용하지 않음)
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// 청크 단위 스케일 단어, 인덱스 i = 1000^i
pub const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

/// 영어 단어로 표현 가능한 절댓값 최댓값
pub const WORDS_MAX: i64 = 999_999_999_999_999;

pub const HUNDRED_WORD: &str = "hundred";
pub const ZERO_WORD: &str = "zero";
pub const NEGATIVE_WORD: &str = "negative";

/// 단일 로마 숫자 기호의 값
///
/// 인코더와 같은 테이블에서 유도함
pub fn roman_symbol_value(c: char) -> Option<u32> {
    let upper = c.to_ascii_uppercase();
    ROMAN_TABLE
        .iter()
        .find(|(_, symbol)| symbol.len() == 1 && symbol.starts_with(upper))
        .map(|(value, _)| *value)
}

/// 스케일 인덱스 -> 배수 (1000^i)
pub fn scale_multiplier(index: usize) -> i64 {
    1000i64.pow(index as u32)
}
