//! 정수 <-> 영어 숫자 단어 변환
//!
//! 1000 단위 청크로 나누어 처리합니다.
//!
//! - 인코딩: 하위 청크부터 렌더링하고 스케일 단어를 붙여 앞쪽에 쌓음
//! - 디코딩: 단어 값을 [`ChunkAccumulator`]에 차례로 입력
//!
//! 디코더는 인코더 출력 문법보다 관대합니다. 예를 들어 `"thousand five"`는
//! 오류 없이 1005로 해석됩니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::chunk::{render_chunk, ChunkAccumulator};
use crate::core::error::ConversionError;
use crate::core::tables::{
    scale_multiplier, HUNDRED_WORD, NEGATIVE_WORD, ONES, SCALES, TEENS, TENS, WORDS_MAX,
    ZERO_WORD,
};

lazy_static! {
    /// 단어 -> 값 (일/십대/십의 자리, hundred, 스케일)
    static ref WORD_VALUES: HashMap<&'static str, i64> = {
        let mut map = HashMap::new();
        for (i, word) in ONES.iter().enumerate().skip(1) {
            map.insert(*word, i as i64);
        }
        for (i, word) in TEENS.iter().enumerate() {
            map.insert(*word, 10 + i as i64);
        }
        for (i, word) in TENS.iter().enumerate().skip(2) {
            map.insert(*word, 10 * i as i64);
        }
        map.insert(HUNDRED_WORD, 100);
        for (i, word) in SCALES.iter().enumerate().skip(1) {
            map.insert(*word, scale_multiplier(i));
        }
        map
    };
}

/// 숫자 단어 하나의 값 (소문자 기준)
///
/// "zero"와 "negative"는 문장 전체 수준에서만 의미가 있으므로 포함하지 않음
pub fn word_value(word: &str) -> Option<i64> {
    WORD_VALUES.get(word).copied()
}

/// 영어 숫자 단어 코덱
pub struct NumberWordsCodec;

impl NumberWordsCodec {
    /// 정수를 영어 단어로 변환 (|n| <= 999,999,999,999,999)
    ///
    /// # Examples
    /// ```
    /// use numeral::NumberWordsCodec;
    /// assert_eq!(NumberWordsCodec::encode(1001).unwrap(), "one thousand one");
    /// assert_eq!(NumberWordsCodec::encode(-42).unwrap(), "negative forty two");
    /// ```
    pub fn encode(n: i64) -> Result<String, ConversionError> {
        let magnitude = n.unsigned_abs();
        if magnitude > WORDS_MAX as u64 {
            return Err(ConversionError::out_of_range(n, -WORDS_MAX, WORDS_MAX));
        }
        if magnitude == 0 {
            return Ok(ZERO_WORD.to_string());
        }

        let mut parts: Vec<String> = Vec::with_capacity(SCALES.len());
        let mut remaining = magnitude;
        let mut scale = 0;
        while remaining > 0 {
            let chunk = (remaining % 1000) as u16;
            if chunk > 0 {
                let mut words = render_chunk(chunk);
                if scale > 0 {
                    words.push(SCALES[scale]);
                }
                parts.push(words.join(" "));
            }
            remaining /= 1000;
            scale += 1;
        }
        // 하위 청크부터 쌓았으므로 뒤집어서 큰 단위가 앞에 오도록
        parts.reverse();

        let mut result = parts.join(" ");
        if n < 0 {
            result.insert_str(0, "negative ");
        }

        log::debug!("단어 변환: {} -> {}", n, result);
        Ok(result.trim().to_string())
    }

    /// 영어 단어를 정수로 변환 (대소문자 무시)
    ///
    /// # Examples
    /// ```
    /// use numeral::NumberWordsCodec;
    /// assert_eq!(NumberWordsCodec::decode("one thousand one").unwrap(), 1001);
    /// assert_eq!(NumberWordsCodec::decode("Negative Forty Two").unwrap(), -42);
    /// ```
    pub fn decode(input: &str) -> Result<i64, ConversionError> {
        let text = input.trim().to_lowercase();
        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let negative = tokens[0] == NEGATIVE_WORD;
        if negative {
            tokens.remove(0);
            if tokens.is_empty() {
                return Err(ConversionError::EmptyInput);
            }
        }

        let magnitude = if tokens == [ZERO_WORD] {
            0
        } else {
            let mut acc = ChunkAccumulator::new();
            for token in &tokens {
                let value =
                    word_value(token).ok_or_else(|| ConversionError::InvalidWord(token.to_string()))?;
                acc.feed(value)?;
            }
            acc.finish()?
        };

        let value = if negative { -magnitude } else { magnitude };
        log::debug!("단어 해석: {} -> {}", text, value);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_examples() {
        assert_eq!(NumberWordsCodec::encode(0).unwrap(), "zero");
        assert_eq!(NumberWordsCodec::encode(7).unwrap(), "seven");
        assert_eq!(NumberWordsCodec::encode(13).unwrap(), "thirteen");
        assert_eq!(NumberWordsCodec::encode(20).unwrap(), "twenty");
        assert_eq!(NumberWordsCodec::encode(42).unwrap(), "forty two");
        assert_eq!(NumberWordsCodec::encode(100).unwrap(), "one hundred");
        assert_eq!(NumberWordsCodec::encode(1001).unwrap(), "one thousand one");
        assert_eq!(
            NumberWordsCodec::encode(1_234_567).unwrap(),
            "one million two hundred thirty four thousand five hundred sixty seven"
        );
    }

    #[test]
    fn test_encode_skips_zero_chunks() {
        assert_eq!(NumberWordsCodec::encode(1_000_000).unwrap(), "one million");
        assert_eq!(
            NumberWordsCodec::encode(2_000_000_003).unwrap(),
            "two billion three"
        );
        assert_eq!(
            NumberWordsCodec::encode(5_000_000_000_000).unwrap(),
            "five trillion"
        );
    }

    #[test]
    fn test_encode_negative() {
        assert_eq!(NumberWordsCodec::encode(-42).unwrap(), "negative forty two");
        assert_eq!(NumberWordsCodec::encode(-1000).unwrap(), "negative one thousand");
    }

    #[test]
    fn test_encode_bounds() {
        assert!(NumberWordsCodec::encode(WORDS_MAX).is_ok());
        assert!(NumberWordsCodec::encode(-WORDS_MAX).is_ok());
        for n in [WORDS_MAX + 1, -WORDS_MAX - 1, i64::MAX, i64::MIN] {
            assert!(matches!(
                NumberWordsCodec::encode(n),
                Err(ConversionError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_encode_output_charset() {
        for n in [-999_999, -1, 0, 15, 101, 70_000, 123_456_789_012] {
            let words = NumberWordsCodec::encode(n).unwrap();
            assert!(words.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
            assert!(!words.contains("  "));
            assert_eq!(words.trim(), words);
        }
    }

    #[test]
    fn test_decode_examples() {
        assert_eq!(NumberWordsCodec::decode("zero").unwrap(), 0);
        assert_eq!(NumberWordsCodec::decode("twenty").unwrap(), 20);
        assert_eq!(NumberWordsCodec::decode("forty two").unwrap(), 42);
        assert_eq!(NumberWordsCodec::decode("one thousand one").unwrap(), 1001);
        assert_eq!(NumberWordsCodec::decode("negative forty two").unwrap(), -42);
        assert_eq!(NumberWordsCodec::decode("  TWO   hundred\tfive ").unwrap(), 205);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(NumberWordsCodec::decode(""), Err(ConversionError::EmptyInput));
        assert_eq!(NumberWordsCodec::decode("  \t"), Err(ConversionError::EmptyInput));
        assert_eq!(NumberWordsCodec::decode("negative"), Err(ConversionError::EmptyInput));
        assert_eq!(
            NumberWordsCodec::decode("forty-two"),
            Err(ConversionError::InvalidWord("forty-two".into()))
        );
        assert_eq!(
            NumberWordsCodec::decode("one fourty"),
            Err(ConversionError::InvalidWord("fourty".into()))
        );
        // "zero"는 단독으로만 허용
        assert_eq!(
            NumberWordsCodec::decode("one zero"),
            Err(ConversionError::InvalidWord("zero".into()))
        );
    }

    #[test]
    fn test_decode_is_permissive() {
        // 인코더가 만들지 않는 형태도 해석됨
        assert_eq!(NumberWordsCodec::decode("thousand five").unwrap(), 1005);
        assert_eq!(NumberWordsCodec::decode("hundred").unwrap(), 100);
        assert_eq!(NumberWordsCodec::decode("one hundred thousand").unwrap(), 100_000);
        assert_eq!(NumberWordsCodec::decode("twenty twenty").unwrap(), 40);
        assert_eq!(NumberWordsCodec::decode("one thousand thousand").unwrap(), 2000);
        assert_eq!(NumberWordsCodec::decode("negative zero").unwrap(), 0);
    }

    #[test]
    fn test_round_trip_sampled() {
        let mut n = -WORDS_MAX;
        while n <= WORDS_MAX {
            let words = NumberWordsCodec::encode(n).unwrap();
            assert_eq!(NumberWordsCodec::decode(&words).unwrap(), n, "{}", words);
            n += 7_919_999_999_371;
        }
        for n in -2_000..=2_000 {
            let words = NumberWordsCodec::encode(n).unwrap();
            assert_eq!(NumberWordsCodec::decode(&words).unwrap(), n, "{}", words);
        }
    }
}
