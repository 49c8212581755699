//! 1000 단위 청크 렌더링 / 누적

use crate::core::error::ConversionError;
use crate::core::tables::{HUNDRED_WORD, ONES, TEENS, TENS};

const HUNDRED: i64 = 100;
const THOUSAND: i64 = 1000;

/// 0~999 청크를 영어 단어 목록으로 렌더링
///
/// 0이면 빈 목록 반환
pub fn render_chunk(chunk: u16) -> Vec<&'static str> {
    debug_assert!(chunk < 1000, "chunk out of range: {}", chunk);

    let mut words = Vec::with_capacity(4);
    let hundreds = (chunk / 100) as usize;
    let remainder = (chunk % 100) as usize;

    if hundreds > 0 {
        words.push(ONES[hundreds]);
        words.push(HUNDRED_WORD);
    }

    if (10..20).contains(&remainder) {
        words.push(TEENS[remainder - 10]);
    } else {
        let tens = remainder / 10;
        let ones = remainder % 10;
        if tens >= 2 {
            words.push(TENS[tens]);
        }
        if ones > 0 {
            words.push(ONES[ones]);
        }
    }

    words
}

/// 단어 값을 차례로 받아 전체 수를 누적하는 상태 기계
///
/// - 100: 현재 청크(없으면 1)에 곱함
/// - 1000 이상 (스케일): 현재 청크(없으면 1)에 곱한 뒤 합계에 반영, 청크 초기화
/// - 그 외: 현재 청크에 더함
#[derive(Debug, Default)]
pub struct ChunkAccumulator {
    total: i64,
    current: i64,
}

impl ChunkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단어 값 하나 입력
    pub fn feed(&mut self, value: i64) -> Result<(), ConversionError> {
        if value == HUNDRED {
            self.current = self.current_or_one().checked_mul(HUNDRED).ok_or_else(overflow)?;
        } else if value >= THOUSAND {
            let scaled = self.current_or_one().checked_mul(value).ok_or_else(overflow)?;
            self.total = self.total.checked_add(scaled).ok_or_else(overflow)?;
            self.current = 0;
        } else {
            self.current = self.current.checked_add(value).ok_or_else(overflow)?;
        }
        Ok(())
    }

    /// 남은 청크를 반영하여 최종값 반환
    pub fn finish(self) -> Result<i64, ConversionError> {
        self.total.checked_add(self.current).ok_or_else(overflow)
    }

    fn current_or_one(&self) -> i64 {
        if self.current == 0 {
            1
        } else {
            self.current
        }
    }
}

fn overflow() -> ConversionError {
    ConversionError::out_of_range("decoded value", i64::MIN, i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(chunk: u16) -> String {
        render_chunk(chunk).join(" ")
    }

    #[test]
    fn test_render_small() {
        assert_eq!(render(0), "");
        assert_eq!(render(7), "seven");
        assert_eq!(render(10), "ten");
        assert_eq!(render(19), "nineteen");
        assert_eq!(render(20), "twenty");
        assert_eq!(render(42), "forty two");
    }

    #[test]
    fn test_render_hundreds() {
        assert_eq!(render(100), "one hundred");
        assert_eq!(render(105), "one hundred five");
        assert_eq!(render(311), "three hundred eleven");
        assert_eq!(render(999), "nine hundred ninety nine");
    }

    #[test]
    fn test_accumulate_simple() {
        let mut acc = ChunkAccumulator::new();
        acc.feed(40).unwrap();
        acc.feed(2).unwrap();
        assert_eq!(acc.finish().unwrap(), 42);
    }

    #[test]
    fn test_accumulate_scales() {
        // one hundred twenty three thousand four
        let mut acc = ChunkAccumulator::new();
        for v in [1, 100, 20, 3, 1000, 4] {
            acc.feed(v).unwrap();
        }
        assert_eq!(acc.finish().unwrap(), 123_004);
    }

    #[test]
    fn test_accumulate_bare_scale() {
        // 앞에 숫자가 없는 스케일/hundred는 1로 취급
        let mut acc = ChunkAccumulator::new();
        acc.feed(1000).unwrap();
        acc.feed(5).unwrap();
        assert_eq!(acc.finish().unwrap(), 1005);

        let mut acc = ChunkAccumulator::new();
        acc.feed(100).unwrap();
        assert_eq!(acc.finish().unwrap(), 100);
    }

    #[test]
    fn test_accumulate_overflow() {
        // ninety hundred hundred hundred trillion = 9e19
        let mut acc = ChunkAccumulator::new();
        acc.feed(90).unwrap();
        acc.feed(100).unwrap();
        acc.feed(100).unwrap();
        acc.feed(100).unwrap();
        assert!(matches!(
            acc.feed(1_000_000_000_000),
            Err(ConversionError::OutOfRange { .. })
        ));
    }
}
