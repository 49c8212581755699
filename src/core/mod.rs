//! 로마 숫자 / 영어 단어 변환 핵심 로직
//!
//! 의존 순서: 조회 테이블 -> 청크 -> 코덱 -> 통합 변환기

pub mod chunk;
pub mod converter;
pub mod error;
pub mod roman;
pub mod tables;
pub mod words;
