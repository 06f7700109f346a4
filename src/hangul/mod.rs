//! 한글 음절/자모 처리 모듈

mod jamo;

pub use jamo::{
    compose, decompose, is_complete_korean, is_english, is_jaum, is_korean, is_moum, is_number,
    is_punctuation, to_base, HangulError, CHOSUNG_LIST, JONGSUNG_LIST, JUNGSUNG_LIST, KOR_BEGIN,
    KOR_END,
};
