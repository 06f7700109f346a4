//! 어절 격자 생성 모듈
//!
//! 어절 하나를 시작 위치별 형태소 구간 목록(격자, bindex)으로
//! 풀어냅니다. 두 가지 탐색기를 제공합니다:
//!
//! - [`LrLookup`]: 명사+조사, 어간+어미의 L-R 구조 탐색
//! - [`TemplateLookup`]: 품사 템플릿 목록으로 일반화한 탐색 +
//!   지배당하는 부분 구간 제거
//!
//! # 사용 예시
//!
//! ```
//! use eojeol::lexicon::Lexicon;
//! use eojeol::lookup::LrLookup;
//!
//! let lexicon = Lexicon::from_json(
//!     r#"{ "Adjective": ["파랗"], "Verb": [], "Eomi": ["다"] }"#,
//! ).unwrap();
//! let lookup = LrLookup::new(lexicon).unwrap();
//!
//! let lattice = lookup.sentence_lookup("파랗다");
//! assert!(lattice[0].iter().any(|span| span.w0 == "파랗" && span.w1 == "다"));
//! ```

mod lr;
mod span;
mod template;

pub use lr::LrLookup;
pub use span::Eojeol;
pub use template::{remove_sub, Template, TemplateLookup};

use crate::lemma::Lemmatizer;
use crate::tag::Pos;

/// 격자 구성 에러
#[derive(Debug)]
pub enum LookupError {
    /// 최대 단어 길이를 구할 수 없는 빈 사전
    EmptyLexicon,
    /// 길이가 1 또는 2가 아닌 템플릿
    MalformedTemplate(usize),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::EmptyLexicon => write!(f, "사전이 비어 있습니다"),
            LookupError::MalformedTemplate(len) => {
                write!(f, "템플릿 길이는 1 또는 2여야 합니다: {}", len)
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// 단어의 원형 복원 결과를 격자 구간으로 변환
///
/// 구간 끝은 표층형 단어의 끝(`offset` + 글자 수)입니다.
pub(crate) fn predicator_spans(
    lemmatizer: &Lemmatizer,
    word: &str,
    offset: usize,
) -> Vec<Eojeol> {
    let n = word.chars().count();
    lemmatizer
        .lemmatize(word)
        .into_iter()
        .map(|p| {
            let stem_len = p.stem.chars().count();
            Eojeol::pair(
                p.stem,
                p.ending,
                p.stem_tag,
                Pos::Eomi,
                offset,
                offset + stem_len,
                offset + n,
            )
        })
        .collect()
}
