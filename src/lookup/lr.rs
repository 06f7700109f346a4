//! L-R 구조 어절 탐색
//!
//! 어절을 (왼쪽, 오른쪽) 분할마다 명사+조사, 어간+어미 구조로
//! 해석하여 시작 위치별 격자를 만듭니다.

use crate::lemma::Lemmatizer;
use crate::lexicon::Lexicon;
use crate::tag::Pos;

use super::{predicator_spans, Eojeol, LookupError};

/// L-R 구조 어절 탐색기
///
/// 사전과 원형 복원기는 구성 시 고정됩니다.
pub struct LrLookup {
    lexicon: Lexicon,
    lemmatizer: Lemmatizer,
    max_word_len: usize,
}

impl LrLookup {
    /// 사전으로 탐색기 생성
    ///
    /// 최대 단어 길이를 사전에서 계산하므로 빈 사전이면
    /// [`LookupError::EmptyLexicon`]을 반환합니다.
    pub fn new(lexicon: Lexicon) -> Result<Self, LookupError> {
        let max_word_len = lexicon.max_word_len().ok_or(LookupError::EmptyLexicon)?;
        Ok(Self::build(lexicon, max_word_len))
    }

    /// 최대 단어 길이를 직접 지정하여 생성 (빈 사전 허용)
    pub fn with_max_word_len(lexicon: Lexicon, max_word_len: usize) -> Self {
        Self::build(lexicon, max_word_len)
    }

    fn build(lexicon: Lexicon, max_word_len: usize) -> Self {
        let lemmatizer = Lemmatizer::new(
            lexicon.words_cloned(Pos::Adjective),
            lexicon.words_cloned(Pos::Verb),
            lexicon.words_cloned(Pos::Eomi),
        );
        Self {
            lexicon,
            lemmatizer,
            max_word_len,
        }
    }

    /// 최대 단어 길이
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// 문장 전체 격자
    ///
    /// 공백으로 어절을 나누고 어절별 격자를 이어 붙입니다.
    /// 오프셋은 공백을 제외한 글자 수로 누적됩니다.
    pub fn sentence_lookup(&self, sentence: &str) -> Vec<Vec<Eojeol>> {
        let mut out = Vec::new();
        for eojeol in sentence.split_whitespace() {
            let offset = out.len();
            out.extend(self.eojeol_lookup(eojeol, offset));
        }
        out
    }

    /// 어절 하나의 격자 (길이 = 어절 글자 수)
    pub fn eojeol_lookup(&self, eojeol: &str, offset: usize) -> Vec<Vec<Eojeol>> {
        let chars: Vec<char> = eojeol.chars().collect();
        let n = chars.len();
        if n == 0 {
            return Vec::new();
        }
        let mut bindex: Vec<Vec<Eojeol>> = vec![Vec::new(); n];

        // 어절 전체를 용언으로 해석
        bindex[0] = predicator_spans(&self.lemmatizer, eojeol, offset);

        for i in 1..=n {
            let l: String = chars[..i].iter().collect();
            let r: String = chars[i..].iter().collect();
            let l_is_noun = self.lexicon.contains(Pos::Noun, &l);

            // 명사 + 조사
            if l_is_noun && self.lexicon.contains(Pos::Josa, &r) {
                bindex[0].push(Eojeol::pair(
                    l.clone(),
                    r.clone(),
                    Pos::Noun,
                    Pos::Josa,
                    offset,
                    offset + i,
                    offset + n,
                ));
            }

            // 명사/용언 + 용언
            let l_pred = predicator_spans(&self.lemmatizer, &l, offset);
            let r_pred = predicator_spans(&self.lemmatizer, &r, offset + i);
            if (l_is_noun || !l_pred.is_empty()) && !r_pred.is_empty() {
                if l_is_noun {
                    bindex[0].push(Eojeol::single(l.clone(), Pos::Noun, offset, offset + i));
                } else {
                    bindex[0].extend(l_pred);
                }
                bindex[i].extend(r_pred);
            }
        }
        bindex
    }
}
