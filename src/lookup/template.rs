//! 템플릿 기반 어절 탐색
//!
//! 품사 템플릿 목록으로 L-R 탐색을 일반화합니다. 사전 일치 구간을
//! 모두 수집한 뒤 템플릿에 맞는 구간만 격자에 올리고, 더 긴 구간에
//! 지배당하는 부분 구간을 제거합니다.

use crate::lemma::Lemmatizer;
use crate::lexicon::Lexicon;
use crate::tag::Pos;

use super::{predicator_spans, Eojeol, LookupError};

/// 품사 템플릿 (형태소 1개 또는 2개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Template {
    /// 단일 형태소 (예: 명사 단독)
    Unary(Pos),
    /// 두 형태소 (예: 명사 + 조사)
    Pair(Pos, Pos),
}

/// 기본 템플릿 목록
fn default_templates() -> Vec<Vec<Pos>> {
    vec![
        vec![Pos::Noun],
        vec![Pos::Pronoun],
        vec![Pos::Adverb],
        vec![Pos::Exclamation],
        vec![Pos::Noun, Pos::Josa],
        vec![Pos::Pronoun, Pos::Josa],
        vec![Pos::Adverb, Pos::Josa],
    ]
}

/// 템플릿 기반 어절 탐색기
///
/// 구어체 원형 복원기를 사용하므로 이모티콘이 섞인 표층형도
/// 다룹니다.
pub struct TemplateLookup {
    lexicon: Lexicon,
    lemmatizer: Lemmatizer,
    templates: Vec<Template>,
    max_word_len: usize,
}

impl TemplateLookup {
    /// 기본 템플릿으로 탐색기 생성
    pub fn new(lexicon: Lexicon) -> Result<Self, LookupError> {
        Self::with_templates(lexicon, &default_templates())
    }

    /// 템플릿 목록을 지정하여 생성
    ///
    /// 길이가 1 또는 2가 아닌 템플릿은
    /// [`LookupError::MalformedTemplate`]. 중복은 제거하고 길이
    /// 오름차순으로 정렬합니다.
    pub fn with_templates(lexicon: Lexicon, templates: &[Vec<Pos>]) -> Result<Self, LookupError> {
        let max_word_len = lexicon.max_word_len().ok_or(LookupError::EmptyLexicon)?;
        let templates = check_templates(templates)?;
        let lemmatizer = Lemmatizer::informal(
            lexicon.words_cloned(Pos::Adjective),
            lexicon.words_cloned(Pos::Verb),
            lexicon.words_cloned(Pos::Eomi),
        );
        Ok(Self {
            lexicon,
            lemmatizer,
            templates,
            max_word_len,
        })
    }

    /// 적용 중인 템플릿 목록
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// 문장 전체 격자
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

        // 문자열 일치 탐색: (표층형, 품사, 시작, 끝)
        let mut raw: Vec<Vec<(String, Pos, usize, usize)>> = vec![Vec::new(); n];
        let mut predicators = std::collections::BTreeSet::new();
        for b in 0..n {
            for e in (b + 1)..=(b + self.max_word_len).min(n) {
                let sub: String = chars[b..e].iter().collect();
                predicators.extend(predicator_spans(&self.lemmatizer, &sub, offset + b));
                for tag in self.lexicon.tags_of(&sub) {
                    raw[b].push((sub.clone(), tag, b, e));
                }
            }
        }

        // 템플릿에 맞는 구간을 격자에 올림
        let mut out: Vec<Vec<Eojeol>> = vec![Vec::new(); n];
        for entries in &raw {
            for (w0, t0, b, e) in entries {
                for template in &self.templates {
                    match *template {
                        Template::Unary(u0) if *t0 == u0 => {
                            out[*b].push(Eojeol::single(
                                w0.clone(),
                                *t0,
                                offset + b,
                                offset + e,
                            ));
                        }
                        Template::Pair(u0, u1) if *e < n && *t0 == u0 => {
                            for (w1, t1, m, e1) in &raw[*e] {
                                if *t1 == u1 {
                                    out[*b].push(Eojeol::pair(
                                        w0.clone(),
                                        w1.clone(),
                                        *t0,
                                        *t1,
                                        offset + b,
                                        offset + m,
                                        offset + e1,
                                    ));
                                }
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        // 지배당하는 부분 구간 제거
        remove_sub(&mut out);

        // 용언 추가
        for span in predicators {
            out[span.b - offset].push(span);
        }
        out
    }
}

fn check_templates(templates: &[Vec<Pos>]) -> Result<Vec<Template>, LookupError> {
    let mut set = std::collections::BTreeSet::new();
    for template in templates {
        match template.as_slice() {
            [t0] => {
                set.insert(Template::Unary(*t0));
            }
            [t0, t1] => {
                set.insert(Template::Pair(*t0, *t1));
            }
            _ => return Err(LookupError::MalformedTemplate(template.len())),
        }
    }
    // BTreeSet 순회가 곧 길이 오름차순 (Unary < Pair)
    Ok(set.into_iter().collect())
}

/// 지배당하는 부분 구간 제거
///
/// 두 형태소 구간 X의 오른쪽 절반 (m, e)를 침범하는 다른 구간이
/// 없으면 X가 지배권을 갖습니다. 지배권이 성립한 X에 대해:
/// - 같은 (b, m, t0)의 단일 형태소 구간 제거
/// - 같은 (m, t1)인데 끝이 더 짧은 두 형태소 구간 제거
///
/// 같은 격자에 두 번 적용해도 결과가 바뀌지 않습니다.
pub fn remove_sub(lattice: &mut [Vec<Eojeol>]) {
    let all: Vec<Eojeol> = lattice.iter().flatten().cloned().collect();

    let mut bm_pairs = std::collections::BTreeSet::new();
    let mut me_pairs = std::collections::BTreeSet::new();
    for x in all.iter().filter(|x| x.is_pair()) {
        let overlapped = all.iter().any(|o| x.m < o.m && o.b < x.e);
        if !overlapped {
            if let Some(t1) = x.t1 {
                bm_pairs.insert((x.b, x.m, x.t0));
                me_pairs.insert((x.m, x.e, t1));
            }
        }
    }

    for spans in lattice.iter_mut() {
        spans.retain(|span| match span.t1 {
            None => !bm_pairs.contains(&(span.b, span.m, span.t0)),
            Some(t1) => !me_pairs
                .iter()
                .any(|&(m, e, t)| span.m == m && t1 == t && span.e < e),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lexicon() -> Lexicon {
        Lexicon::from_json(
            r#"{
                "Noun": ["나", "너"],
                "Josa": ["는", "를"],
                "Adjective": [],
                "Verb": [],
                "Eomi": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_malformed_template_rejected() {
        let too_long = vec![vec![Pos::Noun, Pos::Josa, Pos::Eomi]];
        assert!(matches!(
            TemplateLookup::with_templates(sample_lexicon(), &too_long),
            Err(LookupError::MalformedTemplate(3))
        ));

        let empty = vec![vec![]];
        assert!(matches!(
            TemplateLookup::with_templates(sample_lexicon(), &empty),
            Err(LookupError::MalformedTemplate(0))
        ));
    }

    #[test]
    fn test_templates_deduped_and_sorted() {
        let templates = vec![
            vec![Pos::Noun, Pos::Josa],
            vec![Pos::Noun],
            vec![Pos::Noun],
        ];
        let lookup = TemplateLookup::with_templates(sample_lexicon(), &templates).unwrap();
        assert_eq!(
            lookup.templates(),
            &[
                Template::Unary(Pos::Noun),
                Template::Pair(Pos::Noun, Pos::Josa),
            ]
        );
    }

    #[test]
    fn test_noun_josa_span_dominates_single() {
        let templates = vec![vec![Pos::Noun], vec![Pos::Noun, Pos::Josa]];
        let lookup = TemplateLookup::with_templates(sample_lexicon(), &templates).unwrap();

        let lattice = lookup.eojeol_lookup("나는", 0);
        assert!(lattice[0].contains(&Eojeol::pair(
            "나".to_string(),
            "는".to_string(),
            Pos::Noun,
            Pos::Josa,
            0,
            1,
            2,
        )));
        // 단독 명사 구간은 지배당하여 제거됨
        assert!(!lattice[0].contains(&Eojeol::single("나".to_string(), Pos::Noun, 0, 1)));
    }

    #[test]
    fn test_remove_sub_idempotent() {
        let templates = vec![vec![Pos::Noun], vec![Pos::Noun, Pos::Josa]];
        let lookup = TemplateLookup::with_templates(sample_lexicon(), &templates).unwrap();

        let mut lattice = lookup.eojeol_lookup("나는", 0);
        let before = lattice.clone();
        remove_sub(&mut lattice);
        assert_eq!(lattice, before);
    }

    #[test]
    fn test_predicators_appended() {
        let lexicon = Lexicon::from_json(
            r#"{
                "Noun": ["나", "바나나"],
                "Josa": ["는"],
                "Adjective": ["파랗"],
                "Verb": [],
                "Eomi": ["다"]
            }"#,
        )
        .unwrap();
        // 바나나 덕에 탐색 창이 3글자까지 열려 어절 전체가 용언 후보가 됨
        let lookup = TemplateLookup::new(lexicon).unwrap();

        let lattice = lookup.eojeol_lookup("파랗다", 0);
        assert!(lattice[0].iter().any(|span| {
            span.w0 == "파랗" && span.w1 == "다" && span.t0 == Pos::Adjective
        }));
    }

    #[test]
    fn test_window_bounded_by_max_word_len() {
        // 최대 단어 길이 1이면 두 글자 일치는 시도하지 않음
        let lexicon = Lexicon::from_json(
            r#"{ "Noun": ["나"], "Josa": ["는"], "Adjective": [], "Verb": [], "Eomi": [] }"#,
        )
        .unwrap();
        let lookup = TemplateLookup::new(lexicon).unwrap();
        let lattice = lookup.eojeol_lookup("나는", 0);

        // 나/Noun + 는/Josa 쌍은 여전히 이어 붙음
        assert!(lattice[0].iter().any(|span| span.is_pair()));
    }

    #[test]
    fn test_sentence_lookup_offsets() {
        let templates = vec![vec![Pos::Noun], vec![Pos::Noun, Pos::Josa]];
        let lookup = TemplateLookup::with_templates(sample_lexicon(), &templates).unwrap();

        let lattice = lookup.sentence_lookup("나는 너를");
        assert_eq!(lattice.len(), 4);
        assert!(lattice[2].contains(&Eojeol::pair(
            "너".to_string(),
            "를".to_string(),
            Pos::Noun,
            Pos::Josa,
            2,
            3,
            4,
        )));
    }
}
