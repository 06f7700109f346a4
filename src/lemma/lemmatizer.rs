//! 어간/어미 사전 기반 용언 원형 복원기

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::tag::Pos;

use super::candidate::{lemma_candidates, lemma_candidates_chat};
use super::Lemma;

lazy_static::lazy_static! {
    /// 규칙으로 복원하기 어려운 표층형의 기본 원형 사전
    static ref DEFAULT_PREDEFINED: BTreeMap<String, BTreeSet<Lemma>> = {
        let mut map = BTreeMap::new();
        map.insert(
            "끕니다".to_string(),
            [Lemma::new("끌", "ㅂ니다"), Lemma::new("끄", "ㅂ니다")]
                .into_iter()
                .collect(),
        );
        map.insert("그래".to_string(), [Lemma::new("그렇", "아")].into_iter().collect());
        map
    };
}

/// 원형 복원 결과: 어간과 어미, 어간의 품사
///
/// 어미의 품사는 항상 `Eomi`이며 격자 변환 시 붙습니다.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Predicator {
    pub stem: String,
    pub ending: String,
    pub stem_tag: Pos,
}

/// 용언 원형 복원기
///
/// 형용사/동사 어간 사전과 어미 사전으로 후보를 거릅니다.
/// 사전은 구성 후 변하지 않으므로 읽기 전용 공유가 안전하지만,
/// 선택적 버퍼는 `RefCell`로 감싸여 있어 한 소유자에게만 맡겨야
/// 합니다.
#[derive(Debug)]
pub struct Lemmatizer {
    adjectives: BTreeSet<String>,
    verbs: BTreeSet<String>,
    stems: BTreeSet<String>,
    eomis: BTreeSet<String>,
    predefined: BTreeMap<String, BTreeSet<Lemma>>,
    buffer: Option<RefCell<LemmaBuffer>>,
}

impl Lemmatizer {
    /// 격식체 텍스트용 복원기 생성
    pub fn new(
        adjective_stems: BTreeSet<String>,
        verb_stems: BTreeSet<String>,
        eomis: BTreeSet<String>,
    ) -> Self {
        let mut stems = adjective_stems.clone();
        stems.extend(verb_stems.iter().cloned());
        Self {
            adjectives: adjective_stems,
            verbs: verb_stems,
            stems,
            eomis,
            predefined: DEFAULT_PREDEFINED.clone(),
            buffer: None,
        }
    }

    /// 구어체 텍스트용 복원기 생성
    ///
    /// 이모티콘을 떼어낸 표층형이 어미 없이 남을 수 있으므로
    /// 빈 어미를 어미 사전에 넣어 둡니다.
    pub fn informal(
        adjective_stems: BTreeSet<String>,
        verb_stems: BTreeSet<String>,
        mut eomis: BTreeSet<String>,
    ) -> Self {
        eomis.insert(String::new());
        Self::new(adjective_stems, verb_stems, eomis)
    }

    /// 표층형 단어 키의 원형 사전 추가 (기본 사전에 병합)
    pub fn with_predefined<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, BTreeSet<Lemma>)>,
    {
        self.predefined.extend(entries);
        self
    }

    /// 결과 버퍼 활성화
    ///
    /// 용량을 넘으면 접근 횟수 상위 항목만 남기고 정리합니다.
    pub fn with_buffer(mut self, capacity: usize) -> Self {
        self.buffer = Some(RefCell::new(LemmaBuffer::new(capacity)));
        self
    }

    /// 단어의 (어간, 어미) 후보 집합
    ///
    /// 미리 정의된 단어면 그 항목을 그대로 반환합니다. 그 외에는
    /// 모든 분할 지점에 격식체 규칙을 적용하고, 사전 필터를 통과한
    /// 후보가 없는 분할에만 구어체 규칙을 다시 적용합니다.
    pub fn get_candidates(&self, word: &str) -> BTreeSet<Lemma> {
        if let Some(entry) = self.predefined.get(word) {
            return entry.clone();
        }

        let chars: Vec<char> = word.chars().collect();
        let mut lemmas = BTreeSet::new();
        for i in 1..=chars.len() {
            let l: String = chars[..i].iter().collect();
            let r: String = chars[i..].iter().collect();

            let mut candidates: BTreeSet<Lemma> = lemma_candidates(&l, &r, None)
                .into_iter()
                .filter(|lemma| self.is_known(lemma))
                .collect();

            if candidates.is_empty() {
                candidates = lemma_candidates_chat(&l, &r, None)
                    .into_iter()
                    .filter(|lemma| self.is_known(lemma))
                    .collect();
            }

            lemmas.extend(candidates);
        }
        lemmas
    }

    /// 단어를 원형 복원하여 품사가 붙은 결과 반환
    ///
    /// 어간이 형용사/동사 사전 양쪽에 있으면 둘 다 반환합니다.
    pub fn lemmatize(&self, word: &str) -> Vec<Predicator> {
        let Some(buffer) = &self.buffer else {
            return self.analyze(word);
        };
        if let Some(hit) = buffer.borrow_mut().lookup(word) {
            return hit;
        }
        let result = self.analyze(word);
        buffer.borrow_mut().store(word, result.clone());
        result
    }

    /// 버퍼를 접근 횟수 상위 `topk`개로 정리
    pub fn compactify_buffer(&self, topk: usize) {
        if let Some(buffer) = &self.buffer {
            buffer.borrow_mut().compactify(topk);
        }
    }

    fn analyze(&self, word: &str) -> Vec<Predicator> {
        let mut out = Vec::new();
        for lemma in self.get_candidates(word) {
            if self.adjectives.contains(&lemma.stem) {
                out.push(Predicator {
                    stem: lemma.stem.clone(),
                    ending: lemma.ending.clone(),
                    stem_tag: Pos::Adjective,
                });
            }
            if self.verbs.contains(&lemma.stem) {
                out.push(Predicator {
                    stem: lemma.stem,
                    ending: lemma.ending,
                    stem_tag: Pos::Verb,
                });
            }
        }
        out
    }

    fn is_known(&self, lemma: &Lemma) -> bool {
        self.stems.contains(&lemma.stem) && self.eomis.contains(&lemma.ending)
    }
}

/// 원형 복원 결과 버퍼
///
/// 단어별 결과와 접근 횟수를 함께 기록합니다.
#[derive(Debug)]
struct LemmaBuffer {
    entries: HashMap<String, Vec<Predicator>>,
    counts: HashMap<String, u64>,
    capacity: usize,
}

impl LemmaBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            counts: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    fn lookup(&mut self, word: &str) -> Option<Vec<Predicator>> {
        let hit = self.entries.get(word)?.clone();
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        Some(hit)
    }

    fn store(&mut self, word: &str, result: Vec<Predicator>) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
        self.entries.insert(word.to_string(), result);
        if self.entries.len() > self.capacity {
            self.compactify(self.capacity);
        }
    }

    fn compactify(&mut self, topk: usize) {
        if self.entries.len() <= topk {
            return;
        }
        let mut ranked: Vec<(String, u64)> =
            self.counts.iter().map(|(w, &c)| (w.clone(), c)).collect();
        // 접근 횟수 내림차순, 동률은 단어 사전순
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(topk);
        let counts: HashMap<String, u64> = ranked.into_iter().collect();
        self.entries.retain(|word, _| counts.contains_key(word));
        self.counts = counts;
        log::debug!("원형 복원 버퍼 정리: {}개 유지", self.entries.len());
    }
}
