//! 품사별 단어 사전 로드 및 조회
//!
//! JSON 형식의 품사 사전 파일을 로드하고
//! 단어 포함 여부와 태그를 조회합니다.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::tag::Pos;

/// 사전 로드/파싱 에러
#[derive(Debug)]
pub enum LexiconError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for LexiconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexiconError::IoError(e) => write!(f, "사전 파일 읽기 오류: {}", e),
            LexiconError::ParseError(s) => write!(f, "사전 JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for LexiconError {}

impl From<std::io::Error> for LexiconError {
    fn from(e: std::io::Error) -> Self {
        LexiconError::IoError(e)
    }
}

/// 품사 → 단어 집합 사전
///
/// 구성 후에는 수정하지 않는 읽기 전용 자료입니다. 순서가 있는
/// 컨테이너를 사용하므로 조회 결과의 순회 순서는 입력에 대해
/// 결정적입니다.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: BTreeMap<Pos, BTreeSet<String>>,
}

impl Lexicon {
    /// 빈 사전 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 파일에서 사전 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "Noun": ["아이", "아이오아이"],
    ///   "Josa": ["는", "의"]
    /// }
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let words: BTreeMap<Pos, BTreeSet<String>> = serde_json::from_reader(reader)
            .map_err(|e| LexiconError::ParseError(e.to_string()))?;
        Ok(Self { words })
    }

    /// JSON 문자열에서 사전 로드
    pub fn from_json(json_str: &str) -> Result<Self, LexiconError> {
        let words: BTreeMap<Pos, BTreeSet<String>> = serde_json::from_str(json_str)
            .map_err(|e| LexiconError::ParseError(e.to_string()))?;
        Ok(Self { words })
    }

    /// 단어 하나 추가
    pub fn insert(&mut self, pos: Pos, word: &str) {
        self.words.entry(pos).or_default().insert(word.to_string());
    }

    /// 해당 품사 사전에 단어가 있는지 확인
    pub fn contains(&self, pos: Pos, word: &str) -> bool {
        self.words.get(&pos).is_some_and(|set| set.contains(word))
    }

    /// 품사별 단어 집합 조회
    pub fn words(&self, pos: Pos) -> Option<&BTreeSet<String>> {
        self.words.get(&pos)
    }

    /// 품사별 단어 집합 복사본 (없으면 빈 집합)
    pub fn words_cloned(&self, pos: Pos) -> BTreeSet<String> {
        self.words.get(&pos).cloned().unwrap_or_default()
    }

    /// 단어가 속한 모든 품사 (고정 순서)
    pub fn tags_of(&self, word: &str) -> Vec<Pos> {
        self.words
            .iter()
            .filter(|(_, set)| set.contains(word))
            .map(|(&pos, _)| pos)
            .collect()
    }

    /// 사전 내 가장 긴 단어의 글자 수
    ///
    /// 빈 사전이면 `None`
    pub fn max_word_len(&self) -> Option<usize> {
        self.words
            .values()
            .flat_map(|set| set.iter())
            .map(|w| w.chars().count())
            .max()
    }

    /// 사전에 단어가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.words.values().all(|set| set.is_empty())
    }
}
