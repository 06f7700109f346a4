//! 품사 태그 집합

use serde::{Deserialize, Serialize};

/// 품사 태그
///
/// 사전과 격자(lattice)에서 쓰이는 닫힌 태그 집합입니다.
/// 어간 사전은 `Adjective` ∪ `Verb`, 어미 사전은 `Eomi`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pos {
    /// 명사
    Noun,
    /// 대명사
    Pronoun,
    /// 부사
    Adverb,
    /// 관형사
    Determiner,
    /// 감탄사
    Exclamation,
    /// 조사
    Josa,
    /// 형용사
    Adjective,
    /// 동사
    Verb,
    /// 어미
    Eomi,
}

impl Pos {
    /// 전체 태그 목록 (사전 순회용 고정 순서)
    pub const ALL: [Pos; 9] = [
        Pos::Noun,
        Pos::Pronoun,
        Pos::Adverb,
        Pos::Determiner,
        Pos::Exclamation,
        Pos::Josa,
        Pos::Adjective,
        Pos::Verb,
        Pos::Eomi,
    ];

    /// 태그 이름 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Noun => "Noun",
            Pos::Pronoun => "Pronoun",
            Pos::Adverb => "Adverb",
            Pos::Determiner => "Determiner",
            Pos::Exclamation => "Exclamation",
            Pos::Josa => "Josa",
            Pos::Adjective => "Adjective",
            Pos::Verb => "Verb",
            Pos::Eomi => "Eomi",
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Pos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pos::ALL
            .iter()
            .find(|pos| pos.as_str() == s)
            .copied()
            .ok_or_else(|| format!("알 수 없는 품사 태그: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fromstr_roundtrip() {
        for pos in Pos::ALL {
            let name = pos.to_string();
            assert_eq!(name.parse::<Pos>().unwrap(), pos);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!("Suffix".parse::<Pos>().is_err());
    }

    #[test]
    fn test_serde_as_map_key() {
        // 사전 JSON의 키로 쓰이므로 문자열 직렬화 확인
        let json = serde_json::to_string(&Pos::Noun).unwrap();
        assert_eq!(json, "\"Noun\"");
        let parsed: Pos = serde_json::from_str("\"Josa\"").unwrap();
        assert_eq!(parsed, Pos::Josa);
    }
}
