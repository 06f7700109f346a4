//! 한글 음절 조합/분해 코덱
//!
//! 완성형 음절 코드포인트와 (초성, 중성, 종성) 자모 삼중쌍 사이의
//! 양방향 변환을 제공합니다. 자모는 인덱스가 아닌 문자(`char`)로
//! 다루며, 비어 있는 성분은 `' '`로 표현합니다.

/// 완성형 한글 시작 코드포인트 (가)
pub const KOR_BEGIN: u32 = 44032;
/// 완성형 한글 끝 코드포인트 (힣)
pub const KOR_END: u32 = 55203;
/// 초성 하나가 차지하는 코드포인트 간격 (21 * 28)
const CHOSUNG_BASE: u32 = 588;
/// 중성 하나가 차지하는 코드포인트 간격 (28)
const JUNGSUNG_BASE: u32 = 28;
/// 호환용 자음 자모 영역 (ㄱ ~ ㅎ)
const JAUM_BEGIN: u32 = 12593;
const JAUM_END: u32 = 12622;
/// 호환용 모음 자모 영역 (ㅏ ~ ㅣ)
const MOUM_BEGIN: u32 = 12623;
const MOUM_END: u32 = 12643;

/// 초성 19자 (유니코드 NFD 순서)
pub const CHOSUNG_LIST: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 21자 (유니코드 NFD 순서)
pub const JUNGSUNG_LIST: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 28자 — 첫 원소 `' '`는 종성 없음
pub const JONGSUNG_LIST: [char; 28] = [
    ' ', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ',
    'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 코드포인트 조회 에러
#[derive(Debug)]
pub enum HangulError {
    /// 한 글자가 아닌 입력
    NotSingleChar(String),
}

impl std::fmt::Display for HangulError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HangulError::NotSingleChar(s) => {
                write!(f, "한 글자 입력이 필요합니다: {:?}", s)
            }
        }
    }
}

impl std::error::Error for HangulError {}

/// 한 글자 문자열의 코드포인트 반환
pub fn to_base(s: &str) -> Result<u32, HangulError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c as u32),
        _ => Err(HangulError::NotSingleChar(s.to_string())),
    }
}

/// 초성/중성/종성 자모 문자로 완성형 음절 조합
///
/// 종성이 없으면 `' '`를 전달합니다. 자모가 표준 목록에 없으면 `None`.
pub fn compose(chosung: char, jungsung: char, jongsung: char) -> Option<char> {
    let cho = CHOSUNG_LIST.iter().position(|&c| c == chosung)? as u32;
    let jung = JUNGSUNG_LIST.iter().position(|&c| c == jungsung)? as u32;
    let jong = JONGSUNG_LIST.iter().position(|&c| c == jongsung)? as u32;
    char::from_u32(KOR_BEGIN + CHOSUNG_BASE * cho + JUNGSUNG_BASE * jung + jong)
}

/// 한글 문자를 (초성, 중성, 종성) 자모로 분해
///
/// - 완성형 음절: 세 성분 모두 채워진 자모 문자 (종성 없으면 `' '`)
/// - 낱자음: `(자음, ' ', ' ')`
/// - 낱모음: `(' ', 모음, ' ')`
/// - 한글이 아니면 `None`
pub fn decompose(c: char) -> Option<(char, char, char)> {
    let i = c as u32;
    if (JAUM_BEGIN..=JAUM_END).contains(&i) {
        return Some((c, ' ', ' '));
    }
    if (MOUM_BEGIN..=MOUM_END).contains(&i) {
        return Some((' ', c, ' '));
    }
    if !(KOR_BEGIN..=KOR_END).contains(&i) {
        return None;
    }
    let offset = i - KOR_BEGIN;
    let cho = offset / CHOSUNG_BASE;
    let jung = (offset % CHOSUNG_BASE) / JUNGSUNG_BASE;
    let jong = offset % JUNGSUNG_BASE;
    Some((
        CHOSUNG_LIST[cho as usize],
        JUNGSUNG_LIST[jung as usize],
        JONGSUNG_LIST[jong as usize],
    ))
}

/// 한글 문자인지 확인 (완성형 + 낱자모)
pub fn is_korean(c: char) -> bool {
    let i = c as u32;
    (KOR_BEGIN..=KOR_END).contains(&i)
        || (JAUM_BEGIN..=JAUM_END).contains(&i)
        || (MOUM_BEGIN..=MOUM_END).contains(&i)
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_complete_korean(c: char) -> bool {
    (KOR_BEGIN..=KOR_END).contains(&(c as u32))
}

/// 낱자음(ㄱ-ㅎ)인지 확인
pub fn is_jaum(c: char) -> bool {
    (JAUM_BEGIN..=JAUM_END).contains(&(c as u32))
}

/// 낱모음(ㅏ-ㅣ)인지 확인
pub fn is_moum(c: char) -> bool {
    (MOUM_BEGIN..=MOUM_END).contains(&(c as u32))
}

/// 아라비아 숫자인지 확인
pub fn is_number(c: char) -> bool {
    c.is_ascii_digit()
}

/// 영문 알파벳인지 확인
pub fn is_english(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// 문장 부호(! " ' , . ? `)인지 확인
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '!' | '"' | '\'' | ',' | '.' | '?' | '`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        assert_eq!(compose('ㄱ', 'ㅏ', ' '), Some('가'));
        assert_eq!(compose('ㄱ', 'ㅏ', 'ㄱ'), Some('각'));
        assert_eq!(compose('ㅎ', 'ㅏ', 'ㄴ'), Some('한'));
        assert_eq!(compose('ㄱ', 'ㅡ', 'ㄹ'), Some('글'));

        // 목록에 없는 자모
        assert_eq!(compose('a', 'ㅏ', ' '), None);
        assert_eq!(compose('ㄱ', 'ㄱ', ' '), None);
    }

    #[test]
    fn test_decompose() {
        assert_eq!(decompose('가'), Some(('ㄱ', 'ㅏ', ' ')));
        assert_eq!(decompose('각'), Some(('ㄱ', 'ㅏ', 'ㄱ')));
        assert_eq!(decompose('한'), Some(('ㅎ', 'ㅏ', 'ㄴ')));
        assert_eq!(decompose('랗'), Some(('ㄹ', 'ㅏ', 'ㅎ')));

        // 낱자모
        assert_eq!(decompose('ㄱ'), Some(('ㄱ', ' ', ' ')));
        assert_eq!(decompose('ㅏ'), Some((' ', 'ㅏ', ' ')));

        // 한글이 아닌 문자
        assert_eq!(decompose('a'), None);
        assert_eq!(decompose('1'), None);
    }

    #[test]
    fn test_roundtrip_all_syllables() {
        // 가(44032) ~ 힣(55203) 전 구간 왕복
        for i in KOR_BEGIN..=KOR_END {
            let c = char::from_u32(i).unwrap();
            let (cho, jung, jong) = decompose(c).unwrap();
            assert_eq!(compose(cho, jung, jong), Some(c));
        }
    }

    #[test]
    fn test_roundtrip_all_triples() {
        for &cho in CHOSUNG_LIST.iter() {
            for &jung in JUNGSUNG_LIST.iter() {
                for &jong in JONGSUNG_LIST.iter() {
                    let c = compose(cho, jung, jong).unwrap();
                    assert_eq!(decompose(c), Some((cho, jung, jong)));
                }
            }
        }
    }

    #[test]
    fn test_to_base() {
        assert_eq!(to_base("가").unwrap(), 44032);
        assert_eq!(to_base("A").unwrap(), 65);

        assert!(to_base("").is_err());
        assert!(to_base("가나").is_err());
    }

    #[test]
    fn test_predicates() {
        assert!(is_korean('가'));
        assert!(is_korean('ㄱ'));
        assert!(is_korean('ㅏ'));
        assert!(!is_korean('a'));

        assert!(is_complete_korean('힣'));
        assert!(!is_complete_korean('ㄱ'));

        assert!(is_jaum('ㅎ'));
        assert!(!is_jaum('ㅏ'));
        assert!(is_moum('ㅣ'));
        assert!(!is_moum('ㄱ'));

        assert!(is_number('7'));
        assert!(is_english('z'));
        assert!(is_punctuation('?'));
        assert!(!is_punctuation(';'));
    }
}
