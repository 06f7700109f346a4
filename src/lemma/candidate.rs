//! 역방향 규칙: 표층형 분할 (l, r) -> (어간, 어미) 후보 집합
//!
//! 불규칙 활용 규칙을 거꾸로 적용하여 후보를 만들고, 정방향 활용으로
//! 표층형이 재현되는 후보만 남깁니다. 규칙은 서로 독립적으로
//! 발화하며 후보를 추가하기만 합니다.

use std::collections::{BTreeMap, BTreeSet};

use crate::hangul::{compose, decompose};

use super::conjugate::conjugate;
use super::{split_first, split_last, Lemma};

/// (l, r) 분할 키 -> 미리 정의된 (어간, 어미) 집합
///
/// 규칙으로 복원되지 않는 분할을 보강할 때 씁니다. 표층형 단어 키의
/// 사전([`super::Lemmatizer`]의 predefined)과는 별개의 자료입니다.
pub type PairPredefined = BTreeMap<(String, String), BTreeSet<Lemma>>;

/// 격식체 역방향 규칙으로 (어간, 어미) 후보 생성
///
/// l의 마지막 글자와 r의 첫 글자의 자모를 보고 각 규칙을 적용합니다.
/// 한글이 아닌 글자로 끝나는 l, 한글이 아닌 글자로 시작하는 r는
/// 조용히 빈 집합을 반환합니다.
pub fn lemma_candidates(l: &str, r: &str, predefined: Option<&PairPredefined>) -> BTreeSet<Lemma> {
    let mut validated = BTreeSet::new();

    let Some((l_front, l_last_char)) = split_last(l) else {
        return validated;
    };
    let Some((lc, lv, lj)) = decompose(l_last_char) else {
        return validated;
    };

    let r_first = match split_first(r) {
        Some((c, _)) => match decompose(c) {
            Some(triple) => Some(triple),
            None => return validated,
        },
        None => None,
    };
    let r_rest = split_first(r).map(|(_, rest)| rest).unwrap_or("");
    // r 첫 글자에서 종성을 뗀 열린 음절 (러/라/워/와 판별용)
    let r_first_open = r_first.and_then(|(rc, rv, _)| compose(rc, rv, ' '));

    let mut raw: BTreeSet<(String, String)> = BTreeSet::new();
    raw.insert((l.to_string(), r.to_string()));

    // ㄷ 불규칙 활용: 깨달 + 아 -> 깨닫 + 아
    if lj == 'ㄹ' {
        if let Some((rc, _, _)) = r_first {
            if rc == 'ㅇ' {
                if let Some(syl) = compose(lc, lv, 'ㄷ') {
                    raw.insert((format!("{}{}", l_front, syl), r.to_string()));
                }
            }
        }
    }

    // 르 불규칙 활용: 굴 + 러 -> 구르 + 어
    if lj == 'ㄹ' && matches!(r_first_open, Some('러') | Some('라')) {
        if let (Some((_, rv, rj)), Some(open)) = (r_first, compose(lc, lv, ' ')) {
            if let Some(canon) = compose('ㅇ', rv, rj) {
                raw.insert((
                    format!("{}{}르", l_front, open),
                    format!("{}{}", canon, r_rest),
                ));
            }
        }
    }

    // ㅂ 불규칙 활용: 더러 + 워서 -> 더럽 + 어서
    // 워/와도 ㅂ+려도 아니면 어미를 그대로 둔 채 발화 (검증이 걸러냄)
    if lj == ' ' {
        if let Some(stem_syl) = compose(lc, lv, 'ㅂ') {
            let stem = format!("{}{}", l_front, stem_syl);
            let ending = match r_first_open {
                Some('워') | Some('와') => {
                    let vowel = if r_first_open == Some('와') { 'ㅏ' } else { 'ㅓ' };
                    let rj = r_first.map(|(_, _, j)| j).unwrap_or(' ');
                    compose('ㅇ', vowel, rj).map(|c| format!("{}{}", c, r_rest))
                }
                _ if r_rest.starts_with('려') => {
                    let rj = r_first.map(|(_, _, j)| j).unwrap_or(' ');
                    compose('ㅇ', 'ㅜ', rj).map(|c| format!("{}{}", c, r_rest))
                }
                _ => Some(r.to_string()),
            };
            if let Some(ending) = ending {
                raw.insert((stem, ending));
            }
        }
    }

    // 어미 첫 글자가 종성일 경우: 입 + 니다 -> 이 + ㅂ니다
    if matches!(lj, 'ㄴ' | 'ㄹ' | 'ㅁ' | 'ㅂ' | 'ㅆ') {
        for jong in [' ', 'ㄹ', 'ㅂ', 'ㅎ'] {
            if let Some(syl) = compose(lc, lv, jong) {
                raw.insert((format!("{}{}", l_front, syl), format!("{}{}", lj, r)));
            }
        }
    }

    // ㅅ 불규칙 활용: 부 + 어 -> 붓 + 어 (예외: 벗 + 어 -> 벗어)
    if lj == ' ' && l_last_char != '벗' {
        if let Some((rc, _, _)) = r_first {
            if rc == 'ㅇ' {
                if let Some(syl) = compose(lc, lv, 'ㅅ') {
                    raw.insert((format!("{}{}", l_front, syl), r.to_string()));
                }
            }
        }
    }

    // 우 불규칙 활용: 똥퍼 -> 똥푸 + 어
    if compose(lc, lv, ' ') == Some('퍼') {
        if let Some(canon) = compose('ㅇ', lv, lj) {
            raw.insert((format!("{}푸", l_front), format!("{}{}", canon, r)));
        }
    }

    // 우 축약 복원: 줬 + 어 -> 주 + 었어
    if lv == 'ㅝ' {
        if let (Some(stem_syl), Some(canon)) = (compose(lc, 'ㅜ', ' '), compose('ㅇ', 'ㅓ', lj)) {
            raw.insert((
                format!("{}{}", l_front, stem_syl),
                format!("{}{}", canon, r),
            ));
        }
    }

    // 오 축약 복원: 왔 + 어 -> 오 + 았어
    if lv == 'ㅘ' {
        if let (Some(stem_syl), Some(canon)) = (compose(lc, 'ㅗ', ' '), compose('ㅇ', 'ㅏ', lj)) {
            raw.insert((
                format!("{}{}", l_front, stem_syl),
                format!("{}{}", canon, r),
            ));
        }
    }

    // ㅡ 탈락 불규칙 활용: 꺼 -> 끄 + 어 / 텄 + 어 -> 트 + 었어
    if lv == 'ㅓ' || lv == 'ㅏ' {
        if let (Some(stem_syl), Some(canon)) = (compose(lc, 'ㅡ', ' '), compose('ㅇ', lv, lj)) {
            raw.insert((
                format!("{}{}", l_front, stem_syl),
                format!("{}{}", canon, r),
            ));
        }
    }

    // ㅡ 탈락 불규칙 활용: 모 + 았다 -> 모으 + 았다
    if lj == ' ' {
        if let Some((rc, rv, _)) = r_first {
            if rc == 'ㅇ' && (rv == 'ㅏ' || rv == 'ㅓ') {
                raw.insert((format!("{}으", l), r.to_string()));
            }
        }
    }

    // 여 불규칙 활용: 했 + 다 -> 하 + 았다 / 해 + 라니깐 -> 하 + 아라니깐
    if lc == 'ㅎ' && lv == 'ㅐ' {
        if let Some(canon) = compose('ㅇ', 'ㅏ', lj) {
            raw.insert((format!("{}하", l_front), format!("{}{}", canon, r)));
        }
    }

    if matches!(lj, ' ' | 'ㄴ' | 'ㄹ' | 'ㅂ' | 'ㅆ') {
        // ㅎ 탈락 불규칙 활용: 파라 + 면 -> 파랗 + 면
        if lv == 'ㅏ' || lv == 'ㅓ' {
            if let Some(syl) = compose(lc, lv, 'ㅎ') {
                let ending = if lj == ' ' {
                    r.to_string()
                } else {
                    format!("{}{}", lj, r)
                };
                raw.insert((format!("{}{}", l_front, syl), ending));
            }
        }
        // ㅎ 축약 불규칙 활용: 파랬 + 다 -> 파랗 + 았다, 시퍼렜 + 다 -> 시퍼렇 + 었다
        if lv == 'ㅐ' || lv == 'ㅔ' {
            let vowel = if lv == 'ㅔ' { 'ㅓ' } else { 'ㅏ' };
            // 예외: 그래 -> 그렇 + 아
            let stem = if l_front.ends_with('그') && lc == 'ㄹ' {
                Some(format!("{}렇", l_front))
            } else {
                compose(lc, vowel, 'ㅎ').map(|syl| format!("{}{}", l_front, syl))
            };
            if let (Some(stem), Some(canon)) = (stem, compose('ㅇ', vowel, lj)) {
                raw.insert((stem, format!("{}{}", canon, r)));
            }
        }
    }

    // 이었 -> 였 축약 복원: 졌 + 어 -> 지 + 었어, 였 + 어 -> 이 + 었어
    // 종성을 ㅅ으로 쓴 맞춤법 오류(좋아졋)도 함께 처리
    if matches!(lj, 'ㅆ' | 'ㅅ' | ' ') && lv == 'ㅕ' {
        if let (Some(stem_syl), Some(canon)) = (compose(lc, 'ㅣ', ' '), compose('ㅇ', 'ㅓ', lj)) {
            raw.insert((
                format!("{}{}", l_front, stem_syl),
                format!("{}{}", canon, r),
            ));
        }
    }

    // 재활용 검증: 표층형이 재현되는 후보만 남김
    let word = format!("{}{}", l, r);
    for (stem, ending) in raw {
        let Some((ending_first, _)) = split_first(&ending) else {
            continue; // 빈 어미 제외
        };
        if let Some((_, _, ej)) = decompose(ending_first) {
            if ej == 'ㅎ' {
                continue;
            }
        }
        if conjugate(&stem, &ending).contains(&word) {
            validated.insert(Lemma { stem, ending });
        }
    }

    // 미리 정의된 분할 보강
    if let Some(predefined) = predefined {
        if let Some(pairs) = predefined.get(&(l.to_string(), r.to_string())) {
            validated.extend(pairs.iter().cloned());
        }
    }

    validated
}

/// 구어체(채팅) 역방향 규칙
///
/// 어절 끝에 붙은 이모티콘성 종성(ㄷ, ㅂ, ㅅ, ㅇ, ㅋ, ㅎ)을 떼고
/// 격식체 규칙을 다시 적용합니다. (아닝 -> 아니, 그랰 -> 그래)
pub fn lemma_candidates_chat(
    l: &str,
    r: &str,
    predefined: Option<&PairPredefined>,
) -> BTreeSet<Lemma> {
    fn is_emoticon(jong: char) -> bool {
        matches!(jong, 'ㄷ' | 'ㅂ' | 'ㅅ' | 'ㅇ' | 'ㅋ' | 'ㅎ')
    }

    let mut candidates = BTreeSet::new();

    if r.is_empty() {
        // 마지막 종성이 이모티콘으로 의심되는 경우
        let Some((l_front, l_last_char)) = split_last(l) else {
            return candidates;
        };
        let Some((lc, lv, lj)) = decompose(l_last_char) else {
            return candidates;
        };
        if is_emoticon(lj) {
            if let Some(open) = compose(lc, lv, ' ') {
                let stripped = format!("{}{}", l_front, open);
                candidates.extend(lemma_candidates(&stripped, "", predefined));
                candidates.insert(Lemma {
                    stem: stripped,
                    ending: String::new(),
                });
            }
        }
    } else {
        // 어미의 종성이 이모티콘으로 의심되는 경우
        let Some((r_front, r_last_char)) = split_last(r) else {
            return candidates;
        };
        let Some((rc, rv, rj)) = decompose(r_last_char) else {
            return candidates;
        };
        if is_emoticon(rj) {
            if let Some(open) = compose(rc, rv, ' ') {
                let stripped = format!("{}{}", r_front, open);
                candidates.extend(lemma_candidates(l, &stripped, predefined));
            }
        }
    }

    candidates
}
