//! 정방향 활용: (어간, 어미) -> 표층형 집합
//!
//! 역방향 규칙이 만든 후보를 검증하는 데 쓰입니다. 불규칙 활용마다
//! 도달 가능한 표층형을 모두 생성하며, 실제 단어와의 대조는
//! 호출 측에서 수행합니다.

use std::collections::BTreeSet;

use crate::hangul::{compose, decompose};

use super::{split_first, split_last};

/// (어간, 어미)를 활용하여 나올 수 있는 표층형 집합 생성
///
/// 규칙 활용(단순 연접)과 불규칙 활용을 모두 적용합니다.
/// 어미가 비어 있으면 어간만 반환합니다.
pub fn conjugate(stem: &str, ending: &str) -> BTreeSet<String> {
    let mut surfaces = BTreeSet::new();

    let Some((stem_front, stem_last)) = split_last(stem) else {
        return surfaces;
    };
    if ending.is_empty() {
        surfaces.insert(stem.to_string());
        return surfaces;
    }

    // 규칙 활용
    surfaces.insert(format!("{}{}", stem, ending));

    let Some((lc, lv, lj)) = decompose(stem_last) else {
        return surfaces;
    };
    let Some((ending_first, ending_rest)) = split_first(ending) else {
        return surfaces;
    };
    let Some((ec, ev, ej)) = decompose(ending_first) else {
        return surfaces;
    };

    // ㄷ 불규칙 활용: 깨닫 + 아 -> 깨달아
    if lj == 'ㄷ' && ec == 'ㅇ' {
        if let Some(syl) = compose(lc, lv, 'ㄹ') {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending));
        }
    }

    // 르 불규칙 활용: 구르 + 어 -> 굴러 / 구르 + 아 -> 굴라
    if stem_last == '르' && ec == 'ㅇ' && (ev == 'ㅓ' || ev == 'ㅏ') {
        if let Some((front2, y)) = split_last(stem_front) {
            if let Some((yc, yv, _)) = decompose(y) {
                if let (Some(l_syl), Some(r_syl)) = (compose(yc, yv, 'ㄹ'), compose('ㄹ', ev, ej))
                {
                    surfaces.insert(format!("{}{}{}{}", front2, l_syl, r_syl, ending_rest));
                }
            }
        }
    }

    if lj == 'ㅂ' && ec == 'ㅇ' {
        // ㅂ 불규칙 활용: 더럽 + 어서 -> 더러워서 / 돕 + 아 -> 도와
        let harmonized = match ev {
            'ㅓ' => Some('ㅝ'),
            'ㅏ' => Some('ㅘ'),
            _ => None,
        };
        if let Some(vowel) = harmonized {
            if let (Some(open), Some(r_syl)) = (compose(lc, lv, ' '), compose('ㅇ', vowel, ej)) {
                surfaces.insert(format!("{}{}{}{}", stem_front, open, r_syl, ending_rest));
            }
        }
        // ㅂ 탈락: 고맙 + 운 -> 고마운, 덥 + 울려나 -> 더울려나
        if ev == 'ㅜ' {
            if let Some(open) = compose(lc, lv, ' ') {
                surfaces.insert(format!("{}{}{}", stem_front, open, ending));
            }
        }
    }

    // 어미 첫 글자가 종성 자모일 경우: 이 + ㅂ니다 -> 입니다 / 하 + ㅆ다 -> 핬다
    // 어간 종성 ㄹ/ㅂ/ㅎ은 새 종성으로 교체 (갈 + ㅂ니다 -> 갑니다)
    if ev == ' ' {
        if let Some(syl) = compose(lc, lv, ending_first) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    // ㅅ 불규칙 활용: 붓 + 어 -> 부어 (예외: 벗 + 어 -> 벗어)
    if lj == 'ㅅ' && stem_last != '벗' && ec == 'ㅇ' {
        if let Some(open) = compose(lc, lv, ' ') {
            surfaces.insert(format!("{}{}{}", stem_front, open, ending));
        }
    }

    // 우 불규칙 활용: 푸 + 어 -> 퍼 / 푸 + 었다 -> 펐다
    if stem_last == '푸' && ec == 'ㅇ' && ev == 'ㅓ' {
        if let Some(syl) = compose('ㅍ', 'ㅓ', ej) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    // 우 축약: 주 + 었어 -> 줬어
    if lv == 'ㅜ' && lj == ' ' && ec == 'ㅇ' && ev == 'ㅓ' {
        if let Some(syl) = compose(lc, 'ㅝ', ej) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    // 오 축약: 오 + 았어 -> 왔어
    if lv == 'ㅗ' && lj == ' ' && ec == 'ㅇ' && ev == 'ㅏ' {
        if let Some(syl) = compose(lc, 'ㅘ', ej) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    // ㅡ 탈락 불규칙 활용: 끄 + 어 -> 꺼 / 트 + 었어 -> 텄어
    // 어간이 '으'로 끝나는 경우(모으 + 았다 -> 모았다)도 같은 꼴
    if lv == 'ㅡ' && lj == ' ' && ec == 'ㅇ' && (ev == 'ㅓ' || ev == 'ㅏ') {
        if let Some(syl) = compose(lc, ev, ej) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    // 여 불규칙 활용: 하 + 았다 -> 했다 / 하 + 아라니깐 -> 해라니깐
    if stem_last == '하' && ec == 'ㅇ' && ev == 'ㅏ' {
        if let Some(syl) = compose('ㅎ', 'ㅐ', ej) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    if lj == 'ㅎ' && (lv == 'ㅏ' || lv == 'ㅓ') {
        // ㅎ 탈락 불규칙 활용: 파랗 + 면 -> 파라면
        if let Some(open) = compose(lc, lv, ' ') {
            surfaces.insert(format!("{}{}{}", stem_front, open, ending));
        }
        // ㅎ 축약 불규칙 활용: 파랗 + 았다 -> 파랬다, 시퍼렇 + 었다 -> 시퍼렜다
        if ec == 'ㅇ' && ev == lv {
            let contracted = if lv == 'ㅏ' { 'ㅐ' } else { 'ㅔ' };
            if let Some(syl) = compose(lc, contracted, ej) {
                surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
            }
        }
        // 예외: 그렇 + 아 -> 그래
        if stem_last == '렇' && stem_front.ends_with('그') && ec == 'ㅇ' && ev == 'ㅏ' {
            if let Some(syl) = compose('ㄹ', 'ㅐ', ej) {
                surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
            }
        }
    }

    // 이었 -> 였 축약: 지 + 었어 -> 졌어, 이 + 었다 -> 였다
    if lv == 'ㅣ' && lj == ' ' && ec == 'ㅇ' && ev == 'ㅓ' && matches!(ej, 'ㅆ' | 'ㅅ' | ' ') {
        if let Some(syl) = compose(lc, 'ㅕ', ej) {
            surfaces.insert(format!("{}{}{}", stem_front, syl, ending_rest));
        }
    }

    surfaces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular() {
        assert!(conjugate("먹", "다").contains("먹다"));
        assert!(conjugate("파랗", "다").contains("파랗다"));
    }

    #[test]
    fn test_empty_ending() {
        let surfaces = conjugate("먹", "");
        assert_eq!(surfaces.len(), 1);
        assert!(surfaces.contains("먹"));
    }

    #[test]
    fn test_d_irregular() {
        // ㄷ -> ㄹ
        assert!(conjugate("깨닫", "아").contains("깨달아"));
        assert!(conjugate("묻", "었다").contains("물었다"));
    }

    #[test]
    fn test_reu_irregular() {
        assert!(conjugate("구르", "어").contains("굴러"));
        assert!(conjugate("모르", "았다").contains("몰랐다"));
        // 앞 글자에 종성이 이미 있는 경우
        assert!(conjugate("들르", "었다").contains("들렀다"));
    }

    #[test]
    fn test_b_irregular() {
        assert!(conjugate("더럽", "어서").contains("더러워서"));
        assert!(conjugate("돕", "아").contains("도와"));
        // ㅂ 탈락 + 우 계열 어미
        assert!(conjugate("고맙", "운").contains("고마운"));
    }

    #[test]
    fn test_jamo_initial_ending() {
        assert!(conjugate("이", "ㅂ니다").contains("입니다"));
        // 어간 종성 ㄹ 교체
        assert!(conjugate("갈", "ㅂ니다").contains("갑니다"));
        assert!(conjugate("파랗", "ㄴ데").contains("파란데"));
    }

    #[test]
    fn test_s_irregular() {
        assert!(conjugate("붓", "어").contains("부어"));
        // 예외: 벗은 규칙 활용만
        assert!(!conjugate("벗", "어").contains("버어"));
        assert!(conjugate("벗", "어").contains("벗어"));
    }

    #[test]
    fn test_u_o_contraction() {
        assert!(conjugate("푸", "어").contains("퍼"));
        assert!(conjugate("푸", "었다").contains("펐다"));
        assert!(conjugate("주", "었어").contains("줬어"));
        assert!(conjugate("오", "았어").contains("왔어"));
    }

    #[test]
    fn test_eu_drop() {
        assert!(conjugate("끄", "어").contains("꺼"));
        assert!(conjugate("트", "었어").contains("텄어"));
        assert!(conjugate("모으", "았다").contains("모았다"));
    }

    #[test]
    fn test_yeo_irregular() {
        assert!(conjugate("하", "았다").contains("했다"));
        assert!(conjugate("하", "아라니깐").contains("해라니깐"));
    }

    #[test]
    fn test_h_drop_and_contraction() {
        assert!(conjugate("파랗", "면").contains("파라면"));
        assert!(conjugate("파랗", "았다").contains("파랬다"));
        assert!(conjugate("시퍼렇", "었다").contains("시퍼렜다"));
        // 그렇 예외
        assert!(conjugate("그렇", "아").contains("그래"));
        assert!(conjugate("그렇", "았다").contains("그랬다"));
    }

    #[test]
    fn test_i_eot_contraction() {
        assert!(conjugate("지", "었어").contains("졌어"));
        assert!(conjugate("이", "었다").contains("였다"));
        assert!(conjugate("지", "어서").contains("져서"));
    }

    #[test]
    fn test_non_hangul_stem() {
        // 한글이 아닌 어간은 규칙 활용만
        let surfaces = conjugate("abc", "다");
        assert_eq!(surfaces.len(), 1);
        assert!(surfaces.contains("abc다"));
    }
}
