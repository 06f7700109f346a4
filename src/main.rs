//! eojeol - 어절 단위 한국어 형태소 분석 CLI
//!
//! 품사 사전(JSON)을 로드하고 표준 입력의 문장을 한 줄씩 분석하여
//! 격자를 JSON으로 출력합니다.

use std::io::BufRead;

use eojeol::{Lexicon, LrLookup, TemplateLookup};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let (lexicon_path, use_template) = match args.as_slice() {
        [_, path] => (path.clone(), false),
        [_, path, flag] if flag.as_str() == "--template" => (path.clone(), true),
        _ => {
            eprintln!("사용법: eojeol <사전.json> [--template]");
            eprintln!();
            eprintln!("  표준 입력에서 문장을 한 줄씩 읽어 격자를 JSON으로 출력합니다.");
            eprintln!("  --template  L-R 탐색 대신 기본 템플릿 탐색 사용");
            std::process::exit(2);
        }
    };

    let lexicon = match Lexicon::load(&lexicon_path) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            log::error!("사전 로드 실패: {}", e);
            std::process::exit(1);
        }
    };

    if use_template {
        match TemplateLookup::new(lexicon) {
            Ok(lookup) => run(|sentence| lookup.sentence_lookup(sentence)),
            Err(e) => {
                log::error!("탐색기 구성 실패: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match LrLookup::new(lexicon) {
            Ok(lookup) => run(|sentence| lookup.sentence_lookup(sentence)),
            Err(e) => {
                log::error!("탐색기 구성 실패: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run<F>(lookup: F)
where
    F: Fn(&str) -> Vec<Vec<eojeol::Eojeol>>,
{
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };
        let lattice = lookup(&line);
        match serde_json::to_string(&lattice) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("직렬화 실패: {}", e),
        }
    }
}
