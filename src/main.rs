//! numeral - 로마 숫자 / 영어 숫자 단어 변환기

use clap::Parser;
use numeral::config::load_config;
use numeral::{Converter, Mode};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "numeral",
    version,
    about = "Convert numbers to and from Roman numerals and English words"
)]
struct Cli {
    /// auto, to-roman, from-roman, to-words, from-words (기본값: 설정 파일)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// 로마 숫자를 소문자로 출력
    #[arg(long)]
    lowercase: bool,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    json: bool,

    /// 변환할 입력. 없으면 표준 입력에서 한 줄씩 읽음
    input: Vec<String>,
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config();

    let mode = cli.mode.unwrap_or(config.default_mode);
    let converter = config
        .converter()
        .with_lowercase_roman(cli.lowercase || config.lowercase_roman);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut all_ok = true;

    if !cli.input.is_empty() {
        // 여러 인자는 한 입력으로 합침 ("forty two")
        let input = cli.input.join(" ");
        all_ok = run_one(&converter, mode, &input, cli.json, &mut out);
    } else {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("표준 입력 읽기 실패: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            all_ok &= run_one(&converter, mode, &line, cli.json, &mut out);
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// 입력 한 건 변환 후 출력. 실패 시 stderr에 메시지를 쓰고 false
fn run_one(converter: &Converter, mode: Mode, input: &str, json: bool, out: &mut impl Write) -> bool {
    let conversion = match converter.convert(mode, input) {
        Ok(conversion) => conversion,
        Err(e) => {
            eprintln!("error: {}", e);
            return false;
        }
    };

    let written = if json {
        match serde_json::to_string(&conversion) {
            Ok(line) => writeln!(out, "{}", line),
            Err(e) => {
                log::error!("JSON 직렬화 실패: {}", e);
                return false;
            }
        }
    } else {
        writeln!(out, "{}", conversion.output)
    };

    if let Err(e) = written {
        log::error!("출력 실패: {}", e);
        return false;
    }
    true
}
