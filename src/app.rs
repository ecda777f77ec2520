use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::combustion::{
    compute_base_results, compute_environmental_results, EnvironmentalStudyInput, OperatingInputs,
};
use crate::config::{Config, ConfigError};
use crate::error::CalcError;
use crate::export::{self, ExportError};
use crate::i18n::{keys, Translator};
use crate::results::ResultSet;
use crate::ui_cli::{self, Cli, Command, MenuChoice, OutputFormat};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 연소 성능 계산 오류
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    /// 결과 내보내기 오류
    #[error("내보내기 오류: {0}")]
    Export(#[from] ExportError),
}

/// 기본 결과와 환경 검토 결과를 계산해 하나의 결과로 합친다.
pub fn calculate(
    base: &OperatingInputs,
    study: &EnvironmentalStudyInput,
) -> Result<ResultSet, CalcError> {
    let base_results = compute_base_results(base)?;
    let study_results = compute_environmental_results(study)?;
    Ok(base_results.merged(&study_results))
}

/// 서브커맨드가 있으면 한 번 실행하고, 없으면 대화형 메뉴 루프를 돈다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    match &cli.command {
        Some(Command::Fuels) => ui_cli::print_fuels(tr),
        Some(Command::Suggestions) => ui_cli::print_suggestions(tr),
        Some(Command::Calculate(args)) => {
            let (base, study) = args.to_inputs(config);
            let results = calculate(&base, &study)?;
            match &args.output {
                Some(path) => write_results(&results, args.format, tr, path)?,
                None => write_results_stdout(&results, args.format, tr, config, args.projection)?,
            }
        }
        None => run_interactive(config, tr)?,
    }
    Ok(())
}

fn run_interactive(config: &Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, config)?,
            MenuChoice::Fuels => ui_cli::print_fuels(tr),
            MenuChoice::Suggestions => ui_cli::print_suggestions(tr),
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 결과를 파일로 쓴다. 표 형식은 CSV로 간주한다.
pub fn write_results(
    results: &ResultSet,
    format: OutputFormat,
    tr: &Translator,
    path: &Path,
) -> Result<(), AppError> {
    let file = File::create(path)?;
    match format {
        OutputFormat::Json => export::write_json(results, file)?,
        OutputFormat::Csv | OutputFormat::Table => export::write_csv(results, tr, file)?,
    }
    tracing::info!(path = %path.display(), ?format, "results exported");
    Ok(())
}

fn write_results_stdout(
    results: &ResultSet,
    format: OutputFormat,
    tr: &Translator,
    config: &Config,
    projection: bool,
) -> Result<(), AppError> {
    let stdout = io::stdout().lock();
    match format {
        OutputFormat::Json => export::write_json(results, stdout)?,
        OutputFormat::Csv => export::write_csv(results, tr, stdout)?,
        OutputFormat::Table => {
            ui_cli::print_results(results, tr);
            if projection {
                ui_cli::print_projection(results, tr, config.projection_years);
            }
        }
    }
    Ok(())
}
