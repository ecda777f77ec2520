//! 결과 내보내기 (CSV/JSON).

use std::io::Write;
use thiserror::Error;

use crate::i18n::Translator;
use crate::results::ResultSet;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV 쓰기 오류: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON 쓰기 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

/// 번역된 항목 이름을 헤더로, 값을 한 행으로 쓰는 CSV를 만든다.
pub fn write_csv<W: Write>(
    results: &ResultSet,
    tr: &Translator,
    out: W,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(results.iter().map(|(k, _)| k.label(tr)))?;
    writer.write_record(results.iter().map(|(_, v)| v.to_string()))?;
    writer.flush()?;
    Ok(())
}

/// 고정 식별자를 키로 하는 JSON 객체를 쓴다.
pub fn write_json<W: Write>(results: &ResultSet, mut out: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut out, results)?;
    writeln!(out)?;
    Ok(())
}
