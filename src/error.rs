use thiserror::Error;

/// 연소 성능 계산 결과 타입.
pub type CalcResult<T> = Result<T, CalcError>;

/// 계산 엔진에서 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// 연료 테이블에 없는 식별자
    #[error("알 수 없는 연료: {0}")]
    UnknownFuel(String),
    /// 입력값이 허용 범위를 벗어남
    #[error("입력 오류: {what} = {value}")]
    InvalidInput { what: &'static str, value: f64 },
}

/// 유한하고 0보다 큰 값인지 확인한다.
pub(crate) fn require_positive(what: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { what, value })
    }
}

/// 유한하고 0 이상인 값인지 확인한다.
pub(crate) fn require_non_negative(what: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { what, value })
    }
}

/// 유한한 값인지만 확인한다. 부호와 크기는 검사하지 않는다.
pub(crate) fn require_finite(what: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput { what, value })
    }
}

/// 함수율(%)이 [0, 100] 범위인지 확인한다.
pub(crate) fn require_moisture(moisture_pct: f64) -> CalcResult<f64> {
    if (0.0..=100.0).contains(&moisture_pct) {
        Ok(moisture_pct)
    } else {
        Err(CalcError::InvalidInput {
            what: "moisture_pct",
            value: moisture_pct,
        })
    }
}
