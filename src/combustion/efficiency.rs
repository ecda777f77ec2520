use crate::error::{require_moisture, require_positive, CalcResult};

/// 효율 지표별 클램프 구간 (0~1 분율).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EfficiencyBounds {
    pub min: f64,
    pub max: f64,
}

impl EfficiencyBounds {
    /// 값을 [min, max]로 자른다.
    pub fn clamp(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            tracing::trace!(value, clamped, min = self.min, max = self.max, "efficiency clamped");
        }
        clamped
    }
}

/// 열효율 허용 구간.
pub const THERMAL_EFFICIENCY_BOUNDS: EfficiencyBounds = EfficiencyBounds { min: 0.5, max: 0.9 };
/// 기술 효율 허용 구간. 열효율보다 하한이 낮다.
pub const TECHNICAL_EFFICIENCY_BOUNDS: EfficiencyBounds = EfficiencyBounds { min: 0.4, max: 0.9 };

const BASE_THERMAL_EFFICIENCY: f64 = 0.85;
/// 함수율 1%당 열효율 감소분
const THERMAL_DERATE_PER_MOISTURE_PCT: f64 = 0.001;
/// 함수율 1%당 운전 열화 계수
const TECHNICAL_DERATE_PER_MOISTURE_PCT: f64 = 0.0005;

/// 함수율로부터 열효율(분율)을 계산한다. 젖은 연료일수록 효율이 낮다.
pub fn thermal_efficiency(moisture_pct: f64) -> CalcResult<f64> {
    let moisture_pct = require_moisture(moisture_pct)?;
    let efficiency = BASE_THERMAL_EFFICIENCY - THERMAL_DERATE_PER_MOISTURE_PCT * moisture_pct;
    Ok(THERMAL_EFFICIENCY_BOUNDS.clamp(efficiency))
}

/// 열효율에 함수율 기반 운전 열화를 반영한 기술 효율을 계산한다.
pub fn technical_efficiency(thermal_eff: f64, moisture_pct: f64) -> CalcResult<f64> {
    let thermal_eff = require_positive("thermal_efficiency", thermal_eff)?;
    let moisture_pct = require_moisture(moisture_pct)?;
    let degradation = 1.0 - TECHNICAL_DERATE_PER_MOISTURE_PCT * moisture_pct;
    Ok(TECHNICAL_EFFICIENCY_BOUNDS.clamp(thermal_eff * degradation))
}
