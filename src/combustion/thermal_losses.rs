use crate::error::{require_moisture, require_non_negative, CalcResult};

const RADIATION_LOSS_FRAC: f64 = 0.02;
const CONVECTION_LOSS_FRAC: f64 = 0.03;
const EXHAUST_LOSS_FRAC: f64 = 0.05;

/// 열손실 계산 결과 [kWh].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalLosses {
    /// 복사 손실
    pub radiation_kwh: f64,
    /// 대류 손실
    pub convection_kwh: f64,
    /// 배기 손실
    pub exhaust_kwh: f64,
}

impl ThermalLosses {
    pub fn total_kwh(&self) -> f64 {
        self.radiation_kwh + self.convection_kwh + self.exhaust_kwh
    }
}

/// 출력 에너지 대비 복사/대류/배기 손실을 계산한다.
///
/// 복사와 대류는 출력의 고정 비율이고, 배기 손실만 함수율에 비례해 커진다.
pub fn thermal_losses(energy_output_kwh: f64, moisture_pct: f64) -> CalcResult<ThermalLosses> {
    let energy_output_kwh = require_non_negative("energy_output_kwh", energy_output_kwh)?;
    let moisture_pct = require_moisture(moisture_pct)?;
    Ok(ThermalLosses {
        radiation_kwh: RADIATION_LOSS_FRAC * energy_output_kwh,
        convection_kwh: CONVECTION_LOSS_FRAC * energy_output_kwh,
        exhaust_kwh: EXHAUST_LOSS_FRAC * energy_output_kwh * (1.0 + moisture_pct / 100.0),
    })
}
