use crate::error::{require_moisture, require_positive, CalcResult};

/// 연소 공기량 비례 계수 (공기 중 N2/O2 몰비)
const AIR_DEMAND_FACTOR: f64 = 3.76;
const DRY_FLUE_GAS_FACTOR: f64 = 1.1;

/// 연소 공기/배가스 특성 [kWh/kg 기준 비례값].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionProperties {
    /// 이론 공기 요구량(pouvoir comburivore)
    pub air_demand: f64,
    /// 건배가스 발생 능력
    pub dry_flue_gas_power: f64,
    /// 습배가스 발생 능력
    pub wet_flue_gas_power: f64,
}

/// LHV에 비례하는 단순 모델로 연소 공기량과 배가스 능력을 근사한다.
/// 화학양론 계산이 아니라 비례 근사다.
pub fn combustion_properties(
    lower_heating_value: f64,
    moisture_pct: f64,
) -> CalcResult<CombustionProperties> {
    let lhv = require_positive("lower_heating_value", lower_heating_value)?;
    let moisture_pct = require_moisture(moisture_pct)?;
    let dry = lhv * DRY_FLUE_GAS_FACTOR;
    Ok(CombustionProperties {
        air_demand: lhv * AIR_DEMAND_FACTOR,
        dry_flue_gas_power: dry,
        wet_flue_gas_power: dry * (1.0 + moisture_pct / 100.0),
    })
}
