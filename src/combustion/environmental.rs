use crate::error::{require_finite, CalcResult};
use crate::results::{MetricKey, ResultSet};

/// 배가스 중 CO2 비율 (질량유량 대비 고정 경험계수)
const CO2_FRACTION: f64 = 0.57;
const H2O_FRACTION: f64 = 0.21;
const HUMIDITY_FRACTION: f64 = 0.14;

/// 배가스 CO2 체적 함량 [%]. 입력과 무관한 예시 고정값이다.
pub const CO2_PERCENTAGE_BY_VOLUME: f64 = 18.78;

/// 환경/기술 검토용 입력. 연료 선택과 무관하다.
#[derive(Debug, Clone)]
pub struct EnvironmentalStudyInput {
    /// 주변 온도 [°C]
    pub ambient_temp_c: f64,
    /// 배가스 온도 [°C]
    pub fumes_temp_c: f64,
    /// 바이오매스 소비량 [t/월]. 보고용이며 계산에 쓰이지 않는다.
    pub biomass_consumption_tonnes_per_month: f64,
    /// 바이오매스 질량유량 [kg/s]. 보고용이며 계산에 쓰이지 않는다.
    pub mass_flow_biomass_kg_s: f64,
    /// 배가스 질량유량 [kg/s]
    pub mass_flow_fumes_kg_s: f64,
    /// 배가스 비열 [J/kg·K]
    pub fumes_heat_capacity_j_kg_k: f64,
    /// 벽체 면적 [m²]
    pub wall_area_m2: f64,
    /// 열관류율 [W/m²·°C]
    pub transmission_coeff_w_m2_c: f64,
}

/// 배가스 조성 체적과 배가스/벽체 손실을 계산한다.
///
/// 체적 값은 질량유량에 고정 비율을 곱한 근사다. 온도와 계수는 범위 검사 없이
/// 그대로 계산에 쓰이고, NaN/무한대만 거부한다.
pub fn compute_environmental_results(input: &EnvironmentalStudyInput) -> CalcResult<ResultSet> {
    let ambient = require_finite("ambient_temp_c", input.ambient_temp_c)?;
    let fumes = require_finite("fumes_temp_c", input.fumes_temp_c)?;
    let m_fumes = require_finite("mass_flow_fumes_kg_s", input.mass_flow_fumes_kg_s)?;
    let cp = require_finite("fumes_heat_capacity_j_kg_k", input.fumes_heat_capacity_j_kg_k)?;
    let area = require_finite("wall_area_m2", input.wall_area_m2)?;
    let u = require_finite("transmission_coeff_w_m2_c", input.transmission_coeff_w_m2_c)?;

    let delta_t = fumes - ambient;
    let mut out = ResultSet::new();
    out.insert(MetricKey::VolumeCo2, m_fumes * CO2_FRACTION);
    out.insert(MetricKey::VolumeH2o, m_fumes * H2O_FRACTION);
    out.insert(MetricKey::VolumeHumidity, m_fumes * HUMIDITY_FRACTION);
    out.insert(MetricKey::Co2PercentageByVolume, CO2_PERCENTAGE_BY_VOLUME);
    out.insert(MetricKey::FlueGasLosses, m_fumes * cp * delta_t);
    out.insert(MetricKey::AmbientLosses, area * u * delta_t);

    tracing::debug!(delta_t, m_fumes, "environmental results computed");
    Ok(out)
}
