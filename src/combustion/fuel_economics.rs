use crate::error::{require_non_negative, require_positive, CalcResult};

/// 절감 추정 비율 (연료비의 15%, 예시값)
pub const SAVINGS_RATE: f64 = 0.15;

/// 연료 소비/비용 계산 입력.
#[derive(Debug, Clone)]
pub struct FuelConsumptionInput {
    /// 출력 에너지 [kWh]
    pub energy_output_kwh: f64,
    /// 저위발열량 [kWh/kg]
    pub lower_heating_value: f64,
    /// 열효율 (0~1)
    pub thermal_efficiency: f64,
    /// 운전 시간 [h]
    pub operation_duration_hours: f64,
    /// 연료 단가 [통화/톤]
    pub price_per_tonne: f64,
}

/// 연료 소비/비용 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelConsumptionResult {
    /// 시간당 연료 소요량 [kg/h]
    pub fuel_required_kg_per_hour: f64,
    /// 운전 기간 총 연료량 [kg]
    pub total_fuel_kg: f64,
    /// 연료비 [통화]
    pub fuel_cost: f64,
    /// 추정 절감액 [통화]
    pub savings: f64,
}

/// 출력, 발열량, 열효율로 연료 소요량과 비용을 계산한다.
pub fn fuel_consumption(input: FuelConsumptionInput) -> CalcResult<FuelConsumptionResult> {
    let energy = require_non_negative("energy_output_kwh", input.energy_output_kwh)?;
    let lhv = require_positive("lower_heating_value", input.lower_heating_value)?;
    let eff = require_positive("thermal_efficiency", input.thermal_efficiency)?;
    let hours = require_positive("operation_duration_hours", input.operation_duration_hours)?;
    let price = require_non_negative("price_per_tonne", input.price_per_tonne)?;

    let fuel_required_kg_per_hour = energy / (lhv * 1000.0 * eff);
    let total_fuel_kg = fuel_required_kg_per_hour * hours;
    let fuel_cost = total_fuel_kg * price / 1000.0;
    Ok(FuelConsumptionResult {
        fuel_required_kg_per_hour,
        total_fuel_kg,
        fuel_cost,
        savings: fuel_cost * SAVINGS_RATE,
    })
}

/// 연료량과 탄소 함량으로 CO2 배출량 [kg]을 계산한다.
pub fn co2_emissions_kg(fuel_kg: f64, carbon_pct: f64) -> f64 {
    fuel_kg * carbon_pct / 100.0
}

/// 1..=years 년 동안의 누적 연료비 추이를 만든다. 연간 비용은 `fuel_cost`로 일정하다고 본다.
pub fn cost_projection(fuel_cost: f64, years: u32) -> Vec<(u32, f64)> {
    (1..=years).map(|y| (y, fuel_cost * f64::from(y))).collect()
}
