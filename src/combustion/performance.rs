use crate::combustion::{
    co2_emissions_kg, combustion_properties, fuel_consumption, technical_efficiency,
    thermal_efficiency, thermal_losses, FuelConsumptionInput,
};
use crate::error::{require_non_negative, require_positive, CalcResult};
use crate::fuel_db;
use crate::results::{MetricKey, ResultSet};

/// 계산 요청마다 새로 만드는 운전 조건.
#[derive(Debug, Clone)]
pub struct OperatingInputs {
    /// 연료 식별자 (연료 테이블 키)
    pub fuel_id: String,
    /// 요구 출력 [kW]
    pub power_demand_kw: f64,
    /// 운전 시간 [h]
    pub operation_duration_hours: f64,
    /// 연료 단가 [통화/톤]. `None`이면 연료의 참고 단가를 쓴다.
    pub biomass_price_per_tonne: Option<f64>,
}

impl OperatingInputs {
    pub fn new(
        fuel_id: impl Into<String>,
        power_demand_kw: f64,
        operation_duration_hours: f64,
    ) -> Self {
        Self {
            fuel_id: fuel_id.into(),
            power_demand_kw,
            operation_duration_hours,
            biomass_price_per_tonne: None,
        }
    }

    pub fn with_price(mut self, price_per_tonne: f64) -> Self {
        self.biomass_price_per_tonne = Some(price_per_tonne);
        self
    }
}

/// 연료 물성과 운전 조건으로 효율, 손실, 연소, 비용, 배출 지표를 한 번에 계산한다.
///
/// 결과에는 연료 물성(발열량, 조성, 함수율)도 함께 담긴다.
/// `co2_emissions_kg`는 시간당 연료량 기준이고, 운전 기간 전체 기준 값은
/// `co2_emissions_total_kg`로 따로 제공한다.
pub fn compute_base_results(input: &OperatingInputs) -> CalcResult<ResultSet> {
    let fuel = fuel_db::get_fuel_properties(&input.fuel_id)?;
    let power_kw = require_positive("power_demand_kw", input.power_demand_kw)?;
    let hours = require_positive("operation_duration_hours", input.operation_duration_hours)?;
    let price = require_non_negative(
        "biomass_price_per_tonne",
        input
            .biomass_price_per_tonne
            .unwrap_or(fuel.reference_price_per_tonne),
    )?;
    let lhv = require_positive("lower_heating_value", fuel.lower_heating_value)?;
    let moisture = fuel.moisture_pct;

    let energy_output_kwh = power_kw * 1000.0;
    let thermal_eff = thermal_efficiency(moisture)?;
    let technical_eff = technical_efficiency(thermal_eff, moisture)?;
    let losses = thermal_losses(energy_output_kwh, moisture)?;
    let consumption = fuel_consumption(FuelConsumptionInput {
        energy_output_kwh,
        lower_heating_value: lhv,
        thermal_efficiency: thermal_eff,
        operation_duration_hours: hours,
        price_per_tonne: price,
    })?;
    let combustion = combustion_properties(lhv, moisture)?;

    let mut out = ResultSet::new();
    out.insert(MetricKey::LowerHeatingValue, lhv);
    out.insert(MetricKey::HigherHeatingValue, fuel.higher_heating_value);
    out.insert(MetricKey::Moisture, moisture);
    out.insert(MetricKey::Carbon, fuel.carbon_pct);
    out.insert(MetricKey::Hydrogen, fuel.hydrogen_pct);
    out.insert(MetricKey::Oxygen, fuel.oxygen_pct);
    out.insert(MetricKey::Nitrogen, fuel.nitrogen_pct);
    out.insert(MetricKey::BiomassPrice, price);
    out.insert(MetricKey::EnergyOutput, energy_output_kwh);
    out.insert(MetricKey::ThermalEfficiency, thermal_eff * 100.0);
    out.insert(MetricKey::TechnicalEfficiency, technical_eff * 100.0);
    out.insert(MetricKey::FuelRequiredPerHour, consumption.fuel_required_kg_per_hour);
    out.insert(MetricKey::FuelRequired, consumption.total_fuel_kg);
    out.insert(MetricKey::RadiationLosses, losses.radiation_kwh);
    out.insert(MetricKey::ConvectionLosses, losses.convection_kwh);
    out.insert(MetricKey::ExhaustLosses, losses.exhaust_kwh);
    out.insert(MetricKey::ThermalLosses, losses.total_kwh());
    out.insert(MetricKey::FuelCost, consumption.fuel_cost);
    out.insert(MetricKey::Savings, consumption.savings);
    out.insert(
        MetricKey::Co2Emissions,
        co2_emissions_kg(consumption.fuel_required_kg_per_hour, fuel.carbon_pct),
    );
    out.insert(
        MetricKey::Co2EmissionsTotal,
        co2_emissions_kg(consumption.total_fuel_kg, fuel.carbon_pct),
    );
    out.insert(MetricKey::AirDemand, combustion.air_demand);
    out.insert(MetricKey::DryFlueGasPower, combustion.dry_flue_gas_power);
    out.insert(MetricKey::WetFlueGasPower, combustion.wet_flue_gas_power);

    tracing::debug!(
        fuel = fuel.id,
        power_kw,
        hours,
        price,
        thermal_eff,
        fuel_kg = consumption.total_fuel_kg,
        "base results computed"
    );
    Ok(out)
}
