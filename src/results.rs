use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::i18n::Translator;

/// 결과 항목 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    LowerHeatingValue,
    HigherHeatingValue,
    Moisture,
    Carbon,
    Hydrogen,
    Oxygen,
    Nitrogen,
    BiomassPrice,
    EnergyOutput,
    ThermalEfficiency,
    TechnicalEfficiency,
    FuelRequiredPerHour,
    FuelRequired,
    RadiationLosses,
    ConvectionLosses,
    ExhaustLosses,
    ThermalLosses,
    FuelCost,
    Savings,
    Co2Emissions,
    Co2EmissionsTotal,
    AirDemand,
    DryFlueGasPower,
    WetFlueGasPower,
    VolumeCo2,
    VolumeH2o,
    VolumeHumidity,
    Co2PercentageByVolume,
    FlueGasLosses,
    AmbientLosses,
}

impl MetricKey {
    pub const ALL: [MetricKey; 30] = [
        MetricKey::LowerHeatingValue,
        MetricKey::HigherHeatingValue,
        MetricKey::Moisture,
        MetricKey::Carbon,
        MetricKey::Hydrogen,
        MetricKey::Oxygen,
        MetricKey::Nitrogen,
        MetricKey::BiomassPrice,
        MetricKey::EnergyOutput,
        MetricKey::ThermalEfficiency,
        MetricKey::TechnicalEfficiency,
        MetricKey::FuelRequiredPerHour,
        MetricKey::FuelRequired,
        MetricKey::RadiationLosses,
        MetricKey::ConvectionLosses,
        MetricKey::ExhaustLosses,
        MetricKey::ThermalLosses,
        MetricKey::FuelCost,
        MetricKey::Savings,
        MetricKey::Co2Emissions,
        MetricKey::Co2EmissionsTotal,
        MetricKey::AirDemand,
        MetricKey::DryFlueGasPower,
        MetricKey::WetFlueGasPower,
        MetricKey::VolumeCo2,
        MetricKey::VolumeH2o,
        MetricKey::VolumeHumidity,
        MetricKey::Co2PercentageByVolume,
        MetricKey::FlueGasLosses,
        MetricKey::AmbientLosses,
    ];

    /// 내보내기/JSON에 쓰는 고정 식별자.
    pub fn id(self) -> &'static str {
        match self {
            MetricKey::LowerHeatingValue => "lhv_kwh_per_kg",
            MetricKey::HigherHeatingValue => "hhv_kwh_per_kg",
            MetricKey::Moisture => "moisture_pct",
            MetricKey::Carbon => "carbon_pct",
            MetricKey::Hydrogen => "hydrogen_pct",
            MetricKey::Oxygen => "oxygen_pct",
            MetricKey::Nitrogen => "nitrogen_pct",
            MetricKey::BiomassPrice => "biomass_price_per_tonne",
            MetricKey::EnergyOutput => "energy_output_kwh",
            MetricKey::ThermalEfficiency => "thermal_efficiency_pct",
            MetricKey::TechnicalEfficiency => "technical_efficiency_pct",
            MetricKey::FuelRequiredPerHour => "fuel_required_kg_per_hour",
            MetricKey::FuelRequired => "fuel_required_kg",
            MetricKey::RadiationLosses => "radiation_losses_kwh",
            MetricKey::ConvectionLosses => "convection_losses_kwh",
            MetricKey::ExhaustLosses => "exhaust_losses_kwh",
            MetricKey::ThermalLosses => "thermal_losses_kwh",
            MetricKey::FuelCost => "fuel_cost",
            MetricKey::Savings => "savings",
            MetricKey::Co2Emissions => "co2_emissions_kg",
            MetricKey::Co2EmissionsTotal => "co2_emissions_total_kg",
            MetricKey::AirDemand => "air_demand_kwh_per_kg",
            MetricKey::DryFlueGasPower => "dry_flue_gas_power_kwh_per_kg",
            MetricKey::WetFlueGasPower => "wet_flue_gas_power_kwh_per_kg",
            MetricKey::VolumeCo2 => "volume_co2_m3",
            MetricKey::VolumeH2o => "volume_h2o_m3",
            MetricKey::VolumeHumidity => "volume_humidity_m3",
            MetricKey::Co2PercentageByVolume => "co2_pct_by_volume",
            MetricKey::FlueGasLosses => "flue_gas_losses_kw",
            MetricKey::AmbientLosses => "ambient_losses_kw",
        }
    }

    pub fn from_id(id: &str) -> Option<MetricKey> {
        MetricKey::ALL.into_iter().find(|k| k.id() == id)
    }

    /// 현재 언어의 표시 이름(단위 포함)을 돌려준다.
    pub fn label(self, tr: &Translator) -> &'static str {
        tr.t(&format!("metric.{}", self.id()))
    }
}

/// 항목 이름 → 값의 평면 매핑. 삽입 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<(MetricKey, f64)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값을 넣는다. 같은 키가 이미 있으면 위치는 유지하고 값만 덮어쓴다.
    pub fn insert(&mut self, key: MetricKey, value: f64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn get_by_id(&self, id: &str) -> Option<f64> {
        MetricKey::from_id(id).and_then(|k| self.get(k))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// 다른 결과를 뒤에 이어 붙인 새 결과를 만든다. 겹치는 키는 `other` 값이 이긴다.
    pub fn merged(&self, other: &ResultSet) -> ResultSet {
        let mut out = self.clone();
        for (k, v) in other.iter() {
            out.insert(k, v);
        }
        out
    }
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k.id(), v)?;
        }
        map.end()
    }
}
