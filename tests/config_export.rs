use biomass_combustion_toolbox::app::calculate;
use biomass_combustion_toolbox::combustion::{
    cost_projection, EnvironmentalStudyInput, OperatingInputs,
};
use biomass_combustion_toolbox::config::{load_or_default, Config, ConfigOrigin};
use biomass_combustion_toolbox::export::{write_csv, write_json};
use biomass_combustion_toolbox::i18n::{resolve_language, Language, Translator};
use biomass_combustion_toolbox::optimization::optimization_suggestions;
use biomass_combustion_toolbox::MetricKey;

fn merged_results() -> biomass_combustion_toolbox::ResultSet {
    let cfg = Config::default();
    let base = OperatingInputs::new("Bois bûche", 10.0, 100.0);
    let study = EnvironmentalStudyInput::from(&cfg.study);
    calculate(&base, &study).expect("calculate")
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let (cfg, origin) = load_or_default(&path).expect("default config");
    assert_eq!(origin, ConfigOrigin::Created);
    assert!(path.exists());
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.study.fumes_heat_capacity_j_kg_k, 1045.0);

    let (reloaded, origin) = load_or_default(&path).expect("reload");
    assert_eq!(origin, ConfigOrigin::Loaded);
    assert_eq!(reloaded, cfg);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n[study]\nwall_area_m2 = 4.5\n").unwrap();
    let (cfg, origin) = load_or_default(&path).expect("partial config");
    assert_eq!(origin, ConfigOrigin::Loaded);
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.study.wall_area_m2, 4.5);
    assert_eq!(cfg.study.ambient_temp_c, 25.0);
    assert_eq!(cfg.projection_years, 20);
}

#[test]
fn merged_results_hold_both_sets_in_order() {
    let res = merged_results();
    assert_eq!(res.len(), MetricKey::ALL.len());
    let order: Vec<_> = res.iter().map(|(k, _)| k).collect();
    assert_eq!(order, MetricKey::ALL.to_vec());
}

#[test]
fn csv_export_uses_translated_header() {
    let res = merged_results();
    let mut buf = Vec::new();
    write_csv(&res, &Translator::new("fr"), &mut buf).expect("csv");
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("PCI (kWh/kg),PCS (kWh/kg)"));
    assert!(header.contains("Pertes fumées (kW)"));
    let row = lines.next().unwrap();
    assert_eq!(row.split(',').count(), MetricKey::ALL.len());
    assert!(row.starts_with("3.8,5.1,20,"));
}

#[test]
fn french_header_keeps_reference_column_names() {
    let expected = [
        (MetricKey::LowerHeatingValue, "PCI (kWh/kg)"),
        (MetricKey::HigherHeatingValue, "PCS (kWh/kg)"),
        (MetricKey::Moisture, "Moisture (%)"),
        (MetricKey::Carbon, "Carbone (%)"),
        (MetricKey::Hydrogen, "Hydrogène (%)"),
        (MetricKey::Oxygen, "Oxygène (%)"),
        (MetricKey::Nitrogen, "Azote (%)"),
        (MetricKey::BiomassPrice, "Prix Biomasse (dh/tonne)"),
        (MetricKey::EnergyOutput, "Energy Output (kWh)"),
        (MetricKey::ThermalEfficiency, "Thermal Efficiency (%)"),
        (MetricKey::TechnicalEfficiency, "Technical Efficiency (%)"),
        (MetricKey::FuelRequired, "Fuel Required (kg)"),
        (MetricKey::RadiationLosses, "Radiation Losses (kWh)"),
        (MetricKey::ConvectionLosses, "Convection Losses (kWh)"),
        (MetricKey::ExhaustLosses, "Exhaust Losses (kWh)"),
        (MetricKey::ThermalLosses, "Thermal Losses (kWh)"),
        (MetricKey::FuelCost, "Fuel Cost (dh)"),
        (MetricKey::Savings, "Savings (dh)"),
        (MetricKey::Co2Emissions, "CO2 Emissions (kg)"),
        (MetricKey::AirDemand, "Pouvoir Comburivor (kWh/kg)"),
        (MetricKey::DryFlueGasPower, "Pouvoir Fumigène Sec (kWh/kg)"),
        (MetricKey::WetFlueGasPower, "Pouvoir Fumigène Humide (kWh/kg)"),
        (MetricKey::VolumeCo2, "Volume CO2 (m³)"),
        (MetricKey::VolumeH2o, "Volume H2O (m³)"),
        (MetricKey::VolumeHumidity, "Volume Humidité (m³)"),
        (MetricKey::Co2PercentageByVolume, "Teneur en CO2 (%)"),
        (MetricKey::FlueGasLosses, "Pertes fumées (kW)"),
        (MetricKey::AmbientLosses, "Pertes ambiance (kW)"),
    ];
    let tr = Translator::new("fr");
    for (key, label) in expected {
        assert_eq!(key.label(&tr), label, "{}", key.id());
    }

    let mut buf = Vec::new();
    write_csv(&merged_results(), &tr, &mut buf).expect("csv");
    let text = String::from_utf8(buf).unwrap();
    let header: Vec<&str> = text.lines().next().unwrap().split(',').collect();
    assert_eq!(header[2], "Moisture (%)");
    assert!(header.contains(&"Pouvoir Comburivor (kWh/kg)"));
}

#[test]
fn json_export_is_keyed_by_metric_id() {
    let res = merged_results();
    let mut buf = Vec::new();
    write_json(&res, &mut buf).expect("json");
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    let thermal = value["thermal_efficiency_pct"].as_f64().unwrap();
    assert!((thermal - 83.0).abs() < 1e-9);
    assert_eq!(value["co2_pct_by_volume"], 18.78);
}

#[test]
fn english_labels_and_suggestions() {
    let tr = Translator::new("en-us");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(MetricKey::FuelCost.label(&tr), "Fuel Cost (dh)");
    assert_eq!(optimization_suggestions().len(), 8);
    assert!(optimization_suggestions()[0].label(&tr).contains("economizer"));
}

#[test]
fn cost_projection_is_cumulative() {
    let series = cost_projection(12.5, 20);
    assert_eq!(series.len(), 20);
    assert_eq!(series[0], (1, 12.5));
    assert_eq!(series[19], (20, 250.0));
}

#[test]
fn language_flag_wins_over_config() {
    assert_eq!(resolve_language(Some("en-GB"), Some("fr")), "en");
    assert_eq!(resolve_language(Some("auto"), Some("fr")), "fr");
    assert_eq!(resolve_language(None, Some("EN")), "en");
}

#[test]
fn unknown_language_falls_back_to_french_labels() {
    let tr = Translator::new("de");
    assert_eq!(tr.language_code(), "fr");
    assert_eq!(MetricKey::FlueGasLosses.label(&tr), "Pertes fumées (kW)");
}

#[test]
fn locale_pack_overrides_built_in_labels() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("en.toml"),
        "[metric]\nfuel_cost = \"Fuel Cost (EUR)\"\n",
    )
    .unwrap();
    let tr = Translator::new_with_pack("en", Some(dir.path()));
    assert_eq!(MetricKey::FuelCost.label(&tr), "Fuel Cost (EUR)");
    assert_eq!(MetricKey::Savings.label(&tr), "Savings (dh)");
}
