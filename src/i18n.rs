use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_FUELS: &str = "main_menu.fuels";
    pub const MAIN_MENU_SUGGESTIONS: &str = "main_menu.suggestions";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const FUELS_HEADING: &str = "fuels.heading";
    pub const FUELS_COLUMNS: &str = "fuels.columns";
    pub const PROMPT_FUEL: &str = "prompt.fuel";
    pub const PROMPT_POWER_DEMAND: &str = "prompt.power_demand";
    pub const PROMPT_DURATION: &str = "prompt.duration";
    pub const PROMPT_PRICE: &str = "prompt.price";

    pub const STUDY_HEADING: &str = "study.heading";
    pub const PROMPT_AMBIENT_TEMP: &str = "prompt.ambient_temp";
    pub const PROMPT_FUMES_TEMP: &str = "prompt.fumes_temp";
    pub const PROMPT_BIOMASS_CONSUMPTION: &str = "prompt.biomass_consumption";
    pub const PROMPT_MASS_FLOW_BIOMASS: &str = "prompt.mass_flow_biomass";
    pub const PROMPT_MASS_FLOW_FUMES: &str = "prompt.mass_flow_fumes";
    pub const PROMPT_HEAT_CAPACITY: &str = "prompt.heat_capacity";
    pub const PROMPT_WALL_AREA: &str = "prompt.wall_area";
    pub const PROMPT_TRANS_COEFF: &str = "prompt.trans_coeff";
    pub const HINT_DEFAULT: &str = "prompt.hint_default";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const PROJECTION_HEADING: &str = "results.projection_heading";
    pub const PROJECTION_YEAR: &str = "results.projection_year";
    pub const PROMPT_EXPORT: &str = "prompt.export";
    pub const EXPORT_SAVED: &str = "results.export_saved";

    pub const SUGGESTIONS_HEADING: &str = "suggestions.heading";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Fr
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, &'static str>>,
}

impl Translator {
    /// 언어 코드(fr/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 fr로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if let Some(map) = &overrides {
            tracing::debug!(lang = lang_code, entries = map.len(), "locale pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 프랑스어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return *v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| fr(key)),
            Language::Fr => fr(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "fr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("fr") => Some("fr".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "fr" => Some("fr".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, &'static str>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        tracing::warn!(path = %path.display(), "locale pack ignored: not a string table");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, &'static str>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    // 번역기 수명은 프로세스 전체이므로 문자열을 한 번만 leak 한다.
    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, &'static str>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), Box::leak(s.clone().into_boxed_str()));
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn fr(key: &str) -> &'static str {
    use keys::*;
    match key {
        APP_EXIT => "Fin du programme.",
        MAIN_MENU_TITLE => "\n=== Analyse et Optimisation de la Biomasse ===",
        MAIN_MENU_CALCULATE => "1) Calculer les résultats",
        MAIN_MENU_FUELS => "2) Types de biomasse",
        MAIN_MENU_SUGGESTIONS => "3) Optimisations possibles",
        MAIN_MENU_EXIT => "0) Quitter",
        PROMPT_MENU_SELECT => "Choix du menu : ",
        INVALID_SELECTION_RETRY => "Saisie invalide. Veuillez réessayer.",
        ERROR_INVALID_NUMBER => "Veuillez saisir un nombre.",
        FUELS_HEADING => "\n-- Types de biomasse --",
        FUELS_COLUMNS => "PCI / PCS (kWh/kg), humidité (%), prix (dh/tonne)",
        PROMPT_FUEL => "Type de biomasse (numéro) : ",
        PROMPT_POWER_DEMAND => "Demande en puissance (kW)",
        PROMPT_DURATION => "Durée de fonctionnement (heures)",
        PROMPT_PRICE => "Prix de la biomasse (dh/tonne)",
        STUDY_HEADING => "\n-- Étude technique --",
        PROMPT_AMBIENT_TEMP => "Température ambiante (°C)",
        PROMPT_FUMES_TEMP => "Température des fumées (°C)",
        PROMPT_BIOMASS_CONSUMPTION => "Consommation Biomasse (tonnes/mois)",
        PROMPT_MASS_FLOW_BIOMASS => "Débit massique de la biomasse (kg/s)",
        PROMPT_MASS_FLOW_FUMES => "Débit massique des fumées (kg/s)",
        PROMPT_HEAT_CAPACITY => "Chaleur massique des fumées (J/kg.K)",
        PROMPT_WALL_AREA => "Surface de la paroi (m²)",
        PROMPT_TRANS_COEFF => "Coefficient de transmission (W/m².°C)",
        HINT_DEFAULT => "défaut",
        RESULTS_HEADING => "\n### Résultats globaux",
        PROJECTION_HEADING => "\n-- Évolution des coûts au cours des années --",
        PROJECTION_YEAR => "Année",
        PROMPT_EXPORT => "Exporter en CSV (chemin, vide pour ignorer) : ",
        EXPORT_SAVED => "Résultats enregistrés :",
        SUGGESTIONS_HEADING => "\n-- Optimisations possibles --",

        "metric.lhv_kwh_per_kg" => "PCI (kWh/kg)",
        "metric.hhv_kwh_per_kg" => "PCS (kWh/kg)",
        "metric.moisture_pct" => "Moisture (%)",
        "metric.carbon_pct" => "Carbone (%)",
        "metric.hydrogen_pct" => "Hydrogène (%)",
        "metric.oxygen_pct" => "Oxygène (%)",
        "metric.nitrogen_pct" => "Azote (%)",
        "metric.biomass_price_per_tonne" => "Prix Biomasse (dh/tonne)",
        "metric.energy_output_kwh" => "Energy Output (kWh)",
        "metric.thermal_efficiency_pct" => "Thermal Efficiency (%)",
        "metric.technical_efficiency_pct" => "Technical Efficiency (%)",
        "metric.fuel_required_kg_per_hour" => "Combustible requis (kg/h)",
        "metric.fuel_required_kg" => "Fuel Required (kg)",
        "metric.radiation_losses_kwh" => "Radiation Losses (kWh)",
        "metric.convection_losses_kwh" => "Convection Losses (kWh)",
        "metric.exhaust_losses_kwh" => "Exhaust Losses (kWh)",
        "metric.thermal_losses_kwh" => "Thermal Losses (kWh)",
        "metric.fuel_cost" => "Fuel Cost (dh)",
        "metric.savings" => "Savings (dh)",
        "metric.co2_emissions_kg" => "CO2 Emissions (kg)",
        "metric.co2_emissions_total_kg" => "Émissions CO2 sur la durée (kg)",
        "metric.air_demand_kwh_per_kg" => "Pouvoir Comburivor (kWh/kg)",
        "metric.dry_flue_gas_power_kwh_per_kg" => "Pouvoir Fumigène Sec (kWh/kg)",
        "metric.wet_flue_gas_power_kwh_per_kg" => "Pouvoir Fumigène Humide (kWh/kg)",
        "metric.volume_co2_m3" => "Volume CO2 (m³)",
        "metric.volume_h2o_m3" => "Volume H2O (m³)",
        "metric.volume_humidity_m3" => "Volume Humidité (m³)",
        "metric.co2_pct_by_volume" => "Teneur en CO2 (%)",
        "metric.flue_gas_losses_kw" => "Pertes fumées (kW)",
        "metric.ambient_losses_kw" => "Pertes ambiance (kW)",

        "suggestion.economizer" => {
            "Ajouter un économiseur pour récupérer la chaleur des gaz d'échappement."
        }
        "suggestion.insulation" => {
            "Améliorer l'isolation thermique pour réduire les pertes par radiation et convection."
        }
        "suggestion.automated_feed" => {
            "Installer un système d'alimentation automatisé pour stabiliser la combustion."
        }
        "suggestion.fuel_drying" => "Sécher la biomasse avant combustion pour augmenter son PCI.",
        "suggestion.emission_sensors" => {
            "Ajouter des capteurs pour surveiller les émissions et optimiser la combustion."
        }
        "suggestion.electrostatic_filter" => {
            "Utiliser un filtre électrostatique pour réduire les émissions de particules."
        }
        "suggestion.ash_valorisation" => {
            "Valoriser les cendres comme amendement agricole ou matériaux de construction."
        }
        "suggestion.cogeneration" => {
            "Intégrer un système de cogénération pour produire également de l'électricité."
        }
        _ => "[traduction manquante]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Biomass Analysis and Optimisation ===",
        MAIN_MENU_CALCULATE => "1) Calculate results",
        MAIN_MENU_FUELS => "2) Biomass types",
        MAIN_MENU_SUGGESTIONS => "3) Possible optimisations",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        FUELS_HEADING => "\n-- Biomass types --",
        FUELS_COLUMNS => "LHV / HHV (kWh/kg), moisture (%), price (dh/tonne)",
        PROMPT_FUEL => "Biomass type (number): ",
        PROMPT_POWER_DEMAND => "Power demand (kW)",
        PROMPT_DURATION => "Operation duration (hours)",
        PROMPT_PRICE => "Biomass price (dh/tonne)",
        STUDY_HEADING => "\n-- Technical study --",
        PROMPT_AMBIENT_TEMP => "Ambient temperature (°C)",
        PROMPT_FUMES_TEMP => "Flue gas temperature (°C)",
        PROMPT_BIOMASS_CONSUMPTION => "Biomass consumption (tonnes/month)",
        PROMPT_MASS_FLOW_BIOMASS => "Biomass mass flow (kg/s)",
        PROMPT_MASS_FLOW_FUMES => "Flue gas mass flow (kg/s)",
        PROMPT_HEAT_CAPACITY => "Flue gas heat capacity (J/kg.K)",
        PROMPT_WALL_AREA => "Wall area (m²)",
        PROMPT_TRANS_COEFF => "Transmission coefficient (W/m².°C)",
        HINT_DEFAULT => "default",
        RESULTS_HEADING => "\n### Overall results",
        PROJECTION_HEADING => "\n-- Cost evolution over the years --",
        PROJECTION_YEAR => "Year",
        PROMPT_EXPORT => "Export to CSV (path, empty to skip): ",
        EXPORT_SAVED => "Results saved:",
        SUGGESTIONS_HEADING => "\n-- Possible optimisations --",

        "metric.lhv_kwh_per_kg" => "LHV (kWh/kg)",
        "metric.hhv_kwh_per_kg" => "HHV (kWh/kg)",
        "metric.moisture_pct" => "Moisture (%)",
        "metric.carbon_pct" => "Carbon (%)",
        "metric.hydrogen_pct" => "Hydrogen (%)",
        "metric.oxygen_pct" => "Oxygen (%)",
        "metric.nitrogen_pct" => "Nitrogen (%)",
        "metric.biomass_price_per_tonne" => "Biomass price (dh/tonne)",
        "metric.energy_output_kwh" => "Energy Output (kWh)",
        "metric.thermal_efficiency_pct" => "Thermal Efficiency (%)",
        "metric.technical_efficiency_pct" => "Technical Efficiency (%)",
        "metric.fuel_required_kg_per_hour" => "Fuel Required (kg/h)",
        "metric.fuel_required_kg" => "Fuel Required (kg)",
        "metric.radiation_losses_kwh" => "Radiation Losses (kWh)",
        "metric.convection_losses_kwh" => "Convection Losses (kWh)",
        "metric.exhaust_losses_kwh" => "Exhaust Losses (kWh)",
        "metric.thermal_losses_kwh" => "Thermal Losses (kWh)",
        "metric.fuel_cost" => "Fuel Cost (dh)",
        "metric.savings" => "Savings (dh)",
        "metric.co2_emissions_kg" => "CO2 Emissions (kg)",
        "metric.co2_emissions_total_kg" => "CO2 Emissions over run (kg)",
        "metric.air_demand_kwh_per_kg" => "Combustion Air Demand (kWh/kg)",
        "metric.dry_flue_gas_power_kwh_per_kg" => "Dry Flue Gas Power (kWh/kg)",
        "metric.wet_flue_gas_power_kwh_per_kg" => "Wet Flue Gas Power (kWh/kg)",
        "metric.volume_co2_m3" => "CO2 Volume (m³)",
        "metric.volume_h2o_m3" => "H2O Volume (m³)",
        "metric.volume_humidity_m3" => "Humidity Volume (m³)",
        "metric.co2_pct_by_volume" => "CO2 Content (%)",
        "metric.flue_gas_losses_kw" => "Flue Gas Losses (kW)",
        "metric.ambient_losses_kw" => "Ambient Losses (kW)",

        "suggestion.economizer" => "Add an economizer to recover exhaust gas heat.",
        "suggestion.insulation" => {
            "Improve thermal insulation to cut radiation and convection losses."
        }
        "suggestion.automated_feed" => "Install automated fuel feeding to stabilise combustion.",
        "suggestion.fuel_drying" => "Dry the biomass before combustion to raise its LHV.",
        "suggestion.emission_sensors" => {
            "Add sensors to monitor emissions and tune combustion."
        }
        "suggestion.electrostatic_filter" => {
            "Use an electrostatic precipitator to reduce particulate emissions."
        }
        "suggestion.ash_valorisation" => {
            "Reuse ash as an agricultural amendment or building material."
        }
        "suggestion.cogeneration" => "Integrate cogeneration to also produce electricity.",
        _ => return None,
    })
}
