use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::{self, AppError};
use crate::combustion::{cost_projection, EnvironmentalStudyInput, OperatingInputs};
use crate::config::Config;
use crate::fuel_db;
use crate::i18n::{keys, Translator};
use crate::logging::LogFormat;
use crate::optimization::optimization_suggestions;
use crate::results::{MetricKey, ResultSet};

/// 바이오매스 연소 설비 성능/경제성/배출 추정 도구.
#[derive(Debug, Parser)]
#[command(name = "biomass_combustion_toolbox", version, about)]
pub struct Cli {
    /// 표시 언어 (auto, fr, en)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    /// 설정 파일 경로 (기본: config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 로그 형식
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 등록된 연료 목록을 출력한다.
    Fuels,
    /// 입력값으로 결과를 계산한다. 빠진 값은 설정 기본값을 쓴다.
    Calculate(CalculateArgs),
    /// 개선 권고 목록을 출력한다.
    Suggestions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Args)]
pub struct CalculateArgs {
    /// 연료 식별자 (예: "Bois bûche")
    #[arg(long)]
    pub fuel: Option<String>,
    /// 요구 출력 [kW]
    #[arg(long)]
    pub power: Option<f64>,
    /// 운전 시간 [h]
    #[arg(long)]
    pub hours: Option<f64>,
    /// 연료 단가 [dh/tonne]. 생략하면 연료 참고 단가.
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub ambient_temp: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub fumes_temp: Option<f64>,
    #[arg(long)]
    pub biomass_consumption: Option<f64>,
    #[arg(long)]
    pub mass_flow_biomass: Option<f64>,
    #[arg(long)]
    pub mass_flow_fumes: Option<f64>,
    #[arg(long)]
    pub heat_capacity: Option<f64>,
    #[arg(long)]
    pub wall_area: Option<f64>,
    #[arg(long)]
    pub trans_coeff: Option<f64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// 결과 파일 경로. 지정하면 표준출력 대신 파일로 쓴다.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// 연도별 누적 연료비도 출력한다 (표 형식에서만).
    #[arg(long)]
    pub projection: bool,
}

impl CalculateArgs {
    /// 플래그 값과 설정 기본값을 합쳐 계산 입력을 만든다.
    pub fn to_inputs(&self, cfg: &Config) -> (OperatingInputs, EnvironmentalStudyInput) {
        let mut base = OperatingInputs::new(
            self.fuel.clone().unwrap_or_else(|| cfg.default_fuel.clone()),
            self.power.unwrap_or(cfg.default_power_demand_kw),
            self.hours.unwrap_or(cfg.default_operation_duration_hours),
        );
        base.biomass_price_per_tonne = self.price;

        let d = &cfg.study;
        let study = EnvironmentalStudyInput {
            ambient_temp_c: self.ambient_temp.unwrap_or(d.ambient_temp_c),
            fumes_temp_c: self.fumes_temp.unwrap_or(d.fumes_temp_c),
            biomass_consumption_tonnes_per_month: self
                .biomass_consumption
                .unwrap_or(d.biomass_consumption_tonnes_per_month),
            mass_flow_biomass_kg_s: self.mass_flow_biomass.unwrap_or(d.mass_flow_biomass_kg_s),
            mass_flow_fumes_kg_s: self.mass_flow_fumes.unwrap_or(d.mass_flow_fumes_kg_s),
            fumes_heat_capacity_j_kg_k: self
                .heat_capacity
                .unwrap_or(d.fumes_heat_capacity_j_kg_k),
            wall_area_m2: self.wall_area.unwrap_or(d.wall_area_m2),
            transmission_coeff_w_m2_c: self.trans_coeff.unwrap_or(d.transmission_coeff_w_m2_c),
        };
        (base, study)
    }
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Fuels,
    Suggestions,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_FUELS));
    println!("{}", tr.t(keys::MAIN_MENU_SUGGESTIONS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Fuels),
            "3" => return Ok(MenuChoice::Suggestions),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 계산 메뉴를 처리한다. 빈 입력은 기본값으로 본다.
pub fn handle_calculate(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    print_fuels(tr);
    let fuel = read_fuel(tr, &cfg.default_fuel)?;
    let props = fuel_db::get_fuel_properties(fuel)?;
    println!("{}: {} %", MetricKey::Moisture.label(tr), props.moisture_pct);

    let power = read_f64_or(tr, keys::PROMPT_POWER_DEMAND, cfg.default_power_demand_kw)?;
    let hours = read_f64_or(tr, keys::PROMPT_DURATION, cfg.default_operation_duration_hours)?;
    let price = read_f64_or(tr, keys::PROMPT_PRICE, props.reference_price_per_tonne)?;
    let base = OperatingInputs::new(fuel, power, hours).with_price(price);

    println!("{}", tr.t(keys::STUDY_HEADING));
    let d = &cfg.study;
    let study = EnvironmentalStudyInput {
        ambient_temp_c: read_f64_or(tr, keys::PROMPT_AMBIENT_TEMP, d.ambient_temp_c)?,
        fumes_temp_c: read_f64_or(tr, keys::PROMPT_FUMES_TEMP, d.fumes_temp_c)?,
        biomass_consumption_tonnes_per_month: read_f64_or(
            tr,
            keys::PROMPT_BIOMASS_CONSUMPTION,
            d.biomass_consumption_tonnes_per_month,
        )?,
        mass_flow_biomass_kg_s: read_f64_or(
            tr,
            keys::PROMPT_MASS_FLOW_BIOMASS,
            d.mass_flow_biomass_kg_s,
        )?,
        mass_flow_fumes_kg_s: read_f64_or(
            tr,
            keys::PROMPT_MASS_FLOW_FUMES,
            d.mass_flow_fumes_kg_s,
        )?,
        fumes_heat_capacity_j_kg_k: read_f64_or(
            tr,
            keys::PROMPT_HEAT_CAPACITY,
            d.fumes_heat_capacity_j_kg_k,
        )?,
        wall_area_m2: read_f64_or(tr, keys::PROMPT_WALL_AREA, d.wall_area_m2)?,
        transmission_coeff_w_m2_c: read_f64_or(
            tr,
            keys::PROMPT_TRANS_COEFF,
            d.transmission_coeff_w_m2_c,
        )?,
    };

    let results = app::calculate(&base, &study)?;
    print_results(&results, tr);
    print_projection(&results, tr, cfg.projection_years);

    let path = read_line(tr.t(keys::PROMPT_EXPORT))?;
    let path = path.trim();
    if !path.is_empty() {
        app::write_results(&results, OutputFormat::Csv, tr, Path::new(path))?;
        println!("{} {path}", tr.t(keys::EXPORT_SAVED));
    }
    Ok(())
}

/// 연료 목록을 번호와 함께 출력한다.
pub fn print_fuels(tr: &Translator) {
    println!("{}", tr.t(keys::FUELS_HEADING));
    println!("{}", tr.t(keys::FUELS_COLUMNS));
    for (i, f) in fuel_db::fuels().iter().enumerate() {
        println!(
            "{:>2}) {:<24} {:>4.2} / {:>4.2}  {:>4.1} %  {:>6.1}",
            i + 1,
            f.id,
            f.lower_heating_value,
            f.higher_heating_value,
            f.moisture_pct,
            f.reference_price_per_tonne
        );
    }
}

pub fn print_suggestions(tr: &Translator) {
    println!("{}", tr.t(keys::SUGGESTIONS_HEADING));
    for (i, s) in optimization_suggestions().iter().enumerate() {
        println!("{}. {}", i + 1, s.label(tr));
    }
}

pub fn print_results(results: &ResultSet, tr: &Translator) {
    println!("{}", tr.t(keys::RESULTS_HEADING));
    let width = results
        .iter()
        .map(|(k, _)| k.label(tr).chars().count())
        .max()
        .unwrap_or(0);
    for (k, v) in results.iter() {
        let label = k.label(tr);
        let pad = width - label.chars().count();
        println!("{label}{:pad$} : {v:.3}", "");
    }
}

/// 연료비가 결과에 있으면 연도별 누적 비용을 출력한다.
pub fn print_projection(results: &ResultSet, tr: &Translator, years: u32) {
    let Some(cost) = results.get(MetricKey::FuelCost) else {
        return;
    };
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    for (year, total) in cost_projection(cost, years) {
        println!("{} {year:>2}: {total:.2}", tr.t(keys::PROJECTION_YEAR));
    }
}

/// 번호 또는 식별자로 연료를 고른다. 빈 입력은 기본 연료.
fn read_fuel(tr: &Translator, default_fuel: &str) -> Result<&'static str, AppError> {
    let fuels = fuel_db::fuels();
    loop {
        let sel = read_line(tr.t(keys::PROMPT_FUEL))?;
        let sel = sel.trim();
        let sel = if sel.is_empty() { default_fuel } else { sel };
        if let Ok(n) = sel.parse::<usize>() {
            if let Some(f) = n.checked_sub(1).and_then(|i| fuels.get(i)) {
                return Ok(f.id);
            }
        } else if let Some(id) = match_fuel_loosely(sel) {
            return Ok(id);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 대화형 입력 전용. 대소문자를 무시하고 등록된 식별자로 바꾼다.
pub fn match_fuel_loosely(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if let Some(f) = fuel_db::find_fuel(input) {
        return Some(f.id);
    }
    let lowered = input.to_lowercase();
    fuel_db::fuels()
        .iter()
        .find(|f| f.id.to_lowercase() == lowered)
        .map(|f| f.id)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{} {default}]: ", tr.t(key), tr.t(keys::HINT_DEFAULT)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
