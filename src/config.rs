use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::combustion::EnvironmentalStudyInput;
use crate::logging::LogFormat;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 기술/환경 검토 입력의 기본값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyDefaults {
    pub ambient_temp_c: f64,
    pub fumes_temp_c: f64,
    pub biomass_consumption_tonnes_per_month: f64,
    pub mass_flow_biomass_kg_s: f64,
    pub mass_flow_fumes_kg_s: f64,
    pub fumes_heat_capacity_j_kg_k: f64,
    pub wall_area_m2: f64,
    pub transmission_coeff_w_m2_c: f64,
}

impl Default for StudyDefaults {
    fn default() -> Self {
        Self {
            ambient_temp_c: 25.0,
            fumes_temp_c: 130.0,
            biomass_consumption_tonnes_per_month: 2.0,
            mass_flow_biomass_kg_s: 0.3,
            mass_flow_fumes_kg_s: 1.8,
            fumes_heat_capacity_j_kg_k: 1045.0,
            wall_area_m2: 2.0,
            transmission_coeff_w_m2_c: 0.03,
        }
    }
}

impl From<&StudyDefaults> for EnvironmentalStudyInput {
    fn from(d: &StudyDefaults) -> Self {
        EnvironmentalStudyInput {
            ambient_temp_c: d.ambient_temp_c,
            fumes_temp_c: d.fumes_temp_c,
            biomass_consumption_tonnes_per_month: d.biomass_consumption_tonnes_per_month,
            mass_flow_biomass_kg_s: d.mass_flow_biomass_kg_s,
            mass_flow_fumes_kg_s: d.mass_flow_fumes_kg_s,
            fumes_heat_capacity_j_kg_k: d.fumes_heat_capacity_j_kg_k,
            wall_area_m2: d.wall_area_m2,
            transmission_coeff_w_m2_c: d.transmission_coeff_w_m2_c,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" | "fr" | "en"
    pub language: String,
    pub log_format: LogFormat,
    /// 비용 추이 표시 기간 [년]
    pub projection_years: u32,
    pub default_fuel: String,
    pub default_power_demand_kw: f64,
    pub default_operation_duration_hours: f64,
    pub study: StudyDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            log_format: LogFormat::Text,
            projection_years: 20,
            default_fuel: "Bois bûche".to_string(),
            default_power_demand_kw: 1.0,
            default_operation_duration_hours: 1.0,
            study: StudyDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정을 어디서 얻었는지. 로깅 초기화 뒤에 기록하려고 따로 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// 기존 파일을 읽었다.
    Loaded,
    /// 파일이 없어 기본 설정을 새로 썼다.
    Created,
}

impl ConfigOrigin {
    /// 결과를 tracing 이벤트로 남긴다. 구독자 설치 후에 불러야 한다.
    pub fn log(self, path: &Path) {
        match self {
            ConfigOrigin::Loaded => tracing::debug!(path = %path.display(), "config loaded"),
            ConfigOrigin::Created => {
                tracing::info!(path = %path.display(), "default config written")
            }
        }
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<(Config, ConfigOrigin), ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok((cfg, ConfigOrigin::Loaded))
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok((cfg, ConfigOrigin::Created))
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}
