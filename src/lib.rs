//! 바이오매스 연소 설비의 효율, 손실, 연료비, 배출량을 추정하는 계산 라이브러리.
//! CLI는 이 라이브러리를 호출하는 얇은 껍데기다.

pub mod app;
pub mod combustion;
pub mod config;
pub mod error;
pub mod export;
pub mod fuel_db;
pub mod i18n;
pub mod logging;
pub mod optimization;
pub mod results;
pub mod ui_cli;

pub use error::{CalcError, CalcResult};
pub use fuel_db::{get_fuel_properties, list_fuel_ids, FuelProperties};
pub use results::{MetricKey, ResultSet};
