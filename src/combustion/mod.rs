//! 바이오매스 연소 설비 성능 계산 모듈 모음.

pub mod combustion_properties;
pub mod efficiency;
pub mod environmental;
pub mod fuel_economics;
pub mod performance;
pub mod thermal_losses;

pub use combustion_properties::*;
pub use efficiency::*;
pub use environmental::*;
pub use fuel_economics::*;
pub use performance::*;
pub use thermal_losses::*;
