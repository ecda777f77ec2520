//! 바이오매스 연료 물성 테이블.
//! 값은 경험적 기본값이며 프로세스 수명 동안 변경되지 않는다.

use serde::Serialize;

use crate::error::{CalcError, CalcResult};

/// 연료 한 종류의 물리화학적 물성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelProperties {
    pub id: &'static str,
    /// 저위발열량 LHV(PCI) [kWh/kg]
    pub lower_heating_value: f64,
    /// 고위발열량 HHV(PCS) [kWh/kg]
    pub higher_heating_value: f64,
    /// 원소 조성 [질량 %]. 합이 100일 필요는 없다.
    pub carbon_pct: f64,
    pub hydrogen_pct: f64,
    pub oxygen_pct: f64,
    pub nitrogen_pct: f64,
    /// 함수율 [%]
    pub moisture_pct: f64,
    /// 참고 단가 [통화/톤]
    pub reference_price_per_tonne: f64,
}

pub fn fuels() -> &'static [FuelProperties] {
    FUELS
}

/// 선택 목록용 연료 식별자를 테이블 순서대로 반환한다.
pub fn list_fuel_ids() -> Vec<&'static str> {
    FUELS.iter().map(|f| f.id).collect()
}

/// 식별자와 정확히 일치하는 연료를 찾는다. 공백/대소문자 보정은 하지 않는다.
pub fn find_fuel(id: &str) -> Option<&'static FuelProperties> {
    FUELS.iter().find(|f| f.id == id)
}

/// 연료 물성을 조회한다. 등록되지 않은 식별자는 기본값 없이 오류가 된다.
pub fn get_fuel_properties(id: &str) -> CalcResult<&'static FuelProperties> {
    find_fuel(id).ok_or_else(|| CalcError::UnknownFuel(id.to_string()))
}

const FUELS: &[FuelProperties] = &[
    fuel("Bois bûche", 3.8, 5.1, [49.0, 6.0, 44.0, 0.3], 20.0, 75.0),
    fuel("Granulés de bois", 4.6, 5.1, [47.1, 5.5, 42.5, 0.3], 6.0, 289.0),
    fuel("Plaquettes forestières", 2.2, 2.4, [49.5, 6.0, 44.0, 0.5], 40.0, 100.0),
    fuel("Paille de maïs", 4.3, 5.07, [46.1, 5.9, 40.1, 0.8], 15.0, 63.0),
    fuel("Pailles de blé", 4.0, 5.02, [43.4, 6.0, 44.5, 0.8], 15.0, 28.0),
    fuel("Miscanthus déchiqueté", 4.4, 5.3, [49.0, 6.0, 40.0, 0.15], 10.0, 65.0),
    fuel("Chêne", 3.8, 5.4, [49.5, 5.4, 44.7, 0.3], 20.0, 360.0),
    fuel("Grignons d'olive", 5.7, 6.1, [55.1, 7.0, 33.9, 1.3], 7.0, 159.0),
    fuel("Coques de noix", 5.2, 5.8, [54.0, 6.5, 35.0, 1.0], 8.0, 180.0),
    fuel("Tiges de colza", 4.2, 5.0, [46.0, 5.8, 42.0, 0.6], 12.0, 90.0),
    fuel("Marc de raisin", 3.5, 4.2, [48.0, 6.0, 40.0, 0.7], 25.0, 50.0),
];

/// 조성은 [C, H, O, N] 순서.
const fn fuel(
    id: &'static str,
    lhv: f64,
    hhv: f64,
    chon: [f64; 4],
    moisture_pct: f64,
    price: f64,
) -> FuelProperties {
    FuelProperties {
        id,
        lower_heating_value: lhv,
        higher_heating_value: hhv,
        carbon_pct: chon[0],
        hydrogen_pct: chon[1],
        oxygen_pct: chon[2],
        nitrogen_pct: chon[3],
        moisture_pct,
        reference_price_per_tonne: price,
    }
}
