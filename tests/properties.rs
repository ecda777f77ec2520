//! 효율/손실/연소 특성 함수의 불변식 검사 (proptest).
use biomass_combustion_toolbox::combustion::{
    combustion_properties, technical_efficiency, thermal_efficiency, thermal_losses,
    TECHNICAL_EFFICIENCY_BOUNDS, THERMAL_EFFICIENCY_BOUNDS,
};
use biomass_combustion_toolbox::CalcError;
use proptest::prelude::*;

proptest! {
    #[test]
    fn thermal_efficiency_within_bounds_and_non_increasing(
        m1 in 0.0f64..=100.0,
        m2 in 0.0f64..=100.0,
    ) {
        let (lo, hi) = if m1 <= m2 { (m1, m2) } else { (m2, m1) };
        let e_lo = thermal_efficiency(lo).unwrap();
        let e_hi = thermal_efficiency(hi).unwrap();
        let bounds = THERMAL_EFFICIENCY_BOUNDS.min..=THERMAL_EFFICIENCY_BOUNDS.max;
        prop_assert!(bounds.contains(&e_lo));
        prop_assert!(bounds.contains(&e_hi));
        prop_assert!(e_hi <= e_lo);
    }

    #[test]
    fn technical_efficiency_never_exceeds_thermal(moisture in 0.0f64..=100.0) {
        let thermal = thermal_efficiency(moisture).unwrap();
        let technical = technical_efficiency(thermal, moisture).unwrap();
        prop_assert!(technical <= thermal);
        prop_assert!(technical >= TECHNICAL_EFFICIENCY_BOUNDS.min);
    }

    #[test]
    fn radiation_plus_convection_is_five_percent(
        energy in 0.0f64..1.0e7,
        moisture in 0.0f64..=100.0,
    ) {
        let losses = thermal_losses(energy, moisture).unwrap();
        let sum = losses.radiation_kwh + losses.convection_kwh;
        prop_assert!((sum - 0.05 * energy).abs() <= 1e-9 * energy.max(1.0));
    }

    #[test]
    fn exhaust_loss_grows_with_moisture(
        energy in 1.0f64..1.0e7,
        m1 in 0.0f64..99.0,
        step in 0.5f64..1.0,
    ) {
        let m2 = m1 + step;
        let low = thermal_losses(energy, m1).unwrap();
        let high = thermal_losses(energy, m2).unwrap();
        prop_assert!(high.exhaust_kwh > low.exhaust_kwh);
    }

    #[test]
    fn wet_flue_gas_reduces_to_dry(lhv in 0.1f64..10.0, moisture in 0.0f64..=100.0) {
        let props = combustion_properties(lhv, moisture).unwrap();
        let back = props.wet_flue_gas_power / (1.0 + moisture / 100.0);
        prop_assert!((back - props.dry_flue_gas_power).abs() < 1e-9);
    }

    #[test]
    fn moisture_outside_range_is_rejected(
        moisture in prop_oneof![-1.0e3f64..-1e-6, 100.0001f64..1.0e3],
    ) {
        let is_invalid = matches!(
            thermal_efficiency(moisture),
            Err(CalcError::InvalidInput { .. })
        );
        prop_assert!(is_invalid);
    }
}

#[test]
fn non_positive_heating_value_is_rejected() {
    assert!(matches!(
        combustion_properties(0.0, 10.0),
        Err(CalcError::InvalidInput {
            what: "lower_heating_value",
            ..
        })
    ));
}
