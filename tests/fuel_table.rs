use biomass_combustion_toolbox::ui_cli::match_fuel_loosely;
use biomass_combustion_toolbox::{get_fuel_properties, list_fuel_ids, CalcError};

#[test]
fn table_lists_eleven_fuels_in_order() {
    let ids = list_fuel_ids();
    assert_eq!(ids.len(), 11);
    assert_eq!(ids.first(), Some(&"Bois bûche"));
    assert_eq!(ids.last(), Some(&"Marc de raisin"));
}

#[test]
fn pellets_values_match_reference() {
    let f = get_fuel_properties("Granulés de bois").expect("pellets");
    assert_eq!(f.lower_heating_value, 4.6);
    assert_eq!(f.higher_heating_value, 5.1);
    assert_eq!(f.carbon_pct, 47.1);
    assert_eq!(f.hydrogen_pct, 5.5);
    assert_eq!(f.oxygen_pct, 42.5);
    assert_eq!(f.nitrogen_pct, 0.3);
    assert_eq!(f.moisture_pct, 6.0);
    assert_eq!(f.reference_price_per_tonne, 289.0);
}

#[test]
fn lookup_requires_exact_identifier() {
    for id in ["bois bûche", " Bois bûche", "  BOIS BÛCHE ", "chêne"] {
        assert_eq!(
            get_fuel_properties(id).unwrap_err(),
            CalcError::UnknownFuel(id.into()),
            "{id:?}"
        );
    }
    assert_eq!(get_fuel_properties("Chêne").expect("oak").id, "Chêne");
}

#[test]
fn interactive_matching_tolerates_case_and_space() {
    assert_eq!(match_fuel_loosely("  coques de noix "), Some("Coques de noix"));
    assert_eq!(match_fuel_loosely("BOIS BÛCHE"), Some("Bois bûche"));
    assert_eq!(match_fuel_loosely("Tourbe"), None);
}

#[test]
fn unknown_identifier_has_no_default() {
    assert_eq!(
        get_fuel_properties("Tourbe").unwrap_err(),
        CalcError::UnknownFuel("Tourbe".into())
    );
}
