use biomass_combustion_toolbox::config::Config;
use biomass_combustion_toolbox::logging::LogFormat;
use biomass_combustion_toolbox::ui_cli::{CalculateArgs, Cli, Command, OutputFormat};
use clap::Parser;

fn calculate_args(argv: &[&str]) -> CalculateArgs {
    let cli = Cli::try_parse_from(argv).expect("parse");
    match cli.command {
        Some(Command::Calculate(args)) => args,
        other => panic!("expected calculate, got {other:?}"),
    }
}

#[test]
fn config_defaults_fill_missing_flags() {
    let args = calculate_args(&["biomass_combustion_toolbox", "calculate", "--power", "5"]);
    assert_eq!(args.format, OutputFormat::Table);
    assert!(!args.projection);

    let cfg = Config::default();
    let (base, study) = args.to_inputs(&cfg);
    assert_eq!(base.fuel_id, "Bois bûche");
    assert_eq!(base.power_demand_kw, 5.0);
    assert_eq!(base.operation_duration_hours, 1.0);
    assert_eq!(base.biomass_price_per_tonne, None);

    assert_eq!(study.ambient_temp_c, 25.0);
    assert_eq!(study.fumes_temp_c, 130.0);
    assert_eq!(study.biomass_consumption_tonnes_per_month, 2.0);
    assert_eq!(study.mass_flow_biomass_kg_s, 0.3);
    assert_eq!(study.mass_flow_fumes_kg_s, 1.8);
    assert_eq!(study.fumes_heat_capacity_j_kg_k, 1045.0);
    assert_eq!(study.wall_area_m2, 2.0);
    assert_eq!(study.transmission_coeff_w_m2_c, 0.03);
}

#[test]
fn flags_override_a_customised_config() {
    let mut cfg = Config::default();
    cfg.default_fuel = "Chêne".into();
    cfg.default_operation_duration_hours = 8.0;
    cfg.study.wall_area_m2 = 4.5;

    let args = calculate_args(&[
        "biomass_combustion_toolbox",
        "calculate",
        "--hours",
        "3",
        "--price",
        "120",
        "--ambient-temp",
        "-5",
        "--format",
        "json",
    ]);
    assert_eq!(args.format, OutputFormat::Json);

    let (base, study) = args.to_inputs(&cfg);
    assert_eq!(base.fuel_id, "Chêne");
    assert_eq!(base.power_demand_kw, 1.0);
    assert_eq!(base.operation_duration_hours, 3.0);
    assert_eq!(base.biomass_price_per_tonne, Some(120.0));
    assert_eq!(study.ambient_temp_c, -5.0);
    assert_eq!(study.wall_area_m2, 4.5);
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli = Cli::try_parse_from([
        "biomass_combustion_toolbox",
        "fuels",
        "--lang",
        "en",
        "--log-format",
        "json",
    ])
    .expect("parse");
    assert!(matches!(cli.command, Some(Command::Fuels)));
    assert_eq!(cli.lang.as_deref(), Some("en"));
    assert_eq!(cli.log_format, Some(LogFormat::Json));
}

#[test]
fn no_subcommand_means_interactive_mode() {
    let cli = Cli::try_parse_from(["biomass_combustion_toolbox"]).expect("parse");
    assert!(cli.command.is_none());
}

#[test]
fn non_numeric_power_is_a_parse_error() {
    let res = Cli::try_parse_from(["biomass_combustion_toolbox", "calculate", "--power", "abc"]);
    assert!(res.is_err());
}
