use biomass_combustion_toolbox::{app, config, i18n, logging, ui_cli::Cli};
use clap::Parser;

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("Erreur: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), app::AppError> {
    let path = cli.config.clone().unwrap_or_else(config::Config::default_path);
    let (cfg, origin) = config::load_or_default(&path)?;
    logging::init_logging(cli.log_format.unwrap_or(cfg.log_format));
    origin.log(&path);
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(cli, &cfg, &tr)
}
