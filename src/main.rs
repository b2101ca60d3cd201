use clap::Parser;
use portfolio_registry::utils::logger;
use portfolio_registry::{app, CliConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app::run(&config, &mut stdout) {
        tracing::error!("❌ {} (exit code {})", e, e.exit_code());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
