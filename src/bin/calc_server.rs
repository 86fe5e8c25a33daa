use clap::Parser;
use simple_calc::api;
use simple_calc::config::toml_config::TomlConfig;
use simple_calc::core::ConfigProvider;
use simple_calc::utils::error::CalcError;
use simple_calc::utils::{logger, validation::Validate};
use simple_calc::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    match args.config.clone() {
        Some(path) => {
            // 載入 TOML 配置
            let config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    logger::init_cli_logger(args.verbose);
                    report_and_exit(&e, &format!("Failed to load configuration '{}'", path));
                }
            };

            if config.json_logs() {
                logger::init_json_logger(config.log_level());
            } else {
                logger::init_cli_logger_with_level(args.verbose, config.log_level());
            }
            tracing::info!("📁 Loaded configuration from: {}", path);

            run(config).await
        }
        None => {
            logger::init_cli_logger(args.verbose);
            tracing::debug!("CLI config: {:?}", args);

            run(args).await
        }
    }
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        report_and_exit(&e, "Configuration validation failed");
    }

    let addr = config.bind_address();
    if let Err(e) = api::serve(&config).await {
        report_and_exit(&e, "Calculator server failed");
    }

    tracing::info!("✅ Server on {} shut down cleanly", addr);
    Ok(())
}

fn report_and_exit(e: &CalcError, context: &str) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    std::process::exit(e.severity().exit_code());
}
