use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "simple_calc=info";
const VERBOSE_FILTER: &str = "simple_calc=debug,tower_http=debug,info";

/// 優先順序: `RUST_LOG` > `--verbose` > 設定檔 level > 預設值
pub fn default_directives(verbose: bool, level: Option<&str>) -> String {
    match level {
        _ if verbose => VERBOSE_FILTER.to_string(),
        Some(level) => format!("simple_calc={},info", level.to_ascii_lowercase()),
        None => DEFAULT_FILTER.to_string(),
    }
}

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, level)))
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with_level(verbose, None);
}

/// `level` 來自設定檔，`--verbose` 與 `RUST_LOG` 仍然優先
pub fn init_cli_logger_with_level(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(false, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
