use clap::Parser;
use simple_calc::core::demo::{demo_report, format_line, DEMO_TITLE};
use simple_calc::utils::logger;
use simple_calc::CalcArgs;

fn main() -> anyhow::Result<()> {
    let args = CalcArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let outcome = match args.request() {
        Ok(Some(request)) => request.evaluate().map(|result| {
            println!("{}", format_line(&request, result));
        }),
        Ok(None) => demo_report().map(|lines| {
            println!("{}", DEMO_TITLE);
            for line in lines {
                println!("{}", line);
            }
        }),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
