use clap::Parser;
use installment_cli::utils::{logger, validation::Validate};
use installment_cli::{CliConfig, ConsoleSender, Handler, InstallmentError, OutputFormat, Settings};
use std::io;

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // --help / --version 正常結束
            if !e.use_stderr() {
                e.exit();
            }
            eprintln!("Ошибка: {e}");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Installment calculation failed: {}", e);
        eprintln!("Ошибка: {e}");
        if let Some(hint) = e
            .downcast_ref::<InstallmentError>()
            .and_then(InstallmentError::recovery_suggestion)
        {
            eprintln!("💡 {hint}");
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let settings = Settings::load(config.config.as_deref())?;
    settings.validate()?;

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    let handler =
        Handler::new(ConsoleSender::for_format(format), settings).with_output_format(format);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let quote = handler.run(&config.flag_input(), stdin.lock(), &mut stdout)?;

    tracing::info!(
        "✅ Total payment {:.2} (overpayment {:.2})",
        quote.total,
        quote.overpayment
    );
    Ok(())
}
