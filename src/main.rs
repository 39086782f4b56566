use clap::Parser;
use rosenbrock_eval::utils::{logger, validation::Validate};
use rosenbrock_eval::{CliConfig, Evaluator, LocalStorage};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rosenbrock evaluator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.work_dir.clone());
    let evaluator = Evaluator::new(storage, config);

    match evaluator.run() {
        Ok(evaluation) => {
            tracing::info!("✅ Evaluation completed: fun = {}", evaluation);
        }
        Err(e) => {
            tracing::error!(
                "❌ Evaluation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
