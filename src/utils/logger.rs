use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾規則，`RUST_LOG` 優先
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "rosenbrock_eval=debug,info"
    } else {
        "rosenbrock_eval=info"
    }
}

/// Logs go to stderr; stdout carries only the banner and the result.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
