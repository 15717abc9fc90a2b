use glados_app::presentation::bootstrap::build_runner;
use glados_domain::load_credentials;
use glados_infrastructure::config::{Settings, ENV_COOKIES};
use glados_infrastructure::logging::{init_logger, LoggingOptions};

#[tokio::main]
async fn main() {
    let settings = Settings::from_env();

    let options = LoggingOptions {
        level: settings.log_level,
        log_dir: settings.log_dir.clone(),
    };
    if let Err(e) = init_logger(&options) {
        eprintln!("⚠️  Failed to initialize logging: {}", e);
        eprintln!("   Falling back to console logging only");

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .try_init();
    }

    tracing::info!("🚀 GLaDOS check-in v{}", env!("CARGO_PKG_VERSION"));
    for warning in &settings.warnings {
        tracing::warn!("Configuration: {}", warning);
    }

    let credentials = load_credentials(&settings.raw_cookies);
    tracing::info!("{} credential(s) found in {}", credentials.len(), ENV_COOKIES);

    let runner = match build_runner(&settings) {
        Ok(runner) => runner,
        Err(e) => {
            tracing::error!("❌ Failed to start: {:#}", e);
            return;
        }
    };

    runner.run(credentials).await;
    tracing::info!("✅ Run finished");
}
