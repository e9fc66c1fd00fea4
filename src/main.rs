use tracing_subscriber::EnvFilter;

use reviewrank::catalog;
use reviewrank::classifier::ClassifierClient;
use reviewrank::config::Config;
use reviewrank::core::pipeline::run_pipeline;
use reviewrank::ui;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("reviewrank=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("reviewrank starting...");

    // Load configuration
    let config = Config::load("config.toml");
    tracing::debug!("Config: {:?}", config);

    // Load catalog, or fall back to the built-in sample products
    let raw_items = match config.catalog.path.as_deref() {
        Some(path) => match catalog::load(path) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Failed to load catalog {path}: {e}");
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No catalog configured, using demo products");
            catalog::demo_raw()
        }
    };

    // Create classifier client
    let classifier = if config.classifier.enabled {
        match ClassifierClient::from_config(&config.classifier) {
            Ok(client) => {
                tracing::info!(base_url = %config.classifier.base_url, "Classifier client configured");
                Some(client)
            }
            Err(e) => {
                tracing::warn!("Classifier unavailable, unlabeled reviews will be skipped: {e}");
                None
            }
        }
    } else {
        None
    };

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let output = rt.block_on(run_pipeline(
        raw_items,
        classifier.as_ref(),
        config.classifier.categorize,
    ));

    match ui::render(&output, &config.display, chrono::Utc::now()) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            tracing::error!("Failed to render output: {e}");
            std::process::exit(1);
        }
    }
}
