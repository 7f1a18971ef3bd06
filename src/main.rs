//! Clarity CLI - guided focus exercises in the terminal.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clarity::adapters::{FileKeyValueStore, InMemoryKeyValueStore, TracingListener};
use clarity::application::ClarityApp;
use clarity::config::{AppConfig, LoggingConfig, StorageBackend, StorageConfig};
use clarity::ports::KeyValueStore;

mod console;

/// Initialize tracing on stderr so log lines stay out of the prompts.
///
/// `RUST_LOG` wins over the configured filter when set.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn open_store(storage: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match storage.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&storage.path)),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    }
}

fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);
    tracing::debug!(
        backend = ?config.storage.backend,
        path = %config.storage.path.display(),
        "Opening mode store"
    );

    let mut app = ClarityApp::start(open_store(&config.storage));
    app.subscribe(Arc::new(TracingListener));

    console::run(&mut app)
}
