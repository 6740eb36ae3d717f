use std::env;

use mockfhir_server::config::loader::load_config;
use mockfhir_server::{AppState, ServerBuilder, observability};
use mockfhir_store::load_fixtures;

/// How the configuration path was determined.
#[derive(Debug, Clone, Copy)]
enum ConfigSource {
    /// From --config CLI argument
    CliArgument,
    /// From MOCKFHIR_CONFIG environment variable
    EnvironmentVariable,
    /// Default path (mockfhir.toml)
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CliArgument => write!(f, "CLI argument (--config)"),
            Self::EnvironmentVariable => write!(f, "environment variable (MOCKFHIR_CONFIG)"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[tokio::main]
async fn main() {
    // Optional .env for local development
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    observability::init_tracing();

    let (config_path, source) = resolve_config_path();

    let cfg = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        path = %config_path.as_deref().unwrap_or("mockfhir.toml"),
        source = %source,
        "Configuration loaded"
    );

    observability::apply_logging_level(&cfg.logging.level);

    let store = match load_fixtures(&cfg.data.dir) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Fixture loading failed: {e}");
            std::process::exit(2);
        }
    };

    tracing::info!(
        data_dir = %cfg.data.dir.display(),
        resource_types = store.loaded_types().len(),
        "Fixture store loaded"
    );

    let server = ServerBuilder::new(AppState::new(store))
        .with_config(&cfg)
        .build();

    if let Err(err) = server.run().await {
        eprintln!("Server error: {err}");
    }
}

/// Resolve the configuration file path.
///
/// Priority order:
/// 1. CLI argument: --config <path>
/// 2. Environment variable: MOCKFHIR_CONFIG
/// 3. Default: mockfhir.toml (loader falls back when absent)
fn resolve_config_path() -> (Option<String>, ConfigSource) {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config"
            && let Some(path) = args.next()
        {
            return (Some(path), ConfigSource::CliArgument);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return (Some(path.to_string()), ConfigSource::CliArgument);
        }
    }
    if let Ok(path) = env::var("MOCKFHIR_CONFIG") {
        return (Some(path), ConfigSource::EnvironmentVariable);
    }
    (None, ConfigSource::Default)
}
