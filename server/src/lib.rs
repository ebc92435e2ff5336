//! QR rendering web service: browser form, generate endpoint, bootstrap.

pub mod app;
pub mod config;
pub mod server;

use tracing_subscriber::EnvFilter;

use config::AppConfig;

const DOTENV_CANDIDATES: [&str; 2] = [".env", "../.env"];

/// Load the first .env found among `candidates`. Returns the path that was loaded.
fn load_dotenv_from<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|path| dotenvy::from_filename(path).is_ok())
}

/// Load .env, then install the global tracing subscriber.
///
/// The .env file is read first so a `RUST_LOG` set there reaches the filter.
/// Without `RUST_LOG` the filter defaults to `info`.
pub fn init_tracing() {
    let loaded = load_dotenv_from(&DOTENV_CANDIDATES);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match loaded {
        Some(path) => tracing::info!("Loaded .env from: {path}"),
        None => tracing::info!("No .env file found, using system environment variables"),
    }
}

/// Load runtime config from the environment. Call after [`init_tracing`].
pub fn init_foundation() -> AppConfig {
    let config = AppConfig::load();
    tracing::info!(
        host = %config.server_host,
        port = config.server_port,
        "Configuration loaded"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::load_dotenv_from;

    #[test]
    fn dotenv_values_are_visible_before_filter_setup() {
        let dir = std::env::temp_dir().join(format!("qr-service-dotenv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(".env");
        std::fs::write(&path, "QR_SERVICE_TEST_LOG_FILTER=qr_service_lib=debug\n").unwrap();
        let path_str = path.to_str().unwrap();

        let loaded = load_dotenv_from(&["/nonexistent/qr-service/.env", path_str]);
        assert_eq!(loaded, Some(path_str));
        assert_eq!(
            std::env::var("QR_SERVICE_TEST_LOG_FILTER").unwrap(),
            "qr_service_lib=debug"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_dotenv_loads_nothing() {
        assert_eq!(load_dotenv_from(&["/nonexistent/qr-service/.env"]), None);
    }
}
