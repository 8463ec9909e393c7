//! CLI command implementations
//!
//! Boot stays here: main.rs parses nothing and opens nothing.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::http::{HttpServer, ServiceConfig};
use crate::observability::Logger;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the matching command
pub fn run() -> CliResult<()> {
    match Cli::parse_args().command {
        Command::Init { config } => init(&config),
        Command::Start { config } => start(&config),
    }
}

/// Write a default configuration file, refusing to overwrite one
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized());
    }

    let config = ServiceConfig::default();
    let content = serde_json::to_string_pretty(&config)?;
    fs::write(config_path, content)?;

    Logger::info(
        "CONFIG_WRITTEN",
        &[("path", config_path.display().to_string().as_str())],
    );

    Ok(())
}

/// Load configuration and serve the catalog API until interrupted
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    let store = Arc::new(MemoryStore::new());
    let server = HttpServer::new(store, config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Read and validate a configuration file
pub fn load_config(path: &Path) -> CliResult<ServiceConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: ServiceConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    config.validate().map_err(CliError::config_error)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonedb.json");

        init(&path).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.port, 8002);
        assert_eq!(config.api_key, "1234");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonedb.json");

        init(&path).unwrap();
        let err = init(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonedb.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonedb.json");
        fs::write(&path, r#"{"api_key": ""}"#).unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
