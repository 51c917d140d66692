// Configuration module entry point
// Builds the fixed server configuration and the shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::PathBuf;

// Re-export public types
pub use state::AppState;
pub use types::{Config, HttpConfig, PerformanceConfig, ServerConfig};

/// `Server` header value sent with every response
pub const DEFAULT_SERVER_NAME: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

impl Config {
    /// Build the configuration from built-in defaults.
    ///
    /// No file or environment source is attached: the server always listens
    /// on `0.0.0.0:5000` and serves the directory holding its executable.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.root", default_root())?
            .set_default("http.server_name", DEFAULT_SERVER_NAME)?
            .set_default("http.index_files", vec!["index.html", "index.htm"])?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.shutdown_grace_secs", 5)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Canonicalize the root directory once, at startup.
    pub fn resolve_root(&self) -> Result<PathBuf, String> {
        let root = PathBuf::from(&self.server.root)
            .canonicalize()
            .map_err(|e| format!("Cannot resolve root directory '{}': {e}", self.server.root))?;

        if !root.is_dir() {
            return Err(format!("Root '{}' is not a directory", root.display()));
        }
        Ok(root)
    }
}

/// Directory containing the running executable.
///
/// Falls back to the current directory when the executable path cannot be
/// determined.
fn default_root() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.display().to_string()))
        .unwrap_or_else(|| ".".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
        let exe = std::env::current_exe().unwrap();
        assert_eq!(PathBuf::from(&cfg.server.root), exe.parent().unwrap());
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.http.index_files, vec!["index.html", "index.htm"]);
        assert_eq!(cfg.http.server_name, DEFAULT_SERVER_NAME);
        assert!(cfg.performance.keep_alive);
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load().unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_resolve_root() {
        let mut cfg = Config::load().unwrap();
        cfg.server.root = env!("CARGO_MANIFEST_DIR").to_string();
        let root = cfg.resolve_root().unwrap();
        assert!(root.is_absolute());
        assert!(root.join("Cargo.toml").is_file());
    }

    #[test]
    fn test_default_root_is_executable_directory() {
        let cfg = Config::load().unwrap();
        let root = cfg.resolve_root().unwrap();
        let exe = std::env::current_exe().unwrap().canonicalize().unwrap();
        assert_eq!(exe.parent().unwrap(), root);
    }

    #[test]
    fn test_resolve_root_missing() {
        let mut cfg = Config::load().unwrap();
        cfg.server.root = "/definitely/not/a/real/dir".to_string();
        assert!(cfg.resolve_root().is_err());
    }

    #[test]
    fn test_resolve_root_not_a_directory() {
        let mut cfg = Config::load().unwrap();
        cfg.server.root = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml").to_string();
        let err = cfg.resolve_root().unwrap_err();
        assert!(err.contains("not a directory"));
    }
}
