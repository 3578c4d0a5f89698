use std::path::PathBuf;

/// Default upload ceiling, in bytes
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of all persisted state: the index file and the blob directory
    pub storage_path: PathBuf,
    pub listen_addr: String,
    pub max_upload_bytes: usize,
    pub durable_writes: bool,
    pub db_max_connections: u32,
    /// Check every indexed id for its blob before serving
    pub audit_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            storage_path: lookup("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/tmp/")),
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8888".to_string()),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            durable_writes: lookup("DURABLE_WRITES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            audit_on_startup: lookup("AUDIT_ON_STARTUP")
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Location of the upload index database
    pub fn index_path(&self) -> PathBuf {
        self.storage_path.join("upload.db")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage_path.as_os_str().is_empty() {
            return Err("STORAGE_PATH cannot be empty".to_string());
        }

        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.max_upload_bytes == 0 {
            return Err("MAX_UPLOAD_BYTES must be greater than 0".to_string());
        }

        if self.db_max_connections < 1 || self.db_max_connections > 100 {
            return Err("DB_MAX_CONNECTIONS must be between 1 and 100".to_string());
        }

        Ok(())
    }
}
