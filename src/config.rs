use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const DATA_FILE: &str = "DATA_FILE";
    /// Set to "1" or "true" to surface read failures of the data file as
    /// storage errors instead of recovering into an empty collection.
    pub const STRICT_STORAGE: &str = "STRICT_STORAGE";
    pub const ADMIN_USERNAME: &str = "ADMIN_USERNAME";
    pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
    pub const PUBLIC_DIR: &str = "PUBLIC_DIR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const DATA_FILE: &str = "data.json";
    pub const PUBLIC_DIR: &str = "public";
    // Didactic login credentials carried over from the original deployment.
    // Not security-bearing; override via ADMIN_USERNAME / ADMIN_PASSWORD.
    pub const ADMIN_USERNAME: &str = "user";
    pub const ADMIN_PASSWORD: &str = "123456789";
}

/// Returns the absolute path to the crate directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so default file locations
/// resolve the same regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// How the store reacts to an unreadable or unparseable data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryMode {
    /// Treat a corrupt or unreadable document as an empty collection.
    Lenient,
    /// Surface read failures as storage errors.
    Strict,
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub recovery_mode: RecoveryMode,
    pub admin_username: String,
    pub admin_password: String,
    pub public_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let strict = env::var(env_vars::STRICT_STORAGE)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            data_file: env::var(env_vars::DATA_FILE)
                .map(PathBuf::from)
                .unwrap_or_else(|_| backend_dir().join(defaults::DATA_FILE)),
            recovery_mode: if strict {
                RecoveryMode::Strict
            } else {
                RecoveryMode::Lenient
            },
            admin_username: env::var(env_vars::ADMIN_USERNAME)
                .unwrap_or_else(|_| defaults::ADMIN_USERNAME.to_string()),
            admin_password: env::var(env_vars::ADMIN_PASSWORD)
                .unwrap_or_else(|_| defaults::ADMIN_PASSWORD.to_string()),
            public_dir: env::var(env_vars::PUBLIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| backend_dir().join(defaults::PUBLIC_DIR)),
        }
    }
}
