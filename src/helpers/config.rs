use anyhow::{Result, bail};
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_DATABASE: &str = "bear_care";
pub const DEFAULT_COLLECTION: &str = "records";
pub const DEFAULT_INPUT_PATH: &str = "scripts/records.json";

/// Everything the loader needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
    pub input_path: PathBuf,
}

impl LoaderConfig {
    /// Merges `.env` (if present) into the process environment, then reads it.
    pub fn from_env() -> Result<Self> {
        merge_settings_file(dotenvy::dotenv());
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = match lookup("MONGODB_URI") {
            Some(uri) if !uri.trim().is_empty() => uri,
            _ => bail!("MONGODB_URI is not set"),
        };

        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            mongodb_uri,
            database: or_default("DATABASE_NAME", DEFAULT_DATABASE),
            collection: or_default("COLLECTION_NAME", DEFAULT_COLLECTION),
            input_path: PathBuf::from(or_default("RECORDS_PATH", DEFAULT_INPUT_PATH)),
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SettingsFile {
    Loaded(PathBuf),
    Missing,
    Rejected,
}

/// A missing `.env` is fine; a broken one is reported and otherwise ignored.
fn merge_settings_file(loaded: dotenvy::Result<PathBuf>) -> SettingsFile {
    match loaded {
        Ok(path) => {
            debug!("Loaded settings from {}", path.display());
            SettingsFile::Loaded(path)
        }
        Err(err) if err.not_found() => SettingsFile::Missing,
        Err(err) => {
            warn!("Ignoring unreadable .env file: {err}");
            SettingsFile::Rejected
        }
    }
}
