//! Settings persistence.
//!
//! Everything lives in a single YAML document: the agent's settings plus
//! the company list cached at the last successful settings save. The
//! record is overwritten wholesale on each save; there are no partial
//! updates. Saving goes through [`save_verified`], which probes the API
//! with the new credentials first, so invalid credentials are never
//! persisted over working ones.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};
use crate::remote::{Company, HelpdeskApi};

/// Environment override for the config directory, used for test isolation.
pub const CONFIG_DIR_ENV: &str = "DESKPOST_CONFIG_DIR";

/// Domain must be a hostname-safe token; it is interpolated into the
/// request URL.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z0-9-]+$").unwrap());

/// Stored credentials and defaults for the helpdesk API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub domain: String,
    /// Agent to attach as responder on created tickets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<u64>,
}

impl Settings {
    /// Check that the settings are complete and the domain is safe to
    /// interpolate into a URL, before any request is built with them.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(DeskError::Config("API key must not be empty".to_string()));
        }
        if self.domain.is_empty() {
            return Err(DeskError::Config("domain must not be empty".to_string()));
        }
        if !DOMAIN_RE.is_match(&self.domain) {
            return Err(DeskError::Config(format!(
                "invalid domain '{}': only letters, numbers, and hyphens are allowed",
                self.domain
            )));
        }
        Ok(())
    }
}

/// The single persisted record: settings plus the probed company list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub companies: Vec<Company>,
}

/// Persistence boundary for settings, substitutable in tests.
pub trait SettingsStore {
    /// Load the stored state, or defaults if nothing readable exists.
    /// Never fails the caller.
    fn load(&self) -> StoredState;

    /// Overwrite the stored state wholesale.
    fn save(&self, state: &StoredState) -> Result<()>;
}

/// YAML file store under the user's config directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default config path, honoring the
    /// `DESKPOST_CONFIG_DIR` override.
    pub fn default_path() -> Result<Self> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return Ok(Self::new(PathBuf::from(dir).join("config.yaml")));
        }
        let dirs = ProjectDirs::from("", "", "deskpost").ok_or_else(|| {
            DeskError::Config("could not determine a config directory".to_string())
        })?;
        Ok(Self::new(dirs.config_dir().join("config.yaml")))
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> StoredState {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_yaml_ng::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed config at {}: {}", self.path.display(), e);
                StoredState::default()
            }),
            // Missing or unreadable file reads as empty state.
            Err(_) => StoredState::default(),
        }
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml_ng::to_string(state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Validate new settings, probe the API with them, and persist settings
/// and companies together.
///
/// Nothing is written unless the probe succeeds, so a failed save leaves
/// the previously stored settings intact. Returns the probed company
/// list.
pub async fn save_verified<A, S>(api: &A, store: &S, settings: Settings) -> Result<Vec<Company>>
where
    A: HelpdeskApi + ?Sized,
    S: SettingsStore + ?Sized,
{
    settings.validate()?;
    let companies = api.list_companies().await?;
    store.save(&StoredState {
        settings,
        companies: companies.clone(),
    })?;
    Ok(companies)
}
