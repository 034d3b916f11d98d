use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{PortalError, Result};
use crate::view::ColumnVisibility;

/// User-adjustable presentation settings, handed explicitly to whatever
/// renders them.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub columns: ColumnVisibility,
    #[serde(default)]
    pub account: AccountProfile,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct AccountProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub legal_name: String,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub fiscal_address: String,
}

/// Read/write collaborator for [`Settings`].
pub trait SettingsStore {
    /// Missing settings are not an error; they load as defaults.
    fn load(&self) -> Result<Settings>;
    fn save(&self, settings: &Settings) -> Result<()>;

    fn update<F>(&self, change: F) -> Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.load()?;
        change(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}

/// settings.toml inside the config directory
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join("settings.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| PortalError::ConfigParse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let content = toml::to_string_pretty(settings).map_err(|e| PortalError::ConfigWrite {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// Keeps settings in memory only
#[derive(Default)]
pub struct MemorySettingsStore {
    settings: RefCell<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RefCell::new(Some(settings)),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings.borrow().clone().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        *self.settings.borrow_mut() = Some(settings.clone());
        Ok(())
    }
}
