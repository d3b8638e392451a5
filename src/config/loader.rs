//! Reading `.scholar-site.json` from the site root.

use std::path::Path;

use super::{
    ConfigError,
    SiteSettings,
};

/// Name of the configuration file at the workspace root.
pub(super) const CONFIG_FILE_NAME: &str = ".scholar-site.json";

impl SiteSettings {
    /// Loads and validates the settings of the site at `workspace_root`.
    ///
    /// A site without a configuration file gets the defaults.
    ///
    /// # Errors
    /// - The file exists but cannot be read
    /// - The file is not valid JSON for `SiteSettings`
    /// - Validation fails; every failing field is reported
    pub fn load(workspace_root: &Path) -> Result<Self, ConfigError> {
        let settings = read_config_file(workspace_root)?.unwrap_or_else(|| {
            tracing::debug!("No {CONFIG_FILE_NAME}, using default settings");
            Self::default()
        });

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }
}

/// `Ok(None)` when the site has no configuration file.
fn read_config_file(workspace_root: &Path) -> Result<Option<SiteSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "Loading configuration");
    let content = std::fs::read_to_string(&config_path)?;
    Ok(Some(serde_json::from_str(&content)?))
}
