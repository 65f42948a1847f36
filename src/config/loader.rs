// Settings discovery, persistence and environment layering.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::BaseDirs;

use super::structs::Settings;
use crate::constants::config::{
    API_KEY_ENV, ENV_PREFIX, LOCAL_FILE_NAME, XDG_DIR_NAME, XDG_FILE_NAME,
};
use crate::error::{GitrError, Result};

/// Candidate settings paths in search order.
///
/// 1. `<cwd>/.gitr_config`
/// 2. `<home>/.gitr_config`
/// 3. `<home>/.config/gitr/config`
pub fn config_candidates(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(LOCAL_FILE_NAME)];
    if let Some(home) = home {
        candidates.push(home.join(LOCAL_FILE_NAME));
        candidates.push(home.join(".config").join(XDG_DIR_NAME).join(XDG_FILE_NAME));
    }
    candidates
}

/// Returns the first existing candidate, or the project-local path as the
/// default write target.
pub fn find_config_path_in(cwd: &Path, home: Option<&Path>) -> PathBuf {
    let candidates = config_candidates(cwd, home);
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .unwrap_or_else(|| candidates[0].clone())
}

/// [`find_config_path_in`] for the current directory and the user's home.
pub fn find_config_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let base_dirs = BaseDirs::new();
    let home = base_dirs.as_ref().map(|dirs| dirs.home_dir());
    let path = find_config_path_in(&cwd, home);
    tracing::debug!("Using configuration file: {}", path.display());
    Ok(path)
}

impl Settings {
    /// Reads a settings document.
    ///
    /// # Errors
    /// - [`GitrError::Io`] - the file cannot be read
    /// - [`GitrError::ConfigParse`] - the file is not a valid settings document
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| GitrError::ConfigParse(format!("{}: {}", path.display(), e)))
    }

    /// Writes the document as pretty JSON, creating parent directories.
    ///
    /// The file holds the API key, so on Unix it is made owner-only.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        tracing::debug!("Configuration written to {}", path.display());
        Ok(())
    }

    /// Effective settings for a generation run. Never persisted.
    ///
    /// Priority (high to low):
    /// 1. `GITR__*` environment variables, double underscore separating levels
    ///    - e.g. `GITR__OPENAI__MODEL=gpt-4o`
    ///    - e.g. `GITR__COMMIT_TEMPLATE__INCLUDE_SCOPE=false`
    /// 2. the stored document
    ///
    /// An API key that is still empty afterwards is taken from `OPENAI_API_KEY`.
    pub fn with_env_overrides(&self) -> Result<Self> {
        let layered = Config::builder()
            .add_source(Config::try_from(self)?)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = layered.try_deserialize()?;

        if settings.openai.api_key.trim().is_empty()
            && let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            tracing::debug!("API key taken from {}", API_KEY_ENV);
            settings.openai.api_key = key;
        }

        Ok(settings)
    }
}
