//! Top-level settings document.

use serde::{Deserialize, Serialize};

use crate::error::{GitrError, Result};

use super::commit::CommitTemplateConfig;
use super::openai::OpenAIConfig;

/// Settings document.
///
/// One JSON file holding API connectivity, generation parameters and commit
/// template preferences. Fields serialize in declaration order, so saving an
/// unchanged document yields an identical file.
///
/// # File Locations
/// Searched in order, first existing wins:
/// 1. `./.gitr_config`
/// 2. `~/.gitr_config`
/// 3. `~/.config/gitr/config`
///
/// When none exists, `./.gitr_config` is written.
///
/// # Example
/// ```json
/// {
///   "openai": {
///     "base_url": "https://api.openai.com/v1",
///     "api_key": "sk-...",
///     "model": "gpt-4o-mini"
///   },
///   "commit_template": {
///     "style": "conventional",
///     "max_length": 72
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub openai: OpenAIConfig,

    #[serde(default)]
    pub commit_template: CommitTemplateConfig,
}

impl Settings {
    /// Required fields in validation order.
    fn required_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("endpoint", self.openai.base_url.as_str()),
            ("api_key", self.openai.api_key.as_str()),
            ("model", self.openai.model.as_str()),
        ]
    }

    /// First empty required field, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        self.required_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }

    /// Fails with [`GitrError::ConfigValidation`] naming the first missing
    /// required field (endpoint, then api_key, then model).
    pub fn validate(&self) -> Result<()> {
        match self.first_missing_field() {
            Some(field) => Err(GitrError::ConfigValidation { field }),
            None => Ok(()),
        }
    }

    /// `true` when guided setup should run instead of a generation call.
    pub fn is_incomplete(&self) -> bool {
        self.first_missing_field().is_some()
    }
}
