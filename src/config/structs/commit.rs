//! Commit template preferences.

use serde::{Deserialize, Serialize};

use crate::constants::commit::{DEFAULT_MAX_LENGTH, DEFAULT_STYLE};

/// Commit template configuration.
///
/// Controls the instructions given to the model and whether the commit flow
/// asks for confirmation.
///
/// # Fields
/// - `style`: message style requested from the model (default: `"conventional"`)
/// - `max_length`: maximum message length in characters (default: `72`)
/// - `include_scope`: ask for a `type(scope):` scope when appropriate (default: `true`)
/// - `commit_without_confirmation`: skip the confirmation menu in `--commit` (default: `false`)
///
/// # Example
/// ```json
/// "commit_template": {
///   "style": "conventional",
///   "max_length": 72,
///   "include_scope": true,
///   "commit_without_confirmation": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommitTemplateConfig {
    pub style: String,

    pub max_length: u32,

    pub include_scope: bool,

    pub commit_without_confirmation: bool,
}

impl Default for CommitTemplateConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            max_length: DEFAULT_MAX_LENGTH,
            include_scope: true,
            commit_without_confirmation: false,
        }
    }
}

impl CommitTemplateConfig {
    /// Instruction sentence selected by `include_scope`.
    pub fn scope_instruction(&self) -> &'static str {
        if self.include_scope {
            "Include a scope in the commit message when appropriate."
        } else {
            "Do not include a scope in the commit message."
        }
    }
}
