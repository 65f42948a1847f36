//! Global constants.

/// Settings defaults and discovery
pub mod config {
    /// Project-local dotfile, also the default write target.
    pub const LOCAL_FILE_NAME: &str = ".gitr_config";

    /// Directory under `~/.config` holding the XDG-style config file.
    pub const XDG_DIR_NAME: &str = "gitr";

    /// File name inside [`XDG_DIR_NAME`].
    pub const XDG_FILE_NAME: &str = "config";

    /// Prefix for `GITR__<SECTION>__<FIELD>` environment overrides.
    pub const ENV_PREFIX: &str = "GITR";

    /// Fallback variable consulted when the configured API key is empty.
    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
}

/// LLM defaults
pub mod llm {
    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    pub const DEFAULT_MAX_TOKENS: u32 = 500;

    pub const DEFAULT_TEMPERATURE: f32 = 0.3;

    /// Request timeout in seconds, used when the configured value is 0.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Azure `api-version` used when none is configured.
    pub const DEFAULT_AZURE_API_VERSION: &str = "2023-05-15";
}

/// Commit template defaults
pub mod commit {
    pub const DEFAULT_STYLE: &str = "conventional";

    pub const DEFAULT_MAX_LENGTH: u32 = 72;
}

/// UI constants
pub mod ui {
    /// Width of the `=` rule framing a commit message.
    pub const RULE_WIDTH: usize = 50;

    /// Error preview max length
    pub const ERROR_PREVIEW_LENGTH: usize = 500;
}
