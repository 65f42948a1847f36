use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitrError>;

#[derive(Error, Debug)]
pub enum GitrError {
    #[error("Not in a git repository")]
    NotARepository,

    #[error("No staged changes found")]
    NoStagedChanges,

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("Configuration is missing required field '{field}'")]
    ConfigValidation { field: &'static str },

    #[error("Configuration layering error: {0}")]
    ConfigLayer(#[from] config::ConfigError),

    #[error("Git command failed: {0}")]
    GitCommand(String),

    #[error("git commit failed: {0}")]
    Commit(String),

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("LLM API error ({status}): {message}")]
    LlmApi { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to generate commit message")]
    EmptyGeneration,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Standard input closed while waiting for a response")]
    InputClosed,
}

impl GitrError {
    /// Hint printed under the error message, if one applies.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            GitrError::NotARepository => Some("Run gitr from inside a git working tree"),
            GitrError::NoStagedChanges => Some("Please stage some changes first with 'git add'"),
            GitrError::ConfigParse(_) | GitrError::ConfigValidation { .. } => {
                Some("Run 'gitr config' to fix your configuration.")
            }
            GitrError::Network(_) => {
                Some("Check your network connection, proxy settings, or API base URL")
            }
            GitrError::LlmApi { status: 401, .. } => {
                Some("Check if your API key is valid and has not expired")
            }
            GitrError::LlmApi { status: 404, .. } => {
                Some("Check the base URL and model name in your configuration")
            }
            GitrError::LlmApi { status: 429, .. } => {
                Some("Rate limit exceeded. Wait a moment and try again, or upgrade your API plan")
            }
            GitrError::LlmApi { status, .. } if *status >= 500 => {
                Some("API service is temporarily unavailable. Try again in a few moments")
            }
            GitrError::Llm(msg) if msg.contains("timed out") => {
                Some("The API request timed out. Raise 'timeout' with 'gitr config' or try again")
            }
            GitrError::Llm(msg) if msg.contains("connection failed") => {
                Some("Cannot connect to API server. Check base URL, network, or DNS settings")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_no_staged_changes() {
        let err = GitrError::NoStagedChanges;
        assert_eq!(
            err.suggestion(),
            Some("Please stage some changes first with 'git add'")
        );
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = GitrError::ConfigValidation { field: "api_key" };
        assert!(err.to_string().contains("'api_key'"));
        assert!(err.suggestion().unwrap().contains("gitr config"));
    }

    #[test]
    fn test_suggestion_llm_api_statuses() {
        let unauthorized = GitrError::LlmApi {
            status: 401,
            message: "bad key".to_string(),
        };
        assert!(unauthorized.suggestion().unwrap().contains("API key"));

        let limited = GitrError::LlmApi {
            status: 429,
            message: String::new(),
        };
        assert!(limited.suggestion().unwrap().contains("Rate limit"));

        let unavailable = GitrError::LlmApi {
            status: 503,
            message: String::new(),
        };
        assert!(
            unavailable
                .suggestion()
                .unwrap()
                .contains("temporarily unavailable")
        );
    }

    #[test]
    fn test_suggestion_llm_timeout() {
        let err = GitrError::Llm("OpenAI request timed out after 30s".to_string());
        assert!(err.suggestion().unwrap().contains("timeout"));
    }

    #[test]
    fn test_commit_error_carries_tool_output() {
        let err = GitrError::Commit("nothing to commit, working tree clean".to_string());
        assert_eq!(
            err.to_string(),
            "git commit failed: nothing to commit, working tree clean"
        );
    }

    #[test]
    fn test_suggestion_returns_none_for_other_errors() {
        let cases = vec![
            GitrError::EmptyGeneration,
            GitrError::InputClosed,
            GitrError::InvalidInput("bad input".to_string()),
            GitrError::GitCommand("git failed".to_string()),
            GitrError::Llm("some random llm error".to_string()),
            GitrError::LlmApi {
                status: 400,
                message: "bad request".to_string(),
            },
        ];

        for err in cases {
            assert!(
                err.suggestion().is_none(),
                "Expected None for {:?}, got {:?}",
                err,
                err.suggestion()
            );
        }
    }
}
