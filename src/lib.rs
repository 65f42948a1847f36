//! # gitr
//!
//! Generates conventional commit messages for staged git changes with an
//! OpenAI-compatible (or Azure OpenAI) chat completion API.
//!
//! ## Quick start
//! ```bash
//! git add .
//! gitr            # print a suggested message
//! gitr -c         # confirm, edit or reject, then commit
//! gitr config     # edit settings
//! ```
//!
//! ## As a library
//! ```no_run
//! use gitr::config::Settings;
//! use gitr::git::GitOperations;
//! use gitr::git::repository::GitRepository;
//!
//! # async fn example() -> gitr::error::Result<()> {
//! let repo = GitRepository::current()?;
//! let diff = repo.staged_diff()?;
//!
//! let mut settings = Settings::default();
//! settings.openai.api_key = "sk-...".to_string();
//!
//! let raw = gitr::llm::generate(&settings, &diff).await?;
//! println!("{}", gitr::llm::response::parse_commit_message(&raw));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core modules
//! - [`git`] - Git command adapter
//! - [`llm`] - Prompt building, chat API client and response parsing
//! - [`commands`] - CLI command flows
//! - [`config`] - Settings file, discovery and field editing
//! - [`error`] - Unified error type
//! - [`ui`] - Terminal output helpers
//!
//! ## Configuration
//! JSON, read from the first existing file of `./.gitr_config`,
//! `~/.gitr_config` and `~/.config/gitr/config`:
//! ```json
//! {
//!   "openai": {
//!     "api_key": "sk-...",
//!     "base_url": "https://api.openai.com/v1",
//!     "model": "gpt-4o-mini"
//!   },
//!   "commit_template": {
//!     "style": "conventional",
//!     "max_length": 72
//!   }
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;
