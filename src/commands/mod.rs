//! Command implementations.
//!
//! # Modules
//! - `generate` - Generate and display a message (`gitr`).
//! - `commit` - Generate, confirm and commit (`gitr -c`).
//! - `commit_state_machine` - Confirmation menu state machine.
//! - `config` - Field editor (`gitr config`).
//! - `init` - First-run setup.
//!
//! # Architecture
//! ```text
//! CLI (cli.rs)
//!   ├── commands/generate.rs ─┐
//!   ├── commands/commit.rs ───┼─> commands/init.rs (load or set up settings)
//!   │     └── commit_state_machine.rs
//!   └── commands/config.rs ───┘
//! ```

/// Commit flow with confirmation.
pub mod commit;
/// Confirmation menu state machine.
pub mod commit_state_machine;
/// Interactive configuration editor.
pub mod config;
/// Display-only generation flow.
pub mod generate;
/// Guided first-run setup.
pub mod init;

pub use commit::CommitOptions;
