//! Commit confirmation state machine
//!
//! Pure transitions for the accept/edit/reject menu shown before committing.
//!
//! # State transition diagram
//! ```text
//!                 ┌──── edit line ────┐
//!                 v                   │
//! Presenting ──── e ────> Editing ────┘
//!     │
//!     ├──── a / Enter ──> Accepted
//!     └──── r ──────────> Rejected
//! ```
//!
//! # Design
//! - State transitions are pure functions (no side effects)
//! - Terminal IO is handled by [`confirm_message`](super::commit::confirm_message)
//!
//! # Usage example
//! ```
//! use gitr::commands::commit_state_machine::{ConfirmOutcome, ConfirmState, MenuChoice};
//!
//! let state = ConfirmState::new("feat: add login".to_string())
//!     .handle_choice(MenuChoice::Edit)
//!     .handle_edit("feat(auth): add login")
//!     .handle_choice(MenuChoice::Accept);
//!
//! assert_eq!(
//!     state.outcome(),
//!     Some(ConfirmOutcome::EditedAndAccepted("feat(auth): add login".to_string()))
//! );
//! ```

use std::str::FromStr;

use crate::error::GitrError;

/// Confirmation menu state.
///
/// `edited` records whether the message differs from the generated one.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmState {
    /// Message shown, waiting for a menu choice.
    Presenting { message: String, edited: bool },
    /// Waiting for a replacement line.
    Editing { message: String, edited: bool },
    /// Terminal: commit with `message`.
    Accepted { message: String, edited: bool },
    /// Terminal: do not commit.
    Rejected,
}

/// Decoded menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Accept,
    Edit,
    Reject,
}

impl FromStr for MenuChoice {
    type Err = GitrError;

    /// Case-insensitive; blank input means [`MenuChoice::Accept`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "a" | "accept" => Ok(MenuChoice::Accept),
            "e" | "edit" => Ok(MenuChoice::Edit),
            "r" | "reject" => Ok(MenuChoice::Reject),
            other => Err(GitrError::InvalidInput(format!(
                "unknown menu choice '{}'",
                other
            ))),
        }
    }
}

/// Result of the confirmation loop, for one invocation only.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    Accepted(String),
    EditedAndAccepted(String),
    Rejected,
}

impl ConfirmOutcome {
    /// `(message, should_commit)`; a rejection yields `("", false)`.
    pub fn into_decision(self) -> (String, bool) {
        match self {
            ConfirmOutcome::Accepted(message) | ConfirmOutcome::EditedAndAccepted(message) => {
                (message, true)
            }
            ConfirmOutcome::Rejected => (String::new(), false),
        }
    }
}

impl ConfirmState {
    pub fn new(message: String) -> Self {
        ConfirmState::Presenting {
            message,
            edited: false,
        }
    }

    /// Handle a menu choice (pure function)
    ///
    /// # State transition
    /// - `Accept` → `Accepted`
    /// - `Edit` → `Editing`
    /// - `Reject` → `Rejected`
    ///
    /// Called in any state other than `Presenting`, logs an error and
    /// returns `Rejected`.
    pub fn handle_choice(self, choice: MenuChoice) -> Self {
        match self {
            ConfirmState::Presenting { message, edited } => match choice {
                MenuChoice::Accept => ConfirmState::Accepted { message, edited },
                MenuChoice::Edit => ConfirmState::Editing { message, edited },
                MenuChoice::Reject => ConfirmState::Rejected,
            },
            _ => {
                tracing::error!("handle_choice called in wrong state: {:?}", self);
                ConfirmState::Rejected
            }
        }
    }

    /// Handle the replacement line (pure function)
    ///
    /// Blank input keeps the current message. Either way the menu is shown
    /// again.
    pub fn handle_edit(self, input: &str) -> Self {
        match self {
            ConfirmState::Editing { message, edited } => {
                let replacement = input.trim();
                if replacement.is_empty() || replacement == message {
                    ConfirmState::Presenting { message, edited }
                } else {
                    ConfirmState::Presenting {
                        message: replacement.to_string(),
                        edited: true,
                    }
                }
            }
            _ => {
                tracing::error!("handle_edit called in wrong state: {:?}", self);
                ConfirmState::Rejected
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ConfirmState::Accepted { .. } | ConfirmState::Rejected)
    }

    /// Final outcome, `None` while the loop is still running.
    pub fn outcome(self) -> Option<ConfirmOutcome> {
        match self {
            ConfirmState::Accepted {
                message,
                edited: false,
            } => Some(ConfirmOutcome::Accepted(message)),
            ConfirmState::Accepted {
                message,
                edited: true,
            } => Some(ConfirmOutcome::EditedAndAccepted(message)),
            ConfirmState::Rejected => Some(ConfirmOutcome::Rejected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn presenting(message: &str) -> ConfirmState {
        ConfirmState::new(message.to_string())
    }

    // === MenuChoice decoding ===

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("a".parse::<MenuChoice>().unwrap(), MenuChoice::Accept);
        assert_eq!(" Accept ".parse::<MenuChoice>().unwrap(), MenuChoice::Accept);
        assert_eq!("E".parse::<MenuChoice>().unwrap(), MenuChoice::Edit);
        assert_eq!("edit".parse::<MenuChoice>().unwrap(), MenuChoice::Edit);
        assert_eq!("r".parse::<MenuChoice>().unwrap(), MenuChoice::Reject);
        assert_eq!("REJECT".parse::<MenuChoice>().unwrap(), MenuChoice::Reject);
    }

    #[test]
    fn test_blank_menu_input_accepts() {
        assert_eq!("".parse::<MenuChoice>().unwrap(), MenuChoice::Accept);
        assert_eq!("   ".parse::<MenuChoice>().unwrap(), MenuChoice::Accept);
    }

    #[test]
    fn test_unknown_menu_input_rejected() {
        for input in ["x", "yes", "ae", "q"] {
            assert!(matches!(
                input.parse::<MenuChoice>(),
                Err(GitrError::InvalidInput(_))
            ));
        }
    }

    // === Presenting transitions ===

    #[test]
    fn test_accept_unchanged_message() {
        let state = presenting("feat: add parser").handle_choice(MenuChoice::Accept);
        assert!(state.is_terminal());
        assert_eq!(
            state.outcome(),
            Some(ConfirmOutcome::Accepted("feat: add parser".to_string()))
        );
    }

    #[test]
    fn test_reject() {
        let state = presenting("feat: add parser").handle_choice(MenuChoice::Reject);
        let outcome = state.outcome().unwrap();
        assert_eq!(outcome, ConfirmOutcome::Rejected);
        assert_eq!(outcome.into_decision(), (String::new(), false));
    }

    #[test]
    fn test_edit_enters_editing() {
        let state = presenting("msg").handle_choice(MenuChoice::Edit);
        assert_eq!(
            state,
            ConfirmState::Editing {
                message: "msg".to_string(),
                edited: false
            }
        );
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
    }

    // === Editing transitions ===

    #[test]
    fn test_edit_then_accept() {
        let state = presenting("original")
            .handle_choice(MenuChoice::Edit)
            .handle_edit("new message")
            .handle_choice(MenuChoice::Accept);

        let outcome = state.outcome().unwrap();
        assert_eq!(
            outcome,
            ConfirmOutcome::EditedAndAccepted("new message".to_string())
        );
        assert_eq!(outcome.into_decision(), ("new message".to_string(), true));
    }

    #[test]
    fn test_blank_edit_keeps_message() {
        let state = presenting("original")
            .handle_choice(MenuChoice::Edit)
            .handle_edit("   ");

        assert_eq!(
            state,
            ConfirmState::Presenting {
                message: "original".to_string(),
                edited: false
            }
        );
    }

    #[test]
    fn test_edit_is_trimmed() {
        let state = presenting("original")
            .handle_choice(MenuChoice::Edit)
            .handle_edit("  fix: typo \n");

        assert_eq!(
            state,
            ConfirmState::Presenting {
                message: "fix: typo".to_string(),
                edited: true
            }
        );
    }

    #[test]
    fn test_second_blank_edit_keeps_edited_flag() {
        let state = presenting("original")
            .handle_choice(MenuChoice::Edit)
            .handle_edit("changed")
            .handle_choice(MenuChoice::Edit)
            .handle_edit("");

        assert_eq!(
            state,
            ConfirmState::Presenting {
                message: "changed".to_string(),
                edited: true
            }
        );
    }

    // === Wrong-state handling ===

    #[test]
    fn test_choice_in_editing_state_rejects() {
        let state = presenting("msg")
            .handle_choice(MenuChoice::Edit)
            .handle_choice(MenuChoice::Accept);
        assert_eq!(state, ConfirmState::Rejected);
    }

    #[test]
    fn test_edit_in_presenting_state_rejects() {
        assert_eq!(presenting("msg").handle_edit("other"), ConfirmState::Rejected);
    }
}
