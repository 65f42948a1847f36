pub mod repository;

use crate::error::Result;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Git operations needed by the generation and commit flows.
///
/// Implemented by [`GitRepository`](repository::GitRepository), which shells
/// out to the `git` executable. Tests use the generated `MockGitOperations`.
///
/// # Example
/// ```no_run
/// use gitr::git::{GitOperations, repository::GitRepository};
///
/// # fn main() -> gitr::error::Result<()> {
/// let repo = GitRepository::current()?;
/// if repo.is_repository() && repo.has_staged_changes()? {
///     println!("{}", repo.staged_diff()?);
/// }
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait GitOperations {
    /// Whether the working directory is inside a git repository.
    ///
    /// Equivalent to `git rev-parse --git-dir` succeeding. Any failure,
    /// including a missing `git` binary, yields `false`.
    fn is_repository(&self) -> bool;

    /// Staged changes, as printed by `git diff --cached`.
    ///
    /// An empty string means nothing is staged.
    ///
    /// # Errors
    /// - [`GitrError::GitCommand`](crate::error::GitrError::GitCommand) - git failed or is missing
    fn staged_diff(&self) -> Result<String>;

    /// Records the staged changes with `message`.
    ///
    /// The message is passed as a single argument, so quotes, newlines and
    /// leading dashes reach git untouched. Hooks and signing configured in git
    /// apply as usual.
    ///
    /// # Errors
    /// - [`GitrError::Commit`](crate::error::GitrError::Commit) - git exited non-zero; carries its output
    fn commit(&self, message: &str) -> Result<()>;

    /// `true` when [`staged_diff`](Self::staged_diff) is not blank.
    fn has_staged_changes(&self) -> Result<bool> {
        Ok(!self.staged_diff()?.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed diff text, exercising the provided `has_staged_changes`.
    struct FixedDiff(&'static str);

    impl GitOperations for FixedDiff {
        fn is_repository(&self) -> bool {
            true
        }

        fn staged_diff(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn commit(&self, _message: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_has_staged_changes_blank_diff() {
        assert!(!FixedDiff("").has_staged_changes().unwrap());
        assert!(!FixedDiff(" \n\t").has_staged_changes().unwrap());
    }

    #[test]
    fn test_has_staged_changes_with_diff() {
        let diff = FixedDiff("diff --git a/a.rs b/a.rs\n+fn a() {}\n");
        assert!(diff.has_staged_changes().unwrap());
    }
}
