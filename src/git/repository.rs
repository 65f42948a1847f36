use std::path::PathBuf;
use std::process::{Command, Output};

use crate::error::{GitrError, Result};
use crate::git::GitOperations;

/// Git CLI backed repository handle.
///
/// Every command runs in `workdir`. The git CLI is used instead of a library
/// binding so hooks, GPG signing and the user's git config all apply.
#[derive(Debug, Clone)]
pub struct GitRepository {
    workdir: PathBuf,
}

impl GitRepository {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Repository handle for the process working directory.
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn git(&self) -> Result<Command> {
        let git = which::which("git")
            .map_err(|e| GitrError::GitCommand(format!("git executable not found: {}", e)))?;
        let mut command = Command::new(git);
        command.current_dir(&self.workdir);
        Ok(command)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        tracing::debug!("git {}", args.join(" "));
        let output = self
            .git()?
            .args(args)
            .output()
            .map_err(|e| GitrError::GitCommand(format!("failed to run git: {}", e)))?;
        Ok(output)
    }
}

/// stdout and stderr of a finished git process, trimmed and joined.
fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    [stdout.trim(), stderr.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl GitOperations for GitRepository {
    fn is_repository(&self) -> bool {
        match self.run(&["rev-parse", "--git-dir"]) {
            Ok(output) => output.status.success(),
            Err(e) => {
                tracing::debug!("repository probe failed: {}", e);
                false
            }
        }
    }

    fn staged_diff(&self) -> Result<String> {
        let output = self.run(&["diff", "--cached"])?;
        if !output.status.success() {
            return Err(GitrError::GitCommand(combined_output(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let output = self.run(&["commit", "-m", message])?;
        if !output.status.success() {
            let details = combined_output(&output);
            tracing::debug!("git commit exited with {}: {}", output.status, details);
            return Err(GitrError::Commit(details));
        }
        Ok(())
    }
}
