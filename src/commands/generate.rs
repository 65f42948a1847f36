use std::io::{self, Write};

use crate::commands::init;
use crate::config::{Settings, find_config_path};
use crate::error::{GitrError, Result};
use crate::git::{GitOperations, repository::GitRepository};
use crate::llm::provider::create_provider;
use crate::llm::{LLMProvider, response::parse_commit_message};
use crate::ui::{self, Theme};

/// Run the default flow: generate and print a message, never commit.
pub async fn run(theme: &Theme) -> Result<()> {
    let repo = GitRepository::current()?;
    if !repo.is_repository() {
        return Err(GitrError::NotARepository);
    }

    let path = find_config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let settings = init::load_or_setup(&path, &mut input, &mut out, theme)?;
    let provider = create_provider(&settings)?;

    generate_with_deps(&repo, provider.as_ref(), &settings, &mut out, theme).await
}

/// Generate and display (testable version, takes trait objects)
///
/// Nothing staged is not an error here: a notice is printed and the flow
/// ends successfully.
pub async fn generate_with_deps<W: Write>(
    repo: &dyn GitOperations,
    provider: &dyn LLMProvider,
    settings: &Settings,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    let diff = repo.staged_diff()?;
    if diff.trim().is_empty() {
        writeln!(out, "{}", theme.info("No staged changes found"))?;
        return Ok(());
    }

    tracing::debug!("Staged diff: {} bytes", diff.len());

    let raw = {
        let spinner = ui::Spinner::new("Generating commit message...", theme.colored);
        let result = provider
            .generate_commit_message(&diff, &settings.commit_template)
            .await;
        spinner.finish_and_clear();
        result?
    };

    let message = parse_commit_message(&raw);
    write!(out, "{}", ui::format_for_display(&message, theme))?;
    Ok(())
}
