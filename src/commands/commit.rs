use std::io::{self, BufRead, Write};

use crate::commands::commit_state_machine::{ConfirmOutcome, ConfirmState, MenuChoice};
use crate::commands::init;
use crate::config::{Settings, find_config_path};
use crate::error::{GitrError, Result};
use crate::git::{GitOperations, repository::GitRepository};
use crate::llm::provider::create_provider;
use crate::llm::{LLMProvider, response::parse_commit_message};
use crate::ui::{self, Theme};

/// Options of the commit flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions {
    /// Skip the confirmation menu (`-b`).
    pub bypass: bool,
}

const MENU_PROMPT: &str = "Choose an option [a/e/r] (or press Enter to accept): ";
const INVALID_CHOICE: &str = "Invalid option. Please choose 'a', 'e', or 'r'.";

/// Run the commit flow (`gitr -c`)
///
/// Checks run before settings are touched, so an empty index never triggers
/// setup prompts.
pub async fn run(options: &CommitOptions, theme: &Theme) -> Result<()> {
    let repo = GitRepository::current()?;
    if !repo.is_repository() {
        return Err(GitrError::NotARepository);
    }
    if !repo.has_staged_changes()? {
        return Err(GitrError::NoStagedChanges);
    }

    let path = find_config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let settings = init::load_or_setup(&path, &mut input, &mut out, theme)?;
    let provider = create_provider(&settings)?;

    generate_and_commit(
        &repo,
        provider.as_ref(),
        &settings,
        options,
        &mut input,
        &mut out,
        theme,
    )
    .await
}

/// Generate, confirm and commit (testable version, takes trait objects)
///
/// `settings` must be the effective, validated settings.
pub async fn generate_and_commit<R: BufRead, W: Write>(
    repo: &dyn GitOperations,
    provider: &dyn LLMProvider,
    settings: &Settings,
    options: &CommitOptions,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    let diff = repo.staged_diff()?;
    if diff.trim().is_empty() {
        return Err(GitrError::NoStagedChanges);
    }

    let raw = {
        let spinner = ui::Spinner::new("Generating commit message...", theme.colored);
        let result = provider
            .generate_commit_message(&diff, &settings.commit_template)
            .await;
        spinner.finish_and_clear();
        result?
    };

    let message = parse_commit_message(&raw);
    if message.is_empty() {
        return Err(GitrError::EmptyGeneration);
    }

    let bypass = options.bypass || settings.commit_template.commit_without_confirmation;
    let (final_message, should_commit) = if bypass {
        tracing::debug!(
            "Confirmation bypassed (flag: {}, config: {})",
            options.bypass,
            settings.commit_template.commit_without_confirmation
        );
        writeln!(
            out,
            "{}",
            theme.info("Bypassing confirmation (using generated message)...")
        )?;
        (message, true)
    } else {
        confirm_message(&message, input, out, theme)?.into_decision()
    };

    if !should_commit {
        writeln!(out, "{}", theme.warning("Commit cancelled"))?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "{}", theme.info("Committing changes..."))?;
    repo.commit(&final_message)?;

    writeln!(out, "{}", theme.success("Commit successful!"))?;
    writeln!(out, "Committed with message: {}", final_message)?;
    Ok(())
}

/// Interactive accept/edit/reject loop over line input.
///
/// Blank menu input accepts. Invalid input is reported and the menu shown
/// again.
///
/// # Errors
/// - [`GitrError::InputClosed`] - input ended while waiting
pub fn confirm_message<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<ConfirmOutcome> {
    write!(
        out,
        "{}",
        ui::frame_message("Generated Commit Message:", message, theme)
    )?;
    writeln!(out)?;

    let mut state = ConfirmState::new(message.to_string());

    loop {
        state = match state {
            ConfirmState::Presenting { .. } => {
                print_menu(out, theme)?;
                let line = ui::prompt_line(input, out, &theme.accent(MENU_PROMPT))?;
                match line.parse::<MenuChoice>() {
                    Ok(choice) => state.handle_choice(choice),
                    Err(e) => {
                        tracing::debug!("{}", e);
                        writeln!(out, "{}", theme.error(INVALID_CHOICE))?;
                        writeln!(out)?;
                        state
                    }
                }
            }
            ConfirmState::Editing { ref message, .. } => {
                let current = message.clone();
                writeln!(out)?;
                writeln!(out, "{}", theme.header("Edit Commit Message:"))?;
                writeln!(out)?;
                writeln!(out, "Current message: {}", current)?;
                writeln!(out)?;
                let line = ui::prompt_line(input, out, &theme.accent("Edit message: "))?;

                let next = state.handle_edit(&line);
                if let ConfirmState::Presenting { message, .. } = &next
                    && *message != current
                {
                    writeln!(out)?;
                    write!(
                        out,
                        "{}",
                        ui::frame_message("Updated Commit Message:", message, theme)
                    )?;
                    writeln!(out)?;
                }
                next
            }
            ConfirmState::Accepted { .. } | ConfirmState::Rejected => {
                return Ok(state.outcome().unwrap_or(ConfirmOutcome::Rejected));
            }
        };
    }
}

fn print_menu<W: Write>(out: &mut W, theme: &Theme) -> Result<()> {
    writeln!(out, "{}", theme.header("Options:"))?;
    writeln!(out, " {} Accept and commit (default)", theme.accent("[a]"))?;
    writeln!(out, " {} Edit message", theme.accent("[e]"))?;
    writeln!(out, " {} Reject (don't commit)", theme.accent("[r]"))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run_loop(message: &str, script: &[&str]) -> (Result<ConfirmOutcome>, String) {
        let mut input = Cursor::new(script.iter().map(|l| format!("{}\n", l)).collect::<String>());
        let mut out = Vec::new();
        let result = confirm_message(message, &mut input, &mut out, &Theme::plain());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_edit_then_accept() {
        let (result, output) = run_loop("feat: original", &["e", "new message", "a"]);
        let outcome = result.unwrap();
        assert_eq!(
            outcome,
            ConfirmOutcome::EditedAndAccepted("new message".to_string())
        );
        assert_eq!(outcome.into_decision(), ("new message".to_string(), true));
        assert!(output.contains("Current message: feat: original"));
        assert!(output.contains("Updated Commit Message:"));
    }

    #[test]
    fn test_reject() {
        let (result, _) = run_loop("feat: original", &["r"]);
        let outcome = result.unwrap();
        assert_eq!(outcome, ConfirmOutcome::Rejected);
        assert_eq!(outcome.into_decision(), (String::new(), false));
    }

    #[test]
    fn test_invalid_choice_then_accept() {
        let (result, output) = run_loop("feat: original", &["x", "a"]);
        assert_eq!(
            result.unwrap(),
            ConfirmOutcome::Accepted("feat: original".to_string())
        );
        assert_eq!(output.matches(INVALID_CHOICE).count(), 1);
        assert_eq!(output.matches(MENU_PROMPT).count(), 2);
    }

    #[test]
    fn test_blank_choice_accepts() {
        let (result, _) = run_loop("feat: original", &[""]);
        assert_eq!(
            result.unwrap(),
            ConfirmOutcome::Accepted("feat: original".to_string())
        );
    }

    #[test]
    fn test_blank_edit_keeps_message() {
        let (result, output) = run_loop("feat: original", &["e", "", "a"]);
        assert_eq!(
            result.unwrap(),
            ConfirmOutcome::Accepted("feat: original".to_string())
        );
        assert!(!output.contains("Updated Commit Message:"));
    }

    #[test]
    fn test_shows_generated_message_first() {
        let (_, output) = run_loop("feat: original", &["a"]);
        let rule = "=".repeat(50);
        assert!(output.starts_with(&format!(
            "Generated Commit Message:\n{}\nfeat: original\n{}\n",
            rule, rule
        )));
    }

    #[test]
    fn test_input_closed_at_menu() {
        let (result, _) = run_loop("feat: original", &[]);
        assert!(matches!(result, Err(GitrError::InputClosed)));
    }

    #[test]
    fn test_input_closed_while_editing() {
        let (result, _) = run_loop("feat: original", &["e"]);
        assert!(matches!(result, Err(GitrError::InputClosed)));
    }
}
