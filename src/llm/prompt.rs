use crate::config::CommitTemplateConfig;

/// User message preamble; the staged diff follows after a blank line.
const COMMIT_USER_PREAMBLE: &str =
    "Please generate a commit message for the following staged changes:";

/// Builds the commit system prompt from the template preferences.
fn commit_system_prompt(template: &CommitTemplateConfig) -> String {
    format!(
        "You are an expert Git commit message generator. Generate clear, concise, and \
         conventional commit messages based on the staged changes. Follow the {style} style \
         and keep the message under {max_length} characters. {scope}\n\
         Be less specific about the changes and only include the most important changes or \
         the general change or broader concept that the user is trying to convey.",
        style = template.style,
        max_length = template.max_length,
        scope = template.scope_instruction(),
    )
}

/// Builds the `(system, user)` prompt pair for commit message generation.
///
/// The diff is passed through unchanged.
pub fn build_commit_prompt(diff: &str, template: &CommitTemplateConfig) -> (String, String) {
    let system = commit_system_prompt(template);
    let user = format!("{}\n\n{}", COMMIT_USER_PREAMBLE, diff);
    (system, user)
}
