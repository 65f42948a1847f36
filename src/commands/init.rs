//! Guided first-run setup.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::config::fields::{self, FieldId};
use crate::error::Result;
use crate::llm::provider::utils::mask_api_key;
use crate::ui::{self, Theme};

/// Prompts for every setting a first run needs and saves the result.
///
/// The API key is asked for until a non-blank value is entered (an existing
/// key can be kept with Enter). Endpoint and model keep their current value
/// on blank input. The optional values follow; blank or unparseable input
/// keeps the current value.
///
/// # Errors
/// - [`GitrError::Io`](crate::error::GitrError::Io) - the file cannot be written
/// - [`GitrError::InputClosed`](crate::error::GitrError::InputClosed) - input ended
pub fn run_first_time_setup<R: BufRead, W: Write>(
    mut settings: Settings,
    path: &Path,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<Settings> {
    writeln!(out, "{}", theme.header("Welcome to GitR!"))?;
    writeln!(out, "==================")?;
    writeln!(
        out,
        "Let's set up your configuration for AI-powered commit messages."
    )?;
    writeln!(out)?;

    writeln!(out, "{}", theme.header("Required Configuration:"))?;
    writeln!(out, "-------------------------")?;

    prompt_api_key(&mut settings, input, out, theme)?;
    prompt_required(
        &mut settings,
        FieldId::BaseUrl,
        "Enter API Base URL",
        input,
        out,
        theme,
    )?;
    prompt_required(
        &mut settings,
        FieldId::Model,
        "Enter Model name",
        input,
        out,
        theme,
    )?;

    writeln!(out)?;
    writeln!(out, "{}", theme.header("Optional Configuration:"))?;
    writeln!(out, "-------------------------")?;

    let optional = [
        (FieldId::MaxTokens, "Enter Max Tokens"),
        (FieldId::Temperature, "Enter Temperature"),
        (FieldId::Style, "Enter Commit Style"),
        (FieldId::MaxLength, "Enter Max Commit Length"),
        (FieldId::IncludeScope, "Include scope in commits?"),
        (
            FieldId::CommitWithoutConfirmation,
            "Commit without confirmation?",
        ),
    ];
    for (id, label) in optional {
        prompt_optional(&mut settings, id, label, input, out, theme)?;
    }

    writeln!(out)?;
    writeln!(out, "Saving configuration...")?;
    settings.save(path)?;

    writeln!(
        out,
        "{}",
        theme.success(&format!("Configuration saved to: {}", path.display()))
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "Setup complete! You can now use GitR to generate commit messages."
    )?;
    writeln!(out, "  Run 'gitr config' anytime to modify your settings.")?;
    writeln!(out)?;

    Ok(settings)
}

/// Effective settings for a generation flow, running setup when needed.
///
/// - no file at `path`: first-run setup from defaults
/// - file present but incomplete (after environment overrides): setup
///   seeded with the stored values
///
/// # Errors
/// - [`GitrError::ConfigParse`](crate::error::GitrError::ConfigParse) - malformed file
/// - [`GitrError::ConfigValidation`](crate::error::GitrError::ConfigValidation) - still incomplete after setup
pub fn load_or_setup<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<Settings> {
    let stored = if !path.exists() {
        tracing::debug!("No configuration at {}", path.display());
        writeln!(out, "{}", theme.info("First time setup detected!"))?;
        writeln!(out)?;
        run_first_time_setup(Settings::default(), path, input, out, theme)?
    } else {
        let stored = Settings::load(path)?;
        if stored.with_env_overrides()?.is_incomplete() {
            writeln!(
                out,
                "{}",
                theme.warning("Configuration incomplete. Running setup...")
            )?;
            writeln!(out)?;
            run_first_time_setup(stored, path, input, out, theme)?
        } else {
            stored
        }
    };

    let effective = stored.with_env_overrides()?;
    effective.validate()?;
    Ok(effective)
}

fn prompt_api_key<R: BufRead, W: Write>(
    settings: &mut Settings,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    let current = settings.openai.api_key.trim().to_string();
    let prompt = if current.is_empty() {
        "Enter your OpenAI API Key: ".to_string()
    } else {
        format!(
            "Enter your OpenAI API Key (current: {}, Enter to keep): ",
            mask_api_key(&current)
        )
    };

    loop {
        let key = ui::prompt_trimmed(input, out, &theme.accent(&prompt))?;
        if !key.is_empty() {
            settings.openai.api_key = key;
            return Ok(());
        }
        if !current.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", theme.error("API Key is required!"))?;
    }
}

/// Blank input keeps the current value unless it is empty too.
fn prompt_required<R: BufRead, W: Write>(
    settings: &mut Settings,
    id: FieldId,
    label: &str,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    let field = fields::get(id);
    loop {
        let current = field.value(settings);
        let prompt = if current.trim().is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} (default: {}): ", label, current)
        };
        let value = ui::prompt_trimmed(input, out, &theme.accent(&prompt))?;

        if value.is_empty() {
            if !current.trim().is_empty() {
                return Ok(());
            }
            writeln!(out, "{}", theme.error(&format!("{} is required!", field.name)))?;
            continue;
        }

        match field.apply(settings, &value) {
            Ok(()) => return Ok(()),
            Err(e) => writeln!(out, "{}", theme.error(&e.to_string()))?,
        }
    }
}

fn prompt_optional<R: BufRead, W: Write>(
    settings: &mut Settings,
    id: FieldId,
    label: &str,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    let field = fields::get(id);
    let suffix = if field.is_bool() { " [true/false]" } else { "" };
    let prompt = format!(
        "{} (default: {}){}: ",
        label,
        field.value(settings),
        suffix
    );

    let value = ui::prompt_trimmed(input, out, &theme.accent(&prompt))?;
    if value.is_empty() {
        return Ok(());
    }

    if let Err(e) = field.apply(settings, &value) {
        writeln!(
            out,
            "{}",
            theme.warning(&format!("{}; keeping {}", e, field.value(settings)))
        )?;
    }
    Ok(())
}
