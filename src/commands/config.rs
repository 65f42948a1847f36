//! `gitr config`: numbered field editor for the configuration file.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::commands::init;
use crate::config::fields::{self, CLEAR_KEYWORD, FieldDescriptor};
use crate::config::{Settings, find_config_path};
use crate::error::Result;
use crate::ui::{self, Theme};

/// One line of editor menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Zero-based index into [`fields::all`].
    Edit(usize),
    Save,
    Quit,
}

impl EditorCommand {
    /// Decodes a menu line; fields are numbered from 1.
    pub fn parse(input: &str, field_count: usize) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "s" | "save" => Some(EditorCommand::Save),
            "q" | "quit" => Some(EditorCommand::Quit),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=field_count).contains(&n) => Some(EditorCommand::Edit(n - 1)),
                _ => None,
            },
        }
    }
}

/// How the editor session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Saved,
    Discarded,
}

pub async fn run(theme: &Theme) -> Result<()> {
    let path = find_config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    if !path.exists() {
        writeln!(
            out,
            "{}",
            theme.info("No configuration found. Starting first-time setup...")
        )?;
        writeln!(out)?;
        init::run_first_time_setup(Settings::default(), &path, &mut input, &mut out, theme)?;
        return Ok(());
    }

    let settings = Settings::load(&path)?;
    run_editor(settings, &path, &mut input, &mut out, theme)?;
    Ok(())
}

/// Menu loop over every field of `settings`.
///
/// Changes live in memory until `s` writes them to `path`; `q` drops them.
/// A failed save is reported and the menu shown again.
///
/// # Errors
/// - [`GitrError::InputClosed`](crate::error::GitrError::InputClosed) - input ended
pub fn run_editor<R: BufRead, W: Write>(
    mut settings: Settings,
    path: &Path,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<EditorOutcome> {
    let fields = fields::all();

    loop {
        print_menu(&settings, &fields, path, out, theme)?;

        let line = ui::prompt_line(input, out, &theme.accent("Enter choice: "))?;
        match EditorCommand::parse(&line, fields.len()) {
            Some(EditorCommand::Edit(index)) => {
                edit_field(&mut settings, &fields[index], input, out, theme)?;
            }
            Some(EditorCommand::Save) => match settings.save(path) {
                Ok(()) => {
                    writeln!(out, "{}", theme.success("Configuration saved successfully!"))?;
                    return Ok(EditorOutcome::Saved);
                }
                Err(e) => {
                    tracing::debug!("Saving {} failed: {:?}", path.display(), e);
                    writeln!(
                        out,
                        "{}",
                        theme.error(&format!("Error saving config: {}", e))
                    )?;
                }
            },
            Some(EditorCommand::Quit) => {
                writeln!(out, "Exiting without saving...")?;
                return Ok(EditorOutcome::Discarded);
            }
            None => {
                writeln!(out, "{}", theme.error("Invalid choice. Please try again."))?;
            }
        }
    }
}

fn print_menu<W: Write>(
    settings: &Settings,
    fields: &[FieldDescriptor],
    path: &Path,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.header("=== GitR Configuration Editor ==="))?;
    writeln!(out, "Configuration file: {}", path.display())?;

    let mut category = "";
    for (i, field) in fields.iter().enumerate() {
        if field.category != category {
            category = field.category;
            writeln!(out)?;
            writeln!(out, "{}", theme.header(&format!("{}:", category)))?;
        }
        writeln!(
            out,
            "{:>3}. {}: {}",
            i + 1,
            field.name,
            field.display_value(settings)
        )?;
        writeln!(out, "     {}", theme.muted(field.description))?;
    }

    writeln!(out)?;
    writeln!(out, "  s. Save and exit")?;
    writeln!(out, "  q. Quit without saving")?;
    writeln!(out)?;
    Ok(())
}

fn edit_field<R: BufRead, W: Write>(
    settings: &mut Settings,
    field: &FieldDescriptor,
    input: &mut R,
    out: &mut W,
    theme: &Theme,
) -> Result<()> {
    let mut prompt = format!(
        "Enter new value for {} (current: {})",
        field.name,
        field.display_value(settings)
    );
    if field.is_bool() {
        prompt.push_str(" [true/false]");
    }
    if field.is_clearable() {
        prompt.push_str(&format!(" (enter '{}' to clear)", CLEAR_KEYWORD));
    }
    prompt.push_str(": ");

    let value = ui::prompt_trimmed(input, out, &theme.accent(&prompt))?;
    if value.is_empty() {
        writeln!(out, "{}", theme.muted(&format!("{} unchanged", field.name)))?;
        return Ok(());
    }

    match field.apply(settings, &value) {
        Ok(()) => writeln!(
            out,
            "{}",
            theme.success(&format!(
                "{} updated to: {}",
                field.name,
                field.display_value(settings)
            ))
        )?,
        Err(e) => writeln!(out, "{}", theme.error(&e.to_string()))?,
    }
    Ok(())
}
