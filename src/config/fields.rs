//! Editable settings fields.
//!
//! Each [`FieldDescriptor`] pairs a display name with a getter and a setter
//! operating on an explicit `&mut Settings`. The editor and first-run setup
//! both go through these setters, so parsing rules live in one place.

use std::str::FromStr;

use thiserror::Error;

use super::structs::Settings;
use crate::llm::provider::utils::mask_api_key;

/// Keyword that clears an optional field.
pub const CLEAR_KEYWORD: &str = "none";

/// Rejected replacement value. Reported to the user; never fatal.
#[derive(Debug, Error, PartialEq)]
pub enum FieldParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid boolean: {0} (expected true/false)")]
    InvalidBool(String),

    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: f32,
        max: f32,
    },

    #[error("{0} cannot be cleared")]
    Required(&'static str),
}

/// Stable identifier of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ApiKey,
    BaseUrl,
    Model,
    ByAzure,
    ApiVersion,
    Timeout,
    MaxTokens,
    Temperature,
    TopP,
    PresencePenalty,
    FrequencyPenalty,
    Stop,
    Seed,
    User,
    Style,
    MaxLength,
    IncludeScope,
    CommitWithoutConfirmation,
}

type Getter = fn(&Settings) -> String;
type Setter = fn(&mut Settings, &str) -> Result<(), FieldParseError>;

/// One row of the editor menu.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    get: Getter,
    set: Setter,
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl FieldDescriptor {
    /// Current value rendered as text.
    pub fn value(&self, settings: &Settings) -> String {
        (self.get)(settings)
    }

    /// Current value for screen output; the API key is masked.
    pub fn display_value(&self, settings: &Settings) -> String {
        match self.id {
            FieldId::ApiKey if settings.openai.api_key.is_empty() => UNSET.to_string(),
            FieldId::ApiKey => mask_api_key(&settings.openai.api_key),
            _ => self.value(settings),
        }
    }

    /// Whether [`CLEAR_KEYWORD`] unsets this field.
    pub fn is_clearable(&self) -> bool {
        matches!(
            self.id,
            FieldId::ApiVersion
                | FieldId::MaxTokens
                | FieldId::Temperature
                | FieldId::TopP
                | FieldId::PresencePenalty
                | FieldId::FrequencyPenalty
                | FieldId::Stop
                | FieldId::Seed
                | FieldId::User
        )
    }

    pub fn is_bool(&self) -> bool {
        matches!(
            self.id,
            FieldId::ByAzure | FieldId::IncludeScope | FieldId::CommitWithoutConfirmation
        )
    }

    /// Parses `input` and stores it. `input` must already be trimmed and non-empty.
    pub fn apply(&self, settings: &mut Settings, input: &str) -> Result<(), FieldParseError> {
        (self.set)(settings, input)
    }
}

const UNSET: &str = "(unset)";

const CATEGORY_API: &str = "OpenAI";
const CATEGORY_GENERATION: &str = "Generation";
const CATEGORY_COMMIT: &str = "Commit Template";

/// Every editable field, in menu order.
pub fn all() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor {
            id: FieldId::ApiKey,
            name: "API Key",
            category: CATEGORY_API,
            description: "Your OpenAI API key",
            get: |s| s.openai.api_key.clone(),
            set: |s, v| {
                s.openai.api_key = required_text("API Key", v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::BaseUrl,
            name: "Base URL",
            category: CATEGORY_API,
            description: "OpenAI API base URL",
            get: |s| s.openai.base_url.clone(),
            set: |s, v| {
                s.openai.base_url = required_text("Base URL", v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::Model,
            name: "Model",
            category: CATEGORY_API,
            description: "Model to use for generating commit messages",
            get: |s| s.openai.model.clone(),
            set: |s, v| {
                s.openai.model = required_text("Model", v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::ByAzure,
            name: "Use Azure",
            category: CATEGORY_API,
            description: "Send requests to an Azure OpenAI deployment",
            get: |s| s.openai.by_azure.to_string(),
            set: |s, v| {
                s.openai.by_azure = parse_bool(v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::ApiVersion,
            name: "API Version",
            category: CATEGORY_API,
            description: "Azure api-version (blank uses the default)",
            get: |s| text_or_unset(&s.openai.api_version),
            set: |s, v| {
                s.openai.api_version = if is_clear(v) {
                    String::new()
                } else {
                    v.to_string()
                };
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::Timeout,
            name: "Timeout",
            category: CATEGORY_API,
            description: "Request timeout in seconds (0 uses 30)",
            get: |s| s.openai.timeout.to_string(),
            set: |s, v| {
                s.openai.timeout = parse_number(v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::MaxTokens,
            name: "Max Tokens",
            category: CATEGORY_GENERATION,
            description: "Maximum tokens for response",
            get: |s| optional(s.openai.max_tokens),
            set: |s, v| {
                s.openai.max_tokens = parse_optional(v, parse_number)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::Temperature,
            name: "Temperature",
            category: CATEGORY_GENERATION,
            description: "Temperature for response generation (0.0-2.0)",
            get: |s| optional_float(s.openai.temperature),
            set: |s, v| {
                s.openai.temperature =
                    parse_optional(v, |v| parse_ranged("Temperature", v, 0.0, 2.0))?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::TopP,
            name: "Top P",
            category: CATEGORY_GENERATION,
            description: "Nucleus sampling probability mass (0.0-1.0)",
            get: |s| optional_float(s.openai.top_p),
            set: |s, v| {
                s.openai.top_p = parse_optional(v, |v| parse_ranged("Top P", v, 0.0, 1.0))?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::PresencePenalty,
            name: "Presence Penalty",
            category: CATEGORY_GENERATION,
            description: "Penalty for tokens already present (-2.0-2.0)",
            get: |s| optional_float(s.openai.presence_penalty),
            set: |s, v| {
                s.openai.presence_penalty =
                    parse_optional(v, |v| parse_ranged("Presence Penalty", v, -2.0, 2.0))?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::FrequencyPenalty,
            name: "Frequency Penalty",
            category: CATEGORY_GENERATION,
            description: "Penalty for frequent tokens (-2.0-2.0)",
            get: |s| optional_float(s.openai.frequency_penalty),
            set: |s, v| {
                s.openai.frequency_penalty =
                    parse_optional(v, |v| parse_ranged("Frequency Penalty", v, -2.0, 2.0))?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::Stop,
            name: "Stop Sequences",
            category: CATEGORY_GENERATION,
            description: "Comma-separated stop sequences",
            get: |s| {
                if s.openai.stop.is_empty() {
                    UNSET.to_string()
                } else {
                    s.openai.stop.join(", ")
                }
            },
            set: |s, v| {
                s.openai.stop = if is_clear(v) {
                    Vec::new()
                } else {
                    v.split(',')
                        .map(str::trim)
                        .filter(|part| !part.is_empty())
                        .map(str::to_string)
                        .collect()
                };
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::Seed,
            name: "Seed",
            category: CATEGORY_GENERATION,
            description: "Sampling seed for reproducible output",
            get: |s| optional(s.openai.seed),
            set: |s, v| {
                s.openai.seed = parse_optional(v, parse_number)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::User,
            name: "User",
            category: CATEGORY_GENERATION,
            description: "End-user identifier sent with requests",
            get: |s| s.openai.user.clone().unwrap_or_else(|| UNSET.to_string()),
            set: |s, v| {
                s.openai.user = parse_optional(v, |v| Ok(v.to_string()))?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::Style,
            name: "Style",
            category: CATEGORY_COMMIT,
            description: "Commit message style (conventional, simple, etc.)",
            get: |s| s.commit_template.style.clone(),
            set: |s, v| {
                s.commit_template.style = v.to_string();
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::MaxLength,
            name: "Max Length",
            category: CATEGORY_COMMIT,
            description: "Maximum commit message length",
            get: |s| s.commit_template.max_length.to_string(),
            set: |s, v| {
                s.commit_template.max_length = parse_number(v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::IncludeScope,
            name: "Include Scope",
            category: CATEGORY_COMMIT,
            description: "Include scope in commit messages",
            get: |s| s.commit_template.include_scope.to_string(),
            set: |s, v| {
                s.commit_template.include_scope = parse_bool(v)?;
                Ok(())
            },
        },
        FieldDescriptor {
            id: FieldId::CommitWithoutConfirmation,
            name: "Commit Without Confirmation",
            category: CATEGORY_COMMIT,
            description: "Skip the confirmation menu in --commit",
            get: |s| s.commit_template.commit_without_confirmation.to_string(),
            set: |s, v| {
                s.commit_template.commit_without_confirmation = parse_bool(v)?;
                Ok(())
            },
        },
    ]
}

/// Looks up one descriptor.
pub fn get(id: FieldId) -> FieldDescriptor {
    all()
        .into_iter()
        .find(|field| field.id == id)
        .unwrap_or_else(|| unreachable!("every FieldId has a descriptor"))
}

/// Case-insensitive: 1/t/true/y/yes and 0/f/false/n/no.
pub fn parse_bool(value: &str) -> Result<bool, FieldParseError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" => Ok(true),
        "0" | "f" | "false" | "n" | "no" => Ok(false),
        _ => Err(FieldParseError::InvalidBool(value.to_string())),
    }
}

pub fn parse_number<T: FromStr>(value: &str) -> Result<T, FieldParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| FieldParseError::InvalidNumber(value.to_string()))
}

fn parse_ranged(
    field: &'static str,
    value: &str,
    min: f32,
    max: f32,
) -> Result<f32, FieldParseError> {
    let parsed: f32 = parse_number(value)?;
    if !(min..=max).contains(&parsed) {
        return Err(FieldParseError::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        });
    }
    Ok(parsed)
}

fn parse_optional<T>(
    value: &str,
    parse: impl Fn(&str) -> Result<T, FieldParseError>,
) -> Result<Option<T>, FieldParseError> {
    if is_clear(value) {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, FieldParseError> {
    if is_clear(value) {
        return Err(FieldParseError::Required(field));
    }
    Ok(value.trim().to_string())
}

fn is_clear(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(CLEAR_KEYWORD)
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNSET.to_string(), |v| v.to_string())
}

fn optional_float(value: Option<f32>) -> String {
    value.map_or_else(|| UNSET.to_string(), |v| format!("{:.2}", v))
}

fn text_or_unset(value: &str) -> String {
    if value.is_empty() {
        UNSET.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_field_id_has_one_descriptor() {
        let fields = all();
        assert_eq!(fields.len(), 18);
        for field in &fields {
            assert_eq!(
                fields.iter().filter(|f| f.id == field.id).count(),
                1,
                "duplicate descriptor for {:?}",
                field.id
            );
        }
    }

    #[test]
    fn test_required_fields_come_first() {
        let names: Vec<_> = all().iter().take(3).map(|f| f.name).collect();
        assert_eq!(names, vec!["API Key", "Base URL", "Model"]);
    }

    #[test]
    fn test_api_key_is_masked_for_display() {
        let mut settings = Settings::default();
        let field = get(FieldId::ApiKey);
        assert_eq!(field.display_value(&settings), "(unset)");

        field.apply(&mut settings, "sk-abcdefghijkl").unwrap();
        assert_eq!(field.value(&settings), "sk-abcdefghijkl");
        assert_eq!(field.display_value(&settings), "sk-a...ijkl");
    }

    #[test]
    fn test_integer_field_rejects_garbage() {
        let mut settings = Settings::default();
        let before = settings.openai.max_tokens;
        let err = get(FieldId::MaxTokens)
            .apply(&mut settings, "lots")
            .unwrap_err();
        assert_eq!(err, FieldParseError::InvalidNumber("lots".to_string()));
        assert_eq!(settings.openai.max_tokens, before);
    }

    #[test]
    fn test_optional_field_can_be_cleared() {
        let mut settings = Settings::default();
        assert!(settings.openai.max_tokens.is_some());
        get(FieldId::MaxTokens)
            .apply(&mut settings, "none")
            .unwrap();
        assert_eq!(settings.openai.max_tokens, None);
        assert_eq!(get(FieldId::MaxTokens).value(&settings), "(unset)");
    }

    #[test]
    fn test_temperature_range_checked() {
        let mut settings = Settings::default();
        let field = get(FieldId::Temperature);
        field.apply(&mut settings, "0.9").unwrap();
        assert_eq!(settings.openai.temperature, Some(0.9));
        assert_eq!(field.value(&settings), "0.90");

        let err = field.apply(&mut settings, "3.5").unwrap_err();
        assert!(matches!(err, FieldParseError::OutOfRange { .. }));
        assert_eq!(settings.openai.temperature, Some(0.9));
    }

    #[test]
    fn test_required_field_cannot_be_cleared() {
        let mut settings = Settings::default();
        let err = get(FieldId::Model).apply(&mut settings, "none").unwrap_err();
        assert_eq!(err, FieldParseError::Required("Model"));
        assert_eq!(settings.openai.model, "gpt-4o-mini");
        assert!(!get(FieldId::Model).is_clearable());
        assert!(get(FieldId::Seed).is_clearable());
    }

    #[test]
    fn test_bool_field_spellings() {
        let mut settings = Settings::default();
        let field = get(FieldId::IncludeScope);
        field.apply(&mut settings, "False").unwrap();
        assert!(!settings.commit_template.include_scope);
        field.apply(&mut settings, "yes").unwrap();
        assert!(settings.commit_template.include_scope);
        assert_eq!(
            field.apply(&mut settings, "maybe").unwrap_err(),
            FieldParseError::InvalidBool("maybe".to_string())
        );
    }

    #[test]
    fn test_stop_sequences_split_on_commas() {
        let mut settings = Settings::default();
        let field = get(FieldId::Stop);
        field.apply(&mut settings, "END, ###,,").unwrap();
        assert_eq!(settings.openai.stop, vec!["END", "###"]);
        assert_eq!(field.value(&settings), "END, ###");
    }
}
