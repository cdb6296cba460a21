use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::language_utils::{get_language_name, get_native_language_name};

/// Turns one element of a `languages` array into a record
///
/// Returning `None` marks the element as malformed; the list parser skips
/// it instead of failing the whole response.
pub trait LanguageRecordParser<R> {
    /// Parse a single array element
    fn parse_record(&self, element: &Value) -> Option<R>;
}

impl<F, R> LanguageRecordParser<R> for F
where
    F: Fn(&Value) -> Option<R>,
{
    fn parse_record(&self, element: &Value) -> Option<R> {
        self(element)
    }
}

/// One entry of a supported-languages response
///
/// `language` is the code accepted by the translate call (`en`, `zh-TW`).
/// `name` is only present when the listing was requested with a display
/// language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupportedLanguage {
    /// Language code as reported by the API
    pub language: String,

    /// Human readable name, if the API sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Which ISO table to use when filling in missing names
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// English exonym (`German`)
    #[default]
    English,
    /// The language's own name (`Deutsch`)
    Native,
}

impl SupportedLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.language
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name when known, otherwise the bare code
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(&self.language)
    }

    /// Fill a missing name from the ISO 639 tables
    ///
    /// Codes the tables don't know (and entries that already carry a name)
    /// are returned unchanged.
    pub fn resolved(mut self, style: NameStyle) -> Self {
        if self.name.is_none() {
            let lookup = match style {
                NameStyle::English => get_language_name(&self.language),
                NameStyle::Native => get_native_language_name(&self.language)
                    .or_else(|_| get_language_name(&self.language)),
            };
            self.name = lookup.ok();
        }
        self
    }
}

/// Record parser for the `{"language": "...", "name": "..."}` entry shape
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRecordParser;

impl LanguageRecordParser<SupportedLanguage> for DefaultRecordParser {
    fn parse_record(&self, element: &Value) -> Option<SupportedLanguage> {
        let entry = element.as_object()?;

        let language = entry.get("language")?.as_str()?.trim();
        if language.is_empty() {
            return None;
        }

        // A non-string name is ignored rather than rejecting the entry
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(SupportedLanguage {
            language: language.to_string(),
            name,
        })
    }
}
