/*!
 * Supported-languages response parsing.
 *
 * A translation API's "list languages" endpoint answers with
 * `{"languages": [ ... ]}`. This module turns that document into an
 * ordered `SupportedLanguagesList`:
 * - the root must be an object with a `languages` array, otherwise the
 *   whole response is rejected with `ResponseError::MalformedResponse`
 * - each array element goes through a `LanguageRecordParser`; elements it
 *   cannot parse are dropped and the rest keep their original order
 *
 * `SupportedLanguagesList::parse_report` additionally reports which
 * elements were dropped. A dropped element never fails the response.
 */

use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;

use crate::errors::ResponseError;
use crate::language_utils::language_codes_match;

pub mod language;

pub use language::{DefaultRecordParser, LanguageRecordParser, NameStyle, SupportedLanguage};

/// Key holding the language array in the response object
const LANGUAGES_KEY: &str = "languages";

/// Longest element excerpt written to the log for a dropped entry
const MAX_EXCERPT_CHARS: usize = 60;

/// The languages listed by a supported-languages response, in response order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLanguagesList<R = SupportedLanguage> {
    languages: Vec<R>,
}

/// A parsed list plus the array positions that were left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport<R = SupportedLanguage> {
    /// The surviving records
    pub list: SupportedLanguagesList<R>,
    /// Indices into the `languages` array of every dropped element
    pub dropped: Vec<usize>,
}

impl<R> ParseReport<R> {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

impl SupportedLanguagesList<SupportedLanguage> {
    /// Parse a response using the default `{"language", "name"}` entry shape
    pub fn from_json(json: &Value) -> Result<Self, ResponseError> {
        Self::from_json_with(json, &DefaultRecordParser)
    }

    /// Parse a raw response body
    pub fn from_json_str(text: &str) -> Result<Self, ResponseError> {
        let json: Value = serde_json::from_str(text)?;
        Self::from_json(&json)
    }

    /// Whether a language is listed, comparing codes as ISO languages
    /// (`en`, `eng` and `EN` are the same language)
    pub fn contains_code(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// First entry whose code denotes the same language as `code`
    pub fn find(&self, code: &str) -> Option<&SupportedLanguage> {
        self.languages
            .iter()
            .find(|language| language_codes_match(language.code(), code))
    }

    /// Fill in missing names from the ISO 639 tables
    pub fn resolve_names(self, style: NameStyle) -> Self {
        Self {
            languages: self
                .languages
                .into_iter()
                .map(|language| language.resolved(style))
                .collect(),
        }
    }
}

impl<R> SupportedLanguagesList<R> {
    /// Parse a response with a caller supplied record parser
    ///
    /// Elements the parser rejects are skipped silently.
    pub fn from_json_with<P>(json: &Value, parser: &P) -> Result<Self, ResponseError>
    where
        P: LanguageRecordParser<R> + ?Sized,
    {
        let languages: Vec<R> = languages_array(json)?
            .iter()
            .filter_map(|element| parser.parse_record(element))
            .collect();

        debug!("Parsed supported-languages response with {} entries", languages.len());
        Ok(Self { languages })
    }

    /// Parse a response and report which elements were dropped
    ///
    /// Keeps exactly the records `from_json_with` keeps; only a malformed
    /// root document is an error.
    pub fn parse_report<P>(json: &Value, parser: &P) -> Result<ParseReport<R>, ResponseError>
    where
        P: LanguageRecordParser<R> + ?Sized,
    {
        let elements = languages_array(json)?;
        let mut languages = Vec::with_capacity(elements.len());
        let mut dropped = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            match parser.parse_record(element) {
                Some(record) => languages.push(record),
                None => {
                    trace!(
                        "Dropping unreadable language entry at index {}: {}",
                        index,
                        excerpt(element)
                    );
                    dropped.push(index);
                }
            }
        }

        debug!(
            "Parsed supported-languages response: {} kept, {} dropped",
            languages.len(),
            dropped.len()
        );

        Ok(ParseReport {
            list: Self { languages },
            dropped,
        })
    }

    pub fn languages(&self) -> &[R] {
        &self.languages
    }

    pub fn into_languages(self) -> Vec<R> {
        self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.languages.iter()
    }
}

impl<R> Default for SupportedLanguagesList<R> {
    fn default() -> Self {
        Self { languages: Vec::new() }
    }
}

impl<R> IntoIterator for SupportedLanguagesList<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a SupportedLanguagesList<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}

/// Locate the `languages` array, rejecting any other document shape
fn languages_array(json: &Value) -> Result<&Vec<Value>, ResponseError> {
    let root = json.as_object().ok_or_else(|| {
        ResponseError::MalformedResponse(format!(
            "expected a JSON object at the root, found {}",
            kind(json)
        ))
    })?;

    let languages = root.get(LANGUAGES_KEY).ok_or_else(|| {
        ResponseError::MalformedResponse(format!("missing \"{}\" key", LANGUAGES_KEY))
    })?;

    languages.as_array().ok_or_else(|| {
        ResponseError::MalformedResponse(format!(
            "\"{}\" must be an array, found {}",
            LANGUAGES_KEY,
            kind(languages)
        ))
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn excerpt(value: &Value) -> String {
    let text = value.to_string();
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text;
    }
    let mut short: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
    short.push_str("...");
    short
}
