//! Language utilities for ISO language code handling
//!
//! Translation APIs report codes in several shapes: ISO 639-1 (`en`),
//! ISO 639-2 (`eng`, `fre`) and region tagged BCP-47 style codes
//! (`pt-BR`, `zh_TW`). These helpers validate, normalize and compare them.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

/// ISO 639-2/B codes that differ from their ISO 639-2/T counterpart
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    PART2B_TO_PART2T
        .iter()
        .find(|(part2b, _)| *part2b == code)
        .map(|(_, part2t)| *part2t)
}

/// Strip a region or script suffix from a code (`pt-BR` -> `pt`, `zh_TW` -> `zh`)
pub fn primary_subtag(code: &str) -> &str {
    let trimmed = code.trim();
    match trimmed.find(['-', '_']) {
        Some(pos) => &trimmed[..pos],
        None => trimmed,
    }
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 if Language::from_639_1(&normalized_code).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&normalized_code).is_some() => Ok(LanguageCodeType::Part2T),
        3 if part2b_to_part2t(&normalized_code).is_some() => Ok(LanguageCodeType::Part2B),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
        if let Some(part2t) = part2b_to_part2t(&normalized_code) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check if two language codes match (represent the same language)
///
/// Codes that are not ISO 639 (such as `zh-TW`) only match when they are
/// equal ignoring case.
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(normalized1), Ok(normalized2)) => normalized1 == normalized2,
        _ => code1.trim().eq_ignore_ascii_case(code2.trim()),
    }
}

fn lookup(code: &str) -> Result<Language> {
    let normalized = normalize_to_part2t(primary_subtag(code))?;
    Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(lookup(code)?.to_name().to_string())
}

/// Get the language's name for itself (autonym), e.g. `Deutsch` for `de`
pub fn get_native_language_name(code: &str) -> Result<String> {
    let lang = lookup(code)?;
    lang.to_autonym()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("No native name known for language code: {}", code))
}
