/*!
 * # langlist - supported-languages responses for translation APIs
 *
 * A Rust library for reading the answer of a translation API's
 * "list languages" endpoint (`{"languages": [...]}`) into an ordered,
 * immutable list of language records.
 *
 * ## Features
 *
 * - Structural validation of the response document
 * - Best-effort entry parsing: unreadable entries are skipped, with their
 *   positions available through `parse_report`
 * - Pluggable per-entry record parsers
 * - ISO 639-1 and ISO 639-2 language code matching and name lookup
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `response`: Response and list parsing
 *   - `response::language`: Per-entry record type and parsers
 * - `language_utils`: ISO language code utilities
 * - `app_config`: Configuration management
 * - `app_controller`: Command line application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod response;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ResponseError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use response::{
    DefaultRecordParser, LanguageRecordParser, ParseReport, SupportedLanguage,
    SupportedLanguagesList,
};
