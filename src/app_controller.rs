/*!
 * Application controller for the langlist command line tool.
 *
 * Reads a supported-languages response, parses it according to the
 * loaded `Config` and renders the result.
 */

use anyhow::Context;
use log::{debug, info, warn};
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;

use crate::app_config::Config;
use crate::errors::{AppError, ResponseError};
use crate::response::{DefaultRecordParser, ParseReport, SupportedLanguagesList};

/// Output format for a parsed language list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `code<TAB>name` line per language
    #[default]
    Table,
    /// The list as a pretty printed `{"languages": [...]}` document
    Json,
}

/// Main application controller
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller after validating the configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))?;
        Ok(Self { config })
    }

    /// Read a response body from a file, or from stdin when `path` is `-`
    pub fn read_input(path: &Path) -> Result<String, AppError> {
        let read = if path == Path::new("-") {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body).map(|_| body)
        } else {
            std::fs::read_to_string(path)
        };
        let body = read.map_err(|e| AppError::File(format!("{}: {}", path.display(), e)))?;

        debug!("Read {} bytes of response body", body.len());
        Ok(body)
    }

    /// Parse a response body, resolving names as configured
    pub fn parse_response(&self, body: &str) -> Result<ParseReport, ResponseError> {
        let json: Value = serde_json::from_str(body)?;
        let parser_config = &self.config.parser;

        let mut report = SupportedLanguagesList::parse_report(&json, &DefaultRecordParser)?;

        if !report.dropped.is_empty() {
            warn!("Skipped {} unreadable language entries", report.dropped_count());
        }

        if parser_config.resolve_names {
            report.list = report.list.resolve_names(parser_config.name_style);
        }

        if !report.list.contains_code(&self.config.fallback_language) {
            info!(
                "Fallback language '{}' is not in the supported list",
                self.config.fallback_language
            );
        }

        Ok(report)
    }

    /// Write a parsed list in the requested format
    pub fn render<W: Write>(
        list: &SupportedLanguagesList,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<(), AppError> {
        match format {
            OutputFormat::Table => {
                for language in list {
                    writeln!(out, "{}\t{}", language.code(), language.display_name())?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, list)
                    .context("Failed to serialize language list")?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Read, parse and render one response; the report is returned for the caller
    pub fn run<W: Write>(
        &self,
        input: &Path,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<ParseReport, AppError> {
        let body = Self::read_input(input)?;
        let report = self.parse_response(&body)?;
        Self::render(&report.list, format, out)?;
        Ok(report)
    }
}
