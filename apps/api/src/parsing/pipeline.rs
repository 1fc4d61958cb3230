//! Pipeline orchestrator — primary extraction, fallback escalation, normalization, sectioning.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::resume::ParseResult;
use crate::parsing::extract::{LopdfText, PdfExtractText, TextExtractor};
use crate::parsing::normalize::clean_resume_text;
use crate::parsing::sections::split_into_sections;

/// Primary output shorter than this (trimmed, in chars) triggers the fallback extractor.
pub const MIN_PRIMARY_TEXT_CHARS: usize = 30;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("PDF resource is unreadable: {0}")]
    ResourceUnreadable(String),
}

/// Runs the extraction pipeline with a primary and a fallback strategy.
///
/// Stateless: a single instance can serve concurrent parses.
pub struct ResumeParser {
    primary: Box<dyn TextExtractor>,
    fallback: Box<dyn TextExtractor>,
    min_primary_chars: usize,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(Box::new(PdfExtractText), Box::new(LopdfText))
    }
}

impl ResumeParser {
    pub fn new(primary: Box<dyn TextExtractor>, fallback: Box<dyn TextExtractor>) -> Self {
        Self {
            primary,
            fallback,
            min_primary_chars: MIN_PRIMARY_TEXT_CHARS,
        }
    }

    /// Parses the PDF stored at `path`. The file is read once and closed before extraction.
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult, ParseError> {
        let bytes = std::fs::read(path).map_err(|e| {
            ParseError::ResourceUnreadable(format!("cannot open {}: {e}", path.display()))
        })?;
        self.parse_bytes(&bytes)
    }

    /// Parses an in-memory PDF.
    pub fn parse_bytes(&self, pdf: &[u8]) -> Result<ParseResult, ParseError> {
        let raw_text = self.extract_raw_text(pdf)?;
        let cleaned = clean_resume_text(&raw_text);
        let sections = split_into_sections(&cleaned);

        info!(
            "Parsed resume: {} chars, sections: [{}]",
            cleaned.chars().count(),
            sections.keys().collect::<Vec<_>>().join(", ")
        );

        Ok(ParseResult {
            raw_text: cleaned,
            sections,
        })
    }

    /// Primary first; the fallback replaces it when the primary fails or yields too little.
    fn extract_raw_text(&self, pdf: &[u8]) -> Result<String, ParseError> {
        let primary = self.primary.extract(pdf);

        let primary_error = match primary {
            Ok(text) => {
                let yield_chars = text.trim().chars().count();
                if yield_chars >= self.min_primary_chars {
                    debug!("{} yielded {yield_chars} chars", self.primary.name());
                    return Ok(text);
                }
                warn!(
                    "{} yielded {yield_chars} chars (< {}), trying {}",
                    self.primary.name(),
                    self.min_primary_chars,
                    self.fallback.name()
                );
                match self.fallback.extract(pdf) {
                    Ok(fallback_text) => return Ok(fallback_text),
                    Err(e) => {
                        // the document opened fine; a short primary yield is not fatal
                        warn!("{e}; keeping {} output", self.primary.name());
                        return Ok(text);
                    }
                }
            }
            Err(e) => e,
        };

        warn!("{primary_error}; trying {}", self.fallback.name());
        self.fallback.extract(pdf).map_err(|fallback_error| {
            ParseError::ResourceUnreadable(format!("{primary_error}; {fallback_error}"))
        })
    }
}

/// Parses a resume PDF at `path` with the default extractor pair.
pub fn parse_resume_pdf(path: &Path) -> Result<ParseResult, ParseError> {
    ResumeParser::default().parse_file(path)
}
