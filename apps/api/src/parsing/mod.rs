// Resume parsing pipeline
// Implements: PDF text extraction (primary + fallback), normalization, heading-based sectioning.
// The pipeline is synchronous; async callers must run it inside tokio::task::spawn_blocking.

pub mod extract;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod sections;

#[cfg(test)]
pub(crate) mod test_pdfs;

pub use pipeline::{parse_resume_pdf, ParseError, ResumeParser};
