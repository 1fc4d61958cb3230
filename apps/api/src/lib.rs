//! JobMatch API — resume PDF parsing service.
//!
//! The `parsing` module is the synchronous core: [`parsing::parse_resume_pdf`] turns a
//! PDF on disk into cleaned text plus heading-delimited sections. The remaining
//! modules are the HTTP surface around it.

pub mod config;
pub mod errors;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod state;
