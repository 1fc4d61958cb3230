//! Text normalizer — collapses whitespace irregularities left behind by PDF extraction.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ ]{2,}").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalizes extracted resume text.
///
/// Applied in order:
/// 1. tabs → single space
/// 2. runs of 2+ spaces → one space
/// 3. runs of 3+ newlines → exactly two (at most one blank line)
/// 4. trim leading/trailing whitespace
///
/// Pure and total: any input produces a cleaned string.
pub fn clean_resume_text(text: &str) -> String {
    let text = text.replace('\t', " ");
    let text = SPACE_RUN_RE.replace_all(&text, " ");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}
