//! Section segmenter — splits cleaned resume text into named sections by heading keywords.
//!
//! Heading detection is a substring match against [`SECTION_HEADERS`]: the first
//! section (in catalog order) with any phrase contained in the lower-cased line wins.
//! A line such as "Skills and Experience" therefore always lands in `skills`.

use crate::models::resume::SectionMap;

/// Key used when no heading was recognized anywhere in the text.
pub const RAW_SECTION: &str = "raw";

/// Canonical resume sections, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Skills,
    Experience,
    Projects,
    Education,
}

impl SectionName {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Skills => "skills",
            SectionName::Experience => "experience",
            SectionName::Projects => "projects",
            SectionName::Education => "education",
        }
    }
}

/// Heading phrases per section. Phrases are lower-case; order is significant.
pub const SECTION_HEADERS: &[(SectionName, &[&str])] = &[
    (
        SectionName::Skills,
        &["skills", "technical skills", "core skills"],
    ),
    (
        SectionName::Experience,
        &["experience", "work experience", "professional experience"],
    ),
    (
        SectionName::Projects,
        &["projects", "academic projects", "personal projects"],
    ),
    (
        SectionName::Education,
        &["education", "academic background"],
    ),
];

/// Returns the section a line introduces, if it looks like a heading.
pub fn detect_heading(line: &str) -> Option<SectionName> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let low = line.to_lowercase();
    SECTION_HEADERS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|phrase| low.contains(phrase)))
        .map(|(name, _)| *name)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text into lines on `\n`, `\r\n`, a lone `\r`, vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line/paragraph separators.
///
/// A trailing break does not produce an empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some(&(_, '\n'))) {
            chars.next();
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// All heading lines as `(line_index, section)`, ascending by line index.
/// Indices refer to [`split_lines`] output.
pub fn locate_headings(text: &str) -> Vec<(usize, SectionName)> {
    headings_in(&split_lines(text))
}

fn headings_in(lines: &[&str]) -> Vec<(usize, SectionName)> {
    let mut found: Vec<(usize, SectionName)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| detect_heading(line).map(|name| (i, name)))
        .collect();
    found.sort_by_key(|(i, _)| *i);
    found
}

/// Splits cleaned text into sections.
///
/// Each section body is every line after its heading up to the next heading
/// (or end of text), joined with `\n` and trimmed. Heading lines never appear
/// in a body. A recurring heading overwrites the earlier body of that section.
/// With no headings at all, the whole input is returned under [`RAW_SECTION`].
pub fn split_into_sections(text: &str) -> SectionMap {
    let lines = split_lines(text);
    let found = headings_in(&lines);
    if found.is_empty() {
        return [(RAW_SECTION, text)].into_iter().collect();
    }

    let mut sections = SectionMap::new();

    for (idx, &(start, name)) in found.iter().enumerate() {
        let end = found
            .get(idx + 1)
            .map_or(lines.len(), |&(next_start, _)| next_start);
        let body = lines[start + 1..end].join("\n");
        sections.insert(name.as_str(), body.trim());
    }

    sections
}
