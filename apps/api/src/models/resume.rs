use serde::ser::{Serialize, SerializeMap, Serializer};

/// Canonical section name → body text, kept in document order.
///
/// Inserting an existing key replaces its body but keeps the position of the
/// first occurrence, so serialization order always follows where a section
/// first appeared in the resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a section body. Returns the previous body, if any.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) -> Option<String> {
        let name = name.into();
        let body = body.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, body)),
            None => {
                self.entries.push((name, body));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SectionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SectionMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Output of one resume parse: the cleaned text plus its sections.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParseResult {
    pub raw_text: String,
    pub sections: SectionMap,
}

/// Client-side view of a parse response. Section order is not preserved.
#[cfg(test)]
#[derive(Debug, serde::Deserialize)]
pub struct ParseResultView {
    pub raw_text: String,
    pub sections: std::collections::HashMap<String, String>,
}
