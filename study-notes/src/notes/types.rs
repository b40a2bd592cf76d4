use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Front-matter metadata of a note. Absent fields stay empty, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMetadata {
    #[serde(default)]
    pub title: String,
    /// Calendar date as authored (usually `YYYY-MM-DD`)
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: String,
    /// Any other front-matter keys, kept verbatim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl NoteMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.date.is_empty()
            && self.tags.is_empty()
            && self.summary.is_empty()
            && self.extra.is_empty()
    }
}

/// A single note: id (file name without `.md`), metadata and raw markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: String,
    pub metadata: NoteMetadata,
    pub body: String,
}

impl Note {
    pub fn new(id: impl Into<String>, metadata: NoteMetadata, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            metadata,
            body: body.into(),
        }
    }

    /// Parse raw note text (front matter + body) into a note with the given id.
    pub fn parse(id: impl Into<String>, content: &str) -> Self {
        let parsed = super::frontmatter::parse_note(content);
        Self::new(id, parsed.metadata, parsed.body)
    }
}
