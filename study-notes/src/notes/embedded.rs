//! The generated `notes-embedded.js` artifact.
//!
//! The artifact declares `EMBEDDED_NOTES` (id -> metadata + content) and
//! `NOTE_IDS` (display order) as JSON literals, followed by the static render
//! helpers from `assets/embedded-helpers.js`. Pages that cannot fetch
//! `notes/*.md` (opened from disk, offline) render from it directly.

use super::registry::NoteCollection;
use super::types::{Note, NoteMetadata};
use crate::config::{defaults, NotesConfig};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const HEADER: &str = "\
// Embedded notes fallback - works without a local server
// This file is auto-generated from notes/*.md files
// Run `sync-notes` to regenerate after editing notes
";

const NOTES_DECL: &str = "const EMBEDDED_NOTES = ";
const AUTHOR_DECL: &str = "const NOTES_SITE_AUTHOR = ";
const DETAIL_PAGE_DECL: &str = "const NOTES_DETAIL_PAGE = ";
const IDS_DECL: &str = "const NOTE_IDS = ";

const HELPERS: &str = include_str!("../../assets/embedded-helpers.js");

/// Site settings baked into the helpers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOptions {
    /// Detail page title suffix
    pub author: String,
    /// Page the note cards link to (`<page>?id=<note id>`)
    pub detail_page: String,
}

impl ArtifactOptions {
    pub fn from_config(config: &NotesConfig) -> Self {
        Self {
            author: config.author.clone(),
            detail_page: config.detail_page.clone(),
        }
    }
}

impl Default for ArtifactOptions {
    fn default() -> Self {
        Self {
            author: defaults::AUTHOR.to_string(),
            detail_page: defaults::DETAIL_PAGE.to_string(),
        }
    }
}

#[derive(Serialize)]
struct EntryRef<'a> {
    metadata: &'a NoteMetadata,
    content: &'a str,
}

#[derive(Deserialize)]
struct Entry {
    #[serde(default)]
    metadata: NoteMetadata,
    #[serde(default)]
    content: String,
}

/// `EMBEDDED_NOTES` serialized in collection order
struct OrderedNotes<'a>(&'a NoteCollection);

impl Serialize for OrderedNotes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for note in self.0 {
            map.serialize_entry(
                &note.id,
                &EntryRef {
                    metadata: &note.metadata,
                    content: &note.body,
                },
            )?;
        }
        map.end()
    }
}

/// `EMBEDDED_NOTES` read back with every key kept, so duplicates stay visible
struct Entries(Vec<(String, Entry)>);

impl<'de> Deserialize<'de> for Entries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = Entries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of notes keyed by id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Entries, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, entry)) = access.next_entry::<String, Entry>()? {
                    entries.push((id, entry));
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Render the artifact for a collection. Same collection, same bytes.
pub fn generate_artifact(
    collection: &NoteCollection,
    options: &ArtifactOptions,
) -> Result<String, String> {
    let notes = to_script_json(&OrderedNotes(collection))?;
    let ids = to_script_json(&collection.ids())?;
    let author = to_script_json(&options.author)?;
    let detail_page = to_script_json(&options.detail_page)?;

    let mut output = String::with_capacity(notes.len() + ids.len() + HELPERS.len() + 256);
    output.push_str(HEADER);
    output.push('\n');
    output.push_str(NOTES_DECL);
    output.push_str(&notes);
    output.push_str(";\n\n// List of note IDs in order\n");
    output.push_str(IDS_DECL);
    output.push_str(&ids);
    output.push_str(";\n\n");
    output.push_str(AUTHOR_DECL);
    output.push_str(&author);
    output.push_str(";\n");
    output.push_str(DETAIL_PAGE_DECL);
    output.push_str(&detail_page);
    output.push_str(";\n\n");
    output.push_str(HELPERS);
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Read an artifact back into a collection in `NOTE_IDS` order.
///
/// Duplicate ids in either declaration are an error. Ids listed without an
/// entry, and entries that are never listed, are skipped with a warning.
pub fn parse_artifact(text: &str) -> Result<NoteCollection, String> {
    let entries: Entries = read_declaration(text, NOTES_DECL)?;
    let ids: Vec<String> = read_declaration(text, IDS_DECL)?;

    let mut by_id: HashMap<String, Entry> = HashMap::with_capacity(entries.0.len());
    for (id, entry) in entries.0 {
        if by_id.contains_key(&id) {
            return Err(format!("Duplicate note id in EMBEDDED_NOTES: {}", id));
        }
        by_id.insert(id, entry);
    }

    let mut collection = NoteCollection::new();
    for id in ids {
        if collection.contains(&id) {
            return Err(format!("Duplicate note id in NOTE_IDS: {}", id));
        }
        match by_id.remove(&id) {
            Some(entry) => collection.insert(Note::new(id, entry.metadata, entry.content))?,
            None => log::warn!("[NOTES] NOTE_IDS lists '{}' but EMBEDDED_NOTES has no entry", id),
        }
    }

    for id in by_id.keys() {
        log::warn!("[NOTES] Embedded note '{}' is not listed in NOTE_IDS, skipping", id);
    }

    Ok(collection)
}

/// Find `decl` at the start of a line and parse the JSON value after it.
fn read_declaration<T>(text: &str, decl: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let start = if text.starts_with(decl) {
        0
    } else {
        text.find(&format!("\n{}", decl))
            .map(|i| i + 1)
            .ok_or_else(|| format!("Artifact has no `{}` declaration", decl.trim_end_matches(" = ")))?
    };

    let rest = &text[start + decl.len()..];
    serde_json::Deserializer::from_str(rest)
        .into_iter::<T>()
        .next()
        .ok_or_else(|| format!("Missing value after `{}`", decl.trim_end()))?
        .map_err(|e| format!("Invalid `{}` value: {}", decl.trim_end_matches(" = "), e))
}

/// Pretty JSON (4-space indent) safe to embed in a script: `<`, `>`, `&` and
/// the JS line separators are emitted as `\u` escapes. Those characters only
/// ever occur inside JSON strings, so the replacement keeps the JSON valid.
fn to_script_json<T: Serialize>(value: &T) -> Result<String, String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| format!("Failed to serialize notes: {}", e))?;
    let json = String::from_utf8(buf).map_err(|e| format!("Serialized notes are not UTF-8: {}", e))?;

    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    Ok(escaped)
}
