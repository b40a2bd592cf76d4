//! Parse and generate the front-matter header of a note.
//!
//! Hand-rolled `key: value` header (no serde_yaml). A note is
//!
//! ```text
//! ---
//! title: My Title
//! date: 2024-01-15
//! tags: Tag1, Tag2, Tag3
//! summary: Short summary
//! ---
//! Markdown body...
//! ```
//!
//! Anything that does not match this shape is treated as a body without metadata.

use super::types::{Note, NoteMetadata};

const DELIMITER: &str = "---";

/// A fully parsed note (metadata + body)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNote {
    pub metadata: NoteMetadata,
    pub body: String,
    /// False when no well-formed header was found and `body` is the whole input
    pub has_frontmatter: bool,
}

/// Parse a complete note file (front matter + body). Never fails.
pub fn parse_note(content: &str) -> ParsedNote {
    match split_frontmatter(content) {
        Some((header, body)) => ParsedNote {
            metadata: parse_frontmatter(header),
            body: body.to_string(),
            has_frontmatter: true,
        },
        None => ParsedNote {
            metadata: NoteMetadata::default(),
            body: content.to_string(),
            has_frontmatter: false,
        },
    }
}

/// Split content into (header, body).
///
/// The first line must be a `---` delimiter and a later line must close the
/// block. The body is everything after the closing line, byte for byte.
/// Returns `None` when either delimiter is missing.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next()?;
    if !opening.ends_with('\n') || !is_delimiter(opening) {
        return None;
    }

    let header_start = opening.len();
    let mut offset = header_start;
    for line in lines {
        if is_delimiter(line) {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parse header lines into metadata. Later duplicate keys win.
pub fn parse_frontmatter(header: &str) -> NoteMetadata {
    let mut metadata = NoteMetadata::default();

    for line in header.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = unquote(value);

        match key {
            "title" => metadata.title = value,
            "date" => metadata.date = value,
            "summary" => metadata.summary = value,
            "tags" => metadata.tags = parse_tags(&value),
            _ => {
                metadata.extra.insert(key.to_string(), value);
            }
        }
    }

    metadata
}

/// Parse a tags value. `A, B, C`, `["A","B","C"]` and `[A, B, C]` all give
/// the same ordered list of trimmed, non-empty tags.
pub fn parse_tags(value: &str) -> Vec<String> {
    let value = value.trim();

    if value.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(value) {
            return items
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect();
        }
        return parse_inline_list(value);
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate the front-matter block (opening through closing delimiter, no
/// trailing newline). Empty fields are left out.
pub fn generate_frontmatter(metadata: &NoteMetadata) -> String {
    let mut lines = vec![DELIMITER.to_string()];

    if !metadata.title.is_empty() {
        lines.push(format!("title: {}", quote(&metadata.title)));
    }
    if !metadata.date.is_empty() {
        lines.push(format!("date: {}", quote(&metadata.date)));
    }
    if !metadata.tags.is_empty() {
        let tags = serde_json::to_string(&metadata.tags).unwrap_or_else(|_| "[]".to_string());
        lines.push(format!("tags: {}", tags));
    }
    if !metadata.summary.is_empty() {
        lines.push(format!("summary: {}", quote(&metadata.summary)));
    }
    for (key, value) in &metadata.extra {
        lines.push(format!("{}: {}", key, quote(value)));
    }

    lines.push(DELIMITER.to_string());
    lines.join("\n")
}

/// Serialize a note back to its source form. `parse_note` on the result gives
/// back the same metadata and body.
pub fn to_markdown(note: &Note) -> String {
    format!("{}\n{}", generate_frontmatter(&note.metadata), note.body)
}

/// Remove one layer of surrounding double quotes from a trimmed string.
/// Single quotes are left alone so apostrophes in prose survive.
fn unquote(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Unquote one inline-list item, which may use either quote style
fn unquote_item(s: &str) -> &str {
    let s = s.trim();
    let quoted = s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')));
    if quoted {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Parse an inline YAML list like [foo, bar, "baz, qux"].
/// Commas inside a quoted item do not split it. A quote only opens an item
/// when it is the item's first character.
fn parse_inline_list(s: &str) -> Vec<String> {
    let s = s.trim();
    let inner = s.strip_prefix('[').unwrap_or(s);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    let mut items = Vec::new();
    let mut start = 0;
    let mut open_quote: Option<char> = None;
    for (i, c) in inner.char_indices() {
        match (open_quote, c) {
            (Some(q), c) if c == q => open_quote = None,
            (None, '"' | '\'') if inner[start..i].trim().is_empty() => open_quote = Some(c),
            (None, ',') => {
                items.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&inner[start..]);

    items
        .into_iter()
        .map(|item| unquote_item(item).trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
