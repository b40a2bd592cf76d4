//! NoteCollection: ordered, id-unique set of notes.
//!
//! Built once (by sync, by reading the embedded artifact, or by a note source)
//! and passed explicitly to whatever renders it.

use super::types::Note;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: Vec<Note>,
    index: HashMap<String, usize>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, rejecting the first duplicate id.
    pub fn from_notes<I>(notes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = Note>,
    {
        let mut collection = Self::new();
        for note in notes {
            collection.insert(note)?;
        }
        Ok(collection)
    }

    /// Append a note. A note whose id is already present is rejected.
    pub fn insert(&mut self, note: Note) -> Result<(), String> {
        if note.id.is_empty() {
            return Err("Note id must not be empty".to_string());
        }
        if self.index.contains_key(&note.id) {
            return Err(format!("Duplicate note id: {}", note.id));
        }
        self.index.insert(note.id.clone(), self.notes.len());
        self.notes.push(note);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.index.get(id).map(|&i| &self.notes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Note ids in collection order
    pub fn ids(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
