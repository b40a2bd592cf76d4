use super::NoteSource;
use crate::notes::embedded::parse_artifact;
use crate::notes::file_ops;
use crate::notes::{Note, NoteCollection};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Notes baked into the generated artifact (or any prebuilt collection)
#[derive(Debug, Clone)]
pub struct EmbeddedSource {
    notes: Arc<NoteCollection>,
}

impl EmbeddedSource {
    pub fn new(notes: NoteCollection) -> Self {
        Self {
            notes: Arc::new(notes),
        }
    }

    /// Load `notes-embedded.js` from disk
    pub fn from_artifact_file(path: &Path) -> Result<Self, String> {
        let text = file_ops::read_note(path)?;
        let notes = parse_artifact(&text).map_err(|e| format!("{}: {}", path.display(), e))?;
        log::info!(
            "[SOURCES] Loaded {} embedded notes from {}",
            notes.len(),
            path.display()
        );
        Ok(Self::new(notes))
    }

    pub fn collection(&self) -> &NoteCollection {
        &self.notes
    }
}

#[async_trait]
impl NoteSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embedded"
    }

    fn note_ids(&self) -> Vec<String> {
        self.notes.ids()
    }

    async fn fetch_note(&self, id: &str) -> Result<Note, String> {
        self.notes
            .get(id)
            .cloned()
            .ok_or_else(|| format!("Note not found: {}", id))
    }

    async fn load_all(&self) -> NoteCollection {
        self.notes.as_ref().clone()
    }
}
