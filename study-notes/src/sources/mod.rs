//! Note sources: where the pages get their notes from.
//!
//! `RemoteSource` fetches `notes/<id>.md` over HTTP, `EmbeddedSource` serves the
//! notes baked into `notes-embedded.js`, and `FallbackSource` tries one and
//! falls back to the other per note.

mod embedded;
mod fallback;
mod remote;

pub use embedded::EmbeddedSource;
pub use fallback::FallbackSource;
pub use remote::RemoteSource;

use crate::notes::{Note, NoteCollection};
use async_trait::async_trait;
use futures_util::future::join_all;

#[async_trait]
pub trait NoteSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Declared note ids, in display order
    fn note_ids(&self) -> Vec<String>;

    async fn fetch_note(&self, id: &str) -> Result<Note, String>;

    /// Fetch every declared note concurrently. The result keeps declared order;
    /// notes that fail to load are logged and left out.
    async fn load_all(&self) -> NoteCollection {
        let ids = self.note_ids();
        let results = join_all(ids.iter().map(|id| self.fetch_note(id))).await;

        let mut collection = NoteCollection::new();
        for (id, result) in ids.iter().zip(results) {
            let inserted = result.and_then(|note| collection.insert(note));
            if let Err(e) = inserted {
                log::warn!("[SOURCES] {}: skipping note '{}': {}", self.name(), id, e);
            }
        }

        log::info!(
            "[SOURCES] {}: loaded {} of {} notes",
            self.name(),
            collection.len(),
            ids.len()
        );
        collection
    }
}
