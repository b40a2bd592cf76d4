//! Regenerate `notes-embedded.js` from the notes directory.

use super::embedded::{generate_artifact, ArtifactOptions};
use super::file_ops;
use super::registry::NoteCollection;
use super::types::Note;
use crate::config::NotesConfig;
use std::path::{Path, PathBuf};

/// Outcome of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Note ids in artifact order (newest first)
    pub note_ids: Vec<String>,
    pub output_file: PathBuf,
    /// False when the artifact already had identical content
    pub written: bool,
}

/// Read and parse every note in `notes_dir`, newest modification first.
pub fn read_notes(notes_dir: &Path) -> Result<NoteCollection, String> {
    let files = file_ops::list_note_files(notes_dir)?;

    let mut collection = NoteCollection::new();
    for file in files {
        let content = file_ops::read_note(&file.path)?;
        let note = Note::parse(file.id, &content);
        if note.metadata.is_empty() {
            log::debug!("[NOTES] {} has no front matter", file.path.display());
        }
        collection.insert(note)?;
    }

    Ok(collection)
}

/// Read the notes directory and write the artifact to `config.output_file`.
pub fn sync(config: &NotesConfig) -> Result<SyncReport, String> {
    let collection = read_notes(&config.notes_dir)?;
    log::info!(
        "[NOTES] Found {} notes: {}",
        collection.len(),
        collection.ids().join(", ")
    );

    let artifact = generate_artifact(&collection, &ArtifactOptions::from_config(config))?;
    let written = file_ops::write_if_changed(&config.output_file, &artifact)?;

    Ok(SyncReport {
        note_ids: collection.ids(),
        output_file: config.output_file.clone(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_notes_parses_front_matter() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("react-hooks.md"),
            "---\ntitle: React Hooks\ntags: [\"React\", \"Hooks\"]\n---\n# Hooks\n",
        )
        .unwrap();

        let collection = read_notes(dir.path()).unwrap();
        let note = collection.get("react-hooks").unwrap();
        assert_eq!(note.metadata.title, "React Hooks");
        assert_eq!(note.metadata.tags, vec!["React", "Hooks"]);
        assert_eq!(note.body, "# Hooks\n");
    }

    #[test]
    fn test_sync_is_idempotent() {
        let dir = tempdir().unwrap();
        let config = NotesConfig::for_site(dir.path().to_path_buf());
        fs::create_dir_all(&config.notes_dir).unwrap();
        fs::write(config.notes_dir.join("one.md"), "plain body").unwrap();

        let first = sync(&config).unwrap();
        assert!(first.written);
        assert_eq!(first.note_ids, vec!["one"]);
        let bytes = fs::read_to_string(&config.output_file).unwrap();

        let second = sync(&config).unwrap();
        assert!(!second.written);
        assert_eq!(fs::read_to_string(&config.output_file).unwrap(), bytes);
    }

    #[test]
    fn test_sync_missing_notes_dir_fails() {
        let dir = tempdir().unwrap();
        let config = NotesConfig::for_site(dir.path().to_path_buf());
        assert!(sync(&config).is_err());
        assert!(!config.output_file.exists());
    }
}
