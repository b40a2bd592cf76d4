//! File operations for the notes directory
//!
//! Lists note sources, derives note ids from file names and writes generated files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

/// A note source file found in the notes directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub id: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Note id for a file: its name without the `.md` extension.
/// Returns `None` for anything that is not a visible `.md` file name.
pub fn note_id(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    if name.starts_with('.') {
        return None;
    }
    let id = name.strip_suffix(".md")?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

/// List the `.md` files directly inside `notes_dir`, newest modification first.
/// Ties are ordered by id so repeated runs list files identically.
pub fn list_note_files(notes_dir: &Path) -> Result<Vec<NoteFile>, String> {
    let mut files = Vec::new();

    for entry in WalkDir::new(notes_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            format!("Failed to read notes directory {}: {}", notes_dir.display(), e)
        })?;
        let path = entry.path();
        let Some(id) = note_id(path) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }

        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| format!("Failed to stat {}: {}", path.display(), e))?;

        files.push(NoteFile {
            id,
            path: path.to_path_buf(),
            modified,
        });
    }

    files.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.id.cmp(&b.id)));
    Ok(files)
}

/// Read a note file as UTF-8 text
pub fn read_note(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

/// Write `content` to `path` unless the file already holds exactly that content.
/// Creates parent directories as needed. Returns whether the file was written.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool, String> {
    match fs::read_to_string(path) {
        Ok(existing) if existing == content => return Ok(false),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e)),
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
    }
    fs::write(path, content).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn write_with_mtime(path: &Path, content: &str, secs: u64) {
        fs::write(path, content).unwrap();
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    #[test]
    fn test_note_id() {
        assert_eq!(note_id(Path::new("notes/react-hooks.md")).as_deref(), Some("react-hooks"));
        assert_eq!(note_id(Path::new("notes/readme.txt")), None);
        assert_eq!(note_id(Path::new("notes/.draft.md")), None);
        assert_eq!(note_id(Path::new("notes/.md")), None);
    }

    #[test]
    fn test_list_note_files_newest_first() {
        let dir = tempdir().unwrap();
        let notes_dir = dir.path();

        write_with_mtime(&notes_dir.join("old.md"), "old", 1_000);
        write_with_mtime(&notes_dir.join("new.md"), "new", 3_000);
        write_with_mtime(&notes_dir.join("b-tie.md"), "tie", 2_000);
        write_with_mtime(&notes_dir.join("a-tie.md"), "tie", 2_000);
        // Not notes
        fs::write(notes_dir.join("image.png"), "png").unwrap();
        fs::write(notes_dir.join(".hidden.md"), "hidden").unwrap();
        fs::create_dir(notes_dir.join("drafts")).unwrap();
        fs::write(notes_dir.join("drafts/nested.md"), "nested").unwrap();

        let ids: Vec<String> = list_note_files(notes_dir)
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["new", "a-tie", "b-tie", "old"]);
    }

    #[test]
    fn test_list_missing_dir_is_error() {
        let dir = tempdir().unwrap();
        let result = list_note_files(&dir.path().join("missing"));
        assert!(result.unwrap_err().contains("Failed to read notes directory"));
    }

    #[test]
    fn test_write_if_changed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/notes-embedded.js");

        assert!(write_if_changed(&path, "one").unwrap());
        assert!(!write_if_changed(&path, "one").unwrap());
        assert!(write_if_changed(&path, "two").unwrap());
        assert_eq!(read_note(&path).unwrap(), "two");
    }
}
