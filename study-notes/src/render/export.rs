//! Static export: the list page plus one detail page per note, written to one directory.

use super::{render_detail_page, render_list_page, RenderOptions};
use crate::config::NotesConfig;
use crate::notes::file_ops::write_if_changed;
use crate::notes::NoteCollection;
use std::path::{Component, Path, PathBuf};

pub const LIST_PAGE_FILE: &str = "index.html";

/// File name of a note's exported detail page. The `note-` prefix keeps
/// every detail page apart from `index.html`, whatever the note id.
pub fn static_page_name(id: &str) -> String {
    format!("note-{}.html", id)
}

/// Stylesheet href as seen from pages in `config.export_dir`.
///
/// URLs and root-relative hrefs are used as they are. A site-relative
/// stylesheet is resolved against `site_dir` and made relative to the export
/// directory, falling back to the absolute path when no relative path exists.
pub fn stylesheet_href(config: &NotesConfig) -> String {
    let sheet = config.stylesheet.as_str();
    if sheet.contains("://") || sheet.starts_with('/') {
        return sheet.to_string();
    }

    let target = config.site_dir.join(sheet);
    match relative_href(&config.export_dir, &target) {
        Some(href) => href,
        None => {
            log::warn!(
                "[NOTES] No relative path from {} to {}, linking it absolutely",
                config.export_dir.display(),
                target.display()
            );
            target.display().to_string()
        }
    }
}

/// `/`-separated relative URL from directory `from` to file `to`
fn relative_href(from: &Path, to: &Path) -> Option<String> {
    if from.has_root() != to.has_root() {
        return None;
    }

    let from: Vec<Component> = from.components().filter(|c| *c != Component::CurDir).collect();
    let to: Vec<Component> = to.components().filter(|c| *c != Component::CurDir).collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) = (from.first(), to.first()) {
        if a != b {
            return None;
        }
    }

    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();
    if from[common..].contains(&Component::ParentDir) {
        return None;
    }

    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    for component in &to[common..] {
        match component {
            Component::Normal(name) => parts.push(urlencoding::encode(name.to_str()?).into_owned()),
            Component::ParentDir => parts.push("..".to_string()),
            _ => return None,
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Write `index.html` and a `note-<id>.html` page per note into `export_dir`.
/// Pages whose content did not change are left untouched. Returns every page path.
pub fn export_site(
    collection: &NoteCollection,
    options: &RenderOptions,
    export_dir: &Path,
) -> Result<Vec<PathBuf>, String> {
    let mut pages = Vec::with_capacity(collection.len() + 1);

    let list_path = export_dir.join(LIST_PAGE_FILE);
    write_if_changed(&list_path, &render_list_page(collection, options)?)?;
    pages.push(list_path);

    for note in collection {
        let path = export_dir.join(static_page_name(&note.id));
        let html = render_detail_page(collection, &note.id, options)?;
        if write_if_changed(&path, &html)? {
            log::debug!("[NOTES] Wrote {}", path.display());
        }
        pages.push(path);
    }

    Ok(pages)
}
