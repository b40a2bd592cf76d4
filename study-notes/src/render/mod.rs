//! HTML views of notes: summary cards for the list page and the detail view.
//!
//! Views are askama templates filled from a `NoteCollection`. Missing metadata
//! renders as placeholder or empty text; an unknown id renders the visible
//! "Note not found." message.

mod export;
mod markdown;
mod templates;

pub use export::{export_site, static_page_name, stylesheet_href, LIST_PAGE_FILE};
pub use markdown::{format_date, markdown_to_html};

use crate::config::NotesConfig;
use crate::notes::{Note, NoteCollection};
use askama::Template;
use templates::{
    DetailPageTemplate, ListPageTemplate, NoteCardTemplate, NoteDetailTemplate, NotesListTemplate,
};

const UNTITLED: &str = "Untitled";
const DEFAULT_PAGE_TITLE: &str = "Study Note";
const NOT_FOUND_HTML: &str = r#"<p class="text-red-600">Note not found.</p>"#;

/// How cards link to a note's detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLink {
    /// Client-rendered detail page: `<detail_page>?id=<id>`
    Query {
        list_page: String,
        detail_page: String,
    },
    /// Pre-rendered pages written side by side: `note-<id>.html`
    StaticFile,
}

impl DetailLink {
    pub fn href(&self, id: &str) -> String {
        match self {
            DetailLink::Query { detail_page, .. } => {
                format!("{}?id={}", detail_page, urlencoding::encode(id))
            }
            DetailLink::StaticFile => static_page_name(&urlencoding::encode(id)),
        }
    }

    pub fn list_href(&self) -> &str {
        match self {
            DetailLink::Query { list_page, .. } => list_page,
            DetailLink::StaticFile => LIST_PAGE_FILE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Suffix of detail page titles
    pub author: String,
    pub detail_link: DetailLink,
    pub stylesheet: String,
}

impl RenderOptions {
    pub fn from_config(config: &NotesConfig) -> Self {
        Self {
            author: config.author.clone(),
            detail_link: DetailLink::Query {
                list_page: config.list_page.clone(),
                detail_page: config.detail_page.clone(),
            },
            stylesheet: config.stylesheet.clone(),
        }
    }

    /// Options for pages written by the static export
    pub fn static_export(config: &NotesConfig) -> Self {
        Self {
            detail_link: DetailLink::StaticFile,
            stylesheet: stylesheet_href(config),
            ..Self::from_config(config)
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&NotesConfig::for_site(Default::default()))
    }
}

/// Everything the detail page shows for one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// `<title>` text: "<title or 'Study Note'> - <author>"
    pub page_title: String,
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub content_html: String,
    pub found: bool,
}

impl DetailView {
    pub fn from_note(note: &Note, options: &RenderOptions) -> Self {
        let metadata = &note.metadata;
        let page_title = if metadata.title.is_empty() {
            DEFAULT_PAGE_TITLE
        } else {
            metadata.title.as_str()
        };

        Self {
            page_title: format!("{} - {}", page_title, options.author),
            title: display_title(note).to_string(),
            date: format_date(&metadata.date),
            tags: metadata.tags.clone(),
            content_html: markdown_to_html(&note.body),
            found: true,
        }
    }

    pub fn not_found(options: &RenderOptions) -> Self {
        Self {
            page_title: format!("{} - {}", DEFAULT_PAGE_TITLE, options.author),
            title: String::new(),
            date: String::new(),
            tags: Vec::new(),
            content_html: NOT_FOUND_HTML.to_string(),
            found: false,
        }
    }
}

fn display_title(note: &Note) -> &str {
    if note.metadata.title.is_empty() {
        UNTITLED
    } else {
        &note.metadata.title
    }
}

/// Summary card for the list page. `index` staggers the entry animation.
pub fn render_card(note: &Note, index: usize, options: &RenderOptions) -> Result<String, String> {
    let href = options.detail_link.href(&note.id);
    let date = format_date(&note.metadata.date);
    let animation_delay = format!("{:.1}s", index as f64 * 0.1);

    NoteCardTemplate {
        href: &href,
        title: display_title(note),
        date: &date,
        summary: &note.metadata.summary,
        tags: &note.metadata.tags,
        animation_delay: &animation_delay,
    }
    .render()
    .map_err(|e| format!("Failed to render card for {}: {}", note.id, e))
}

/// Contents of `#notes-container`: one card per note in collection order,
/// or "No notes available." for an empty collection.
pub fn render_list(collection: &NoteCollection, options: &RenderOptions) -> Result<String, String> {
    let cards = collection
        .iter()
        .enumerate()
        .map(|(index, note)| render_card(note, index, options))
        .collect::<Result<Vec<_>, _>>()?;

    NotesListTemplate { cards }
        .render()
        .map_err(|e| format!("Failed to render notes list: {}", e))
}

/// Detail view for `id`; unknown ids give the not-found view.
pub fn detail_view(collection: &NoteCollection, id: &str, options: &RenderOptions) -> DetailView {
    match collection.get(id) {
        Some(note) => DetailView::from_note(note, options),
        None => {
            log::warn!("[NOTES] Note not found: {}", id);
            DetailView::not_found(options)
        }
    }
}

/// The `#note-title`, `#note-date`, `#note-tags` and `#note-content` regions
pub fn render_detail(view: &DetailView) -> Result<String, String> {
    NoteDetailTemplate { view }
        .render()
        .map_err(|e| format!("Failed to render note detail: {}", e))
}

/// Full list page
pub fn render_list_page(
    collection: &NoteCollection,
    options: &RenderOptions,
) -> Result<String, String> {
    let list_html = render_list(collection, options)?;
    let page_title = format!("Study Notes - {}", options.author);

    ListPageTemplate {
        page_title: &page_title,
        stylesheet: &options.stylesheet,
        list_html: &list_html,
    }
    .render()
    .map_err(|e| format!("Failed to render list page: {}", e))
}

/// Full detail page for `id` (the not-found page for unknown ids)
pub fn render_detail_page(
    collection: &NoteCollection,
    id: &str,
    options: &RenderOptions,
) -> Result<String, String> {
    let view = detail_view(collection, id, options);
    let detail_html = render_detail(&view)?;

    DetailPageTemplate {
        page_title: &view.page_title,
        stylesheet: &options.stylesheet,
        back_href: options.detail_link.list_href(),
        detail_html: &detail_html,
    }
    .render()
    .map_err(|e| format!("Failed to render detail page: {}", e))
}
