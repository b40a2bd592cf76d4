use askama::Template;

use super::DetailView;

#[derive(Template)]
#[template(path = "note_card.html")]
pub(crate) struct NoteCardTemplate<'a> {
    pub href: &'a str,
    pub title: &'a str,
    pub date: &'a str,
    pub summary: &'a str,
    pub tags: &'a [String],
    pub animation_delay: &'a str,
}

#[derive(Template)]
#[template(path = "notes_list.html")]
pub(crate) struct NotesListTemplate {
    pub cards: Vec<String>,
}

#[derive(Template)]
#[template(path = "note_detail.html")]
pub(crate) struct NoteDetailTemplate<'a> {
    pub view: &'a DetailView,
}

#[derive(Template)]
#[template(path = "list_page.html")]
pub(crate) struct ListPageTemplate<'a> {
    pub page_title: &'a str,
    pub stylesheet: &'a str,
    pub list_html: &'a str,
}

#[derive(Template)]
#[template(path = "detail_page.html")]
pub(crate) struct DetailPageTemplate<'a> {
    pub page_title: &'a str,
    pub stylesheet: &'a str,
    pub back_href: &'a str,
    pub detail_html: &'a str,
}
