//! Study notes: markdown files with a `key: value` front-matter header
//!
//! Notes live in `notes/*.md`. `sync` turns the directory into the embedded
//! `notes-embedded.js` artifact; `embedded` reads that artifact back.

pub mod embedded;
pub mod file_ops;
pub mod frontmatter;
pub mod registry;
pub mod sync;
pub mod types;

pub use registry::NoteCollection;
pub use types::{Note, NoteMetadata};
