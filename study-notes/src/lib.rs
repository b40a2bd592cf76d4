//! Study notes for the portfolio site: front-matter parsing, the embedded
//! notes artifact, HTML rendering and the note sources the pages load from.

pub mod config;
pub mod notes;
pub mod render;
pub mod sources;
