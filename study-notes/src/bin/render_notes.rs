//! render-notes: write the list page and one detail page per note as static HTML.
//!
//! Notes come from `notes-embedded.js`. When `STUDY_NOTES_BASE_URL` is set the
//! published `notes/<id>.md` files are fetched first and the embedded copy is
//! used for any note that cannot be fetched.

use dotenv::dotenv;
use study_notes::config::NotesConfig;
use study_notes::render::{export_site, RenderOptions};
use study_notes::sources::{EmbeddedSource, FallbackSource, NoteSource, RemoteSource};

fn build_source(config: &NotesConfig) -> Result<Box<dyn NoteSource>, String> {
    let embedded = EmbeddedSource::from_artifact_file(&config.output_file)?;

    match &config.base_url {
        Some(base_url) => {
            log::info!("Fetching notes from {} (embedded fallback)", base_url);
            let remote = RemoteSource::new(base_url, embedded.note_ids(), config.fetch_timeout)?;
            Ok(Box::new(FallbackSource::new(
                Box::new(remote),
                Box::new(embedded),
            )))
        }
        None => Ok(Box::new(embedded)),
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NotesConfig::from_env();

    let source = match build_source(&config) {
        Ok(source) => source,
        Err(e) => {
            log::error!("Failed to load notes: {}", e);
            log::error!("Run `sync-notes` first to generate the embedded artifact");
            std::process::exit(1);
        }
    };

    let collection = source.load_all().await;
    let options = RenderOptions::static_export(&config);

    match export_site(&collection, &options, &config.export_dir) {
        Ok(pages) => log::info!(
            "Exported {} pages to {}",
            pages.len(),
            config.export_dir.display()
        ),
        Err(e) => {
            log::error!("Failed to export notes: {}", e);
            std::process::exit(1);
        }
    }
}
