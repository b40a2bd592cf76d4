//! sync-notes: regenerate `notes-embedded.js` from the `notes/` directory.
//!
//! Run after adding or editing a note. Paths come from `STUDY_NOTES_*`
//! env vars (see `config.rs`); a `.env` file is honoured.

use dotenv::dotenv;
use study_notes::config::NotesConfig;
use study_notes::notes::sync::sync;

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = NotesConfig::from_env();
    log::info!(
        "Syncing notes from {} into {}",
        config.notes_dir.display(),
        config.output_file.display()
    );

    match sync(&config) {
        Ok(report) => {
            if report.note_ids.is_empty() {
                log::warn!("No notes found in {}", config.notes_dir.display());
            }
            if report.written {
                log::info!(
                    "Generated {} with {} notes",
                    report.output_file.display(),
                    report.note_ids.len()
                );
            } else {
                log::info!("{} is already up to date", report.output_file.display());
            }
        }
        Err(e) => {
            log::error!("Failed to sync notes: {}", e);
            std::process::exit(1);
        }
    }
}
