use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Site root holding `notes/`, the generated artifact and the export dir.
    pub const SITE_DIR: &str = "STUDY_NOTES_SITE_DIR";
    pub const NOTES_DIR: &str = "STUDY_NOTES_DIR";
    pub const OUTPUT_FILE: &str = "STUDY_NOTES_OUTPUT";
    pub const EXPORT_DIR: &str = "STUDY_NOTES_EXPORT_DIR";
    /// Where the published site serves `notes/<id>.md` from (e.g. "https://example.com").
    /// Unset means the embedded artifact is the only note source.
    pub const BASE_URL: &str = "STUDY_NOTES_BASE_URL";
    pub const AUTHOR: &str = "STUDY_NOTES_AUTHOR";
    pub const LIST_PAGE: &str = "STUDY_NOTES_LIST_PAGE";
    pub const DETAIL_PAGE: &str = "STUDY_NOTES_DETAIL_PAGE";
    pub const STYLESHEET: &str = "STUDY_NOTES_STYLESHEET";
    pub const FETCH_TIMEOUT_SECS: &str = "STUDY_NOTES_FETCH_TIMEOUT_SECS";
}

/// Default values
pub mod defaults {
    pub const NOTES_DIR: &str = "notes";
    pub const OUTPUT_FILE: &str = "notes-embedded.js";
    pub const EXPORT_DIR: &str = "study";
    pub const AUTHOR: &str = "Enoch Lee";
    pub const LIST_PAGE: &str = "study.html";
    pub const DETAIL_PAGE: &str = "study-detail.html";
    pub const STYLESHEET: &str = "styles.css";
    pub const FETCH_TIMEOUT_SECS: u64 = 10;
}

/// Returns the absolute path to the study-notes crate directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it resolves the same way
/// regardless of the working directory at runtime.
pub fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Returns the repo root (parent of study-notes/), which is also the site root.
pub fn repo_root() -> PathBuf {
    let dir = crate_dir();
    dir.parent().map(|p| p.to_path_buf()).unwrap_or(dir)
}

#[derive(Clone, Debug)]
pub struct NotesConfig {
    pub site_dir: PathBuf,
    /// Directory of `*.md` note sources
    pub notes_dir: PathBuf,
    /// Generated `notes-embedded.js`
    pub output_file: PathBuf,
    /// Where `render-notes` writes static pages
    pub export_dir: PathBuf,
    pub base_url: Option<String>,
    /// Suffix of every detail page title ("<title> - <author>")
    pub author: String,
    pub list_page: String,
    pub detail_page: String,
    /// Stylesheet href used by rendered pages, relative to the site root
    pub stylesheet: String,
    pub fetch_timeout: Duration,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self::for_site(repo_root())
    }
}

impl NotesConfig {
    /// Default layout rooted at `site_dir`.
    pub fn for_site(site_dir: PathBuf) -> Self {
        Self {
            notes_dir: site_dir.join(defaults::NOTES_DIR),
            output_file: site_dir.join(defaults::OUTPUT_FILE),
            export_dir: site_dir.join(defaults::EXPORT_DIR),
            base_url: None,
            author: defaults::AUTHOR.to_string(),
            list_page: defaults::LIST_PAGE.to_string(),
            detail_page: defaults::DETAIL_PAGE.to_string(),
            stylesheet: defaults::STYLESHEET.to_string(),
            fetch_timeout: Duration::from_secs(defaults::FETCH_TIMEOUT_SECS),
            site_dir,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let site_dir = get(env_vars::SITE_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(repo_root);
        let mut config = Self::for_site(site_dir);

        if let Some(dir) = get(env_vars::NOTES_DIR) {
            config.notes_dir = PathBuf::from(dir);
        }
        if let Some(file) = get(env_vars::OUTPUT_FILE) {
            config.output_file = PathBuf::from(file);
        }
        if let Some(dir) = get(env_vars::EXPORT_DIR) {
            config.export_dir = PathBuf::from(dir);
        }
        config.base_url = get(env_vars::BASE_URL).map(|url| url.trim_end_matches('/').to_string());
        if let Some(author) = get(env_vars::AUTHOR) {
            config.author = author;
        }
        if let Some(page) = get(env_vars::LIST_PAGE) {
            config.list_page = page;
        }
        if let Some(page) = get(env_vars::DETAIL_PAGE) {
            config.detail_page = page;
        }
        if let Some(href) = get(env_vars::STYLESHEET) {
            config.stylesheet = href;
        }
        if let Some(raw) = get(env_vars::FETCH_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) => config.fetch_timeout = Duration::from_secs(secs),
                Err(e) => log::warn!(
                    "Ignoring invalid {}={:?}: {}",
                    env_vars::FETCH_TIMEOUT_SECS,
                    raw,
                    e
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_follow_site_dir() {
        let config = NotesConfig::from_lookup(lookup(&[(env_vars::SITE_DIR, "/srv/site")]));
        assert_eq!(config.notes_dir, PathBuf::from("/srv/site/notes"));
        assert_eq!(config.output_file, PathBuf::from("/srv/site/notes-embedded.js"));
        assert_eq!(config.export_dir, PathBuf::from("/srv/site/study"));
        assert_eq!(config.author, "Enoch Lee");
        assert_eq!(config.detail_page, "study-detail.html");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = NotesConfig::from_lookup(lookup(&[
            (env_vars::NOTES_DIR, "/tmp/n"),
            (env_vars::BASE_URL, "https://example.com/"),
            (env_vars::AUTHOR, "Someone"),
            (env_vars::FETCH_TIMEOUT_SECS, "3"),
        ]));
        assert_eq!(config.notes_dir, PathBuf::from("/tmp/n"));
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.author, "Someone");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_blank_and_invalid_values_keep_defaults() {
        let config = NotesConfig::from_lookup(lookup(&[
            (env_vars::BASE_URL, "   "),
            (env_vars::FETCH_TIMEOUT_SECS, "soon"),
        ]));
        assert!(config.base_url.is_none());
        assert_eq!(
            config.fetch_timeout,
            Duration::from_secs(defaults::FETCH_TIMEOUT_SECS)
        );
    }
}
