//! Typed HTTP source for `notes/<id>.md` on the published site.

use super::NoteSource;
use crate::notes::Note;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct RemoteSource {
    base_url: String,
    ids: Vec<String>,
    client: Client,
}

impl RemoteSource {
    /// `ids` is the declared note list; the site has no index endpoint to ask.
    pub fn new(base_url: &str, ids: Vec<String>, timeout: Duration) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ids,
            client,
        })
    }

    pub fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}.md", self.base_url, urlencoding::encode(id))
    }
}

#[async_trait]
impl NoteSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    fn note_ids(&self) -> Vec<String> {
        self.ids.clone()
    }

    async fn fetch_note(&self, id: &str) -> Result<Note, String> {
        let url = self.note_url(id);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;

        if !resp.status().is_success() {
            return Err(format!("Failed to fetch {}: HTTP {}", url, resp.status()));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| format!("Failed to read {}: {}", url, e))?;

        log::debug!("[SOURCES] Fetched {} ({} bytes)", url, text.len());
        Ok(Note::parse(id, &text))
    }
}
