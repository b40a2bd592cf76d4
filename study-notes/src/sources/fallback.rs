use super::NoteSource;
use crate::notes::Note;
use async_trait::async_trait;

/// Tries `primary` for each note and uses `fallback` when it fails.
pub struct FallbackSource {
    primary: Box<dyn NoteSource>,
    fallback: Box<dyn NoteSource>,
    name: String,
}

impl FallbackSource {
    pub fn new(primary: Box<dyn NoteSource>, fallback: Box<dyn NoteSource>) -> Self {
        let name = format!("{}+{}", primary.name(), fallback.name());
        Self {
            primary,
            fallback,
            name,
        }
    }
}

#[async_trait]
impl NoteSource for FallbackSource {
    fn name(&self) -> &str {
        &self.name
    }

    /// Primary ids first, then any ids only the fallback knows about
    fn note_ids(&self) -> Vec<String> {
        let mut ids = self.primary.note_ids();
        for id in self.fallback.note_ids() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    async fn fetch_note(&self, id: &str) -> Result<Note, String> {
        match self.primary.fetch_note(id).await {
            Ok(note) => Ok(note),
            Err(e) => {
                log::warn!(
                    "[SOURCES] {} failed for '{}', using {}: {}",
                    self.primary.name(),
                    id,
                    self.fallback.name(),
                    e
                );
                self.fallback.fetch_note(id).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::test_support::StubSource;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_falls_back_per_note() {
        let primary = StubSource::new("remote", vec!["a", "b"], vec!["b"]);
        let fallback = StubSource::new("embedded", vec!["a", "b", "c"], vec![]);
        let source = FallbackSource::new(Box::new(primary), Box::new(fallback));

        assert_eq!(source.name(), "remote+embedded");
        assert_eq!(source.note_ids(), vec!["a", "b", "c"]);

        let collection = source.load_all().await;
        assert_eq!(collection.ids(), vec!["a", "b", "c"]);
        assert_eq!(collection.get("a").unwrap().metadata.title, "a from remote");
        assert_eq!(collection.get("b").unwrap().metadata.title, "b from embedded");
        assert_eq!(collection.get("c").unwrap().metadata.title, "c from embedded");
    }

    #[tokio::test]
    async fn test_both_failing_is_an_error() {
        let primary = StubSource::new("remote", vec!["a"], vec!["a"]);
        let fallback = StubSource::new("embedded", vec![], vec![]);
        let source = FallbackSource::new(Box::new(primary), Box::new(fallback));

        let err = source.fetch_note("a").await.unwrap_err();
        assert!(err.contains("embedded cannot load a"));
        assert!(source.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_fallback_untouched_when_primary_succeeds() {
        let primary = StubSource::new("remote", vec!["a"], vec![]);
        let fallback = Arc::new(StubSource::new("embedded", vec!["a"], vec![]));
        let source = FallbackSource::new(Box::new(primary), Box::new(SharedStub(fallback.clone())));

        source.fetch_note("a").await.unwrap();
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    /// Lets a test keep a handle on a stub after boxing it
    struct SharedStub(Arc<StubSource>);

    #[async_trait]
    impl NoteSource for SharedStub {
        fn name(&self) -> &str {
            self.0.name()
        }

        fn note_ids(&self) -> Vec<String> {
            self.0.note_ids()
        }

        async fn fetch_note(&self, id: &str) -> Result<Note, String> {
            self.0.fetch_note(id).await
        }
    }
}
