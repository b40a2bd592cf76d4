use std::time::Duration;
use study_notes::notes::{Note, NoteCollection, NoteMetadata};
use study_notes::sources::{EmbeddedSource, FallbackSource, NoteSource, RemoteSource};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const REACT_HOOKS_MD: &str =
    "---\ntitle: React Hooks (live)\ndate: 2024-01-05\ntags: React, JavaScript\n---\nFresh body\n";

fn embedded() -> EmbeddedSource {
    let note = |id: &str, title: &str| {
        let metadata = NoteMetadata {
            title: title.to_string(),
            ..Default::default()
        };
        Note::new(id, metadata, format!("embedded {}", id))
    };

    EmbeddedSource::new(
        NoteCollection::from_notes(vec![
            note("react-hooks", "React Hooks"),
            note("modern-css", "Modern CSS"),
            note("database-design", "Database Design"),
        ])
        .unwrap(),
    )
}

async fn remote(server: &MockServer, ids: Vec<String>) -> RemoteSource {
    RemoteSource::new(&server.uri(), ids, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn remote_note_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/react-hooks.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REACT_HOOKS_MD))
        .mount(&server)
        .await;

    let source = remote(&server, vec!["react-hooks".to_string()]).await;
    let note = source.fetch_note("react-hooks").await.unwrap();

    assert_eq!(note.id, "react-hooks");
    assert_eq!(note.metadata.title, "React Hooks (live)");
    assert_eq!(note.metadata.tags, vec!["React", "JavaScript"]);
    assert_eq!(note.body, "Fresh body\n");
}

#[tokio::test]
async fn error_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/modern-css.md"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = remote(&server, vec!["modern-css".to_string()]).await;
    let err = source.fetch_note("modern-css").await.unwrap_err();
    assert!(err.contains("HTTP 500"), "unexpected error: {}", err);

    // Unmatched paths get wiremock's default 404
    assert!(source.fetch_note("missing").await.is_err());
}

#[tokio::test]
async fn failed_fetches_fall_back_to_embedded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes/react-hooks.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REACT_HOOKS_MD))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notes/modern-css.md"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    // database-design is not mounted: 404

    let embedded = embedded();
    let remote = remote(&server, embedded.note_ids()).await;
    let source = FallbackSource::new(Box::new(remote), Box::new(embedded));

    let collection = source.load_all().await;
    assert_eq!(
        collection.ids(),
        vec!["react-hooks", "modern-css", "database-design"]
    );
    assert_eq!(
        collection.get("react-hooks").unwrap().metadata.title,
        "React Hooks (live)"
    );
    assert_eq!(collection.get("modern-css").unwrap().body, "embedded modern-css");
    assert_eq!(
        collection.get("database-design").unwrap().metadata.title,
        "Database Design"
    );
}

#[tokio::test]
async fn unreachable_server_falls_back_to_embedded() {
    let server = MockServer::start().await;
    let base = server.uri();
    drop(server);

    let embedded = embedded();
    let remote = RemoteSource::new(&base, embedded.note_ids(), Duration::from_secs(2)).unwrap();
    let source = FallbackSource::new(Box::new(remote), Box::new(embedded));

    let collection = source.load_all().await;
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.get("react-hooks").unwrap().body, "embedded react-hooks");
}
