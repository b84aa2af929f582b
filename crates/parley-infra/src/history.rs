//! JSON-file transcript store.
//!
//! The transcript is a single JSON array of `{role, content}` records,
//! rewritten in full on every save. `load` never fails the caller: a
//! missing file starts a fresh conversation and a corrupt file is logged
//! and discarded.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use parley_core::history::HistoryStore;
use parley_types::error::HistoryError;
use parley_types::transcript::Transcript;

/// File-backed [`HistoryStore`].
///
/// The path comes from configuration and is fixed for the lifetime of the
/// store. Saves overwrite the file directly (no temp-file rename), so a
/// crash mid-write can leave a torn file; `load` treats that as corruption
/// and resets to an empty transcript.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileHistoryStore {
    async fn load(&self) -> Transcript {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("no history file at {}, starting fresh", self.path.display());
                return Transcript::new();
            }
            Err(err) => {
                warn!("failed to read {}: {err}, starting fresh", self.path.display());
                return Transcript::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(transcript) => transcript,
            Err(err) => {
                warn!(
                    "corrupted history file {}: {err}, starting fresh",
                    self.path.display()
                );
                Transcript::new()
            }
        }
    }

    async fn save(&self, transcript: &Transcript) -> Result<(), HistoryError> {
        let json = serde_json::to_string(transcript)
            .map_err(|err| HistoryError::Serialize(err.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|err| HistoryError::Io(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_types::transcript::{Turn, TurnRole};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileHistoryStore {
        JsonFileHistoryStore::new(dir.path().join("history.json"))
    }

    #[tokio::test]
    async fn load_missing_file_returns_empty_transcript() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let transcript = store.load().await;
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn load_corrupt_file_returns_empty_transcript() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        tokio::fs::write(store.path(), "{not valid json]]")
            .await
            .unwrap();

        let transcript = store.load().await;
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn load_wrong_shape_returns_empty_transcript() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        // Valid JSON, but not a sequence of turns.
        tokio::fs::write(store.path(), r#"{"role":"user"}"#)
            .await
            .unwrap();

        let transcript = store.load().await;
        assert!(transcript.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let mut transcript = Transcript::new();
        transcript.push(Turn::user("hello"));
        transcript.push(Turn::assistant("hi there"));
        store.save(&transcript).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded, transcript);
        assert_eq!(loaded.turns()[1].role, TurnRole::Assistant);
    }

    #[tokio::test]
    async fn save_overwrites_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let mut first = Transcript::new();
        first.push(Turn::user("one"));
        store.save(&first).await.unwrap();

        let mut second = Transcript::new();
        second.push(Turn::user("one"));
        second.push(Turn::assistant("two"));
        second.push(Turn::user("three"));
        store.save(&second).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded.last().unwrap().content, "three");
    }

    #[tokio::test]
    async fn persisted_format_is_a_plain_record_array() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);

        let mut transcript = Transcript::new();
        transcript.push(Turn::user("hi"));
        store.save(&transcript).await.unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert_eq!(raw, r#"[{"role":"user","content":"hi"}]"#);
    }

    #[tokio::test]
    async fn save_to_missing_directory_reports_io_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileHistoryStore::new(tmp.path().join("no-such-dir").join("history.json"));

        let err = store.save(&Transcript::new()).await.unwrap_err();
        assert!(matches!(err, HistoryError::Io(_)));
    }
}
