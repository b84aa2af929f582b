//! HistoryStore trait definition.
//!
//! The transcript is persisted in full after every appended turn; there is
//! no incremental append format. Implementations live in `parley-infra`.

use parley_types::error::HistoryError;
use parley_types::transcript::Transcript;

/// Store for the single persisted conversation transcript.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// `parley-infra` (e.g. `JsonFileHistoryStore`).
pub trait HistoryStore: Send + Sync {
    /// Load the persisted transcript.
    ///
    /// Never fails the caller: a missing file yields an empty transcript,
    /// and unreadable or structurally invalid content yields an empty
    /// transcript after emitting a diagnostic.
    fn load(&self) -> impl std::future::Future<Output = Transcript> + Send;

    /// Serialize the full transcript and overwrite the storage location.
    ///
    /// Every save is a complete rewrite, O(transcript) per appended turn;
    /// a known scaling limit for long-running conversations. The overwrite
    /// is not crash-atomic -- a crash mid-write may corrupt the file, which
    /// `load` tolerates.
    fn save(
        &self,
        transcript: &Transcript,
    ) -> impl std::future::Future<Output = Result<(), HistoryError>> + Send;
}
