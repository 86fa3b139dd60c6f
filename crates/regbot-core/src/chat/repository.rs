//! History repository trait.
//!
//! Defines the interface for chat transcript persistence.

use super::message::ChatMessage;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for the persisted chat transcript.
///
/// The transcript is stored as one unit: `load` reads the whole message
/// sequence at startup and `save` overwrites it after every change. There
/// is no deletion or expiry API; the transcript grows for the life of the
/// storage.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Loads the persisted transcript.
    ///
    /// Fails soft: a missing, unreadable, or unparsable record is treated
    /// as an empty history and never surfaces as an error.
    async fn load(&self) -> Vec<ChatMessage>;

    /// Overwrites the persisted transcript with `messages`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Transcript persisted
    /// - `Err(_)`: Error occurred during the write
    async fn save(&self, messages: &[ChatMessage]) -> Result<()>;
}
