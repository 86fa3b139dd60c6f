//! JSON-based HistoryRepository implementation

use crate::paths::RegbotPaths;
use async_trait::async_trait;
use regbot_core::{ChatMessage, HistoryRepository, RegbotError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A repository implementation that stores the chat transcript as one JSON
/// file.
///
/// The transcript is written whole on every save and read whole on load,
/// matching the session controller's full-read/full-write contract. Loading
/// never fails: a missing or damaged file yields an empty transcript so a
/// broken history cannot keep the chat from starting.
pub struct JsonHistoryRepository {
    base_dir: PathBuf,
}

impl JsonHistoryRepository {
    /// Creates a new `JsonHistoryRepository` rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist. The transcript lives at
    /// `base_dir/history.json`.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - The base directory for storing the transcript
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;

        Ok(Self { base_dir })
    }

    /// Creates a `JsonHistoryRepository` at the default data directory
    /// (~/.local/share/regbot).
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or
    /// created.
    pub fn default_location() -> Result<Self> {
        let base_dir = RegbotPaths::data_dir().map_err(|e| RegbotError::config(e.to_string()))?;
        Self::new(base_dir)
    }

    /// Returns the path of the transcript file.
    pub fn history_file_path(&self) -> PathBuf {
        self.base_dir.join("history.json")
    }
}

#[async_trait]
impl HistoryRepository for JsonHistoryRepository {
    async fn load(&self) -> Vec<ChatMessage> {
        let path = self.history_file_path();

        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read chat history");
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "discarding unparsable chat history");
                Vec::new()
            }
        }
    }

    async fn save(&self, messages: &[ChatMessage]) -> Result<()> {
        let json = serde_json::to_string_pretty(messages)?;
        fs::write(self.history_file_path(), json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regbot_core::MessageRole;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonHistoryRepository::new(temp_dir.path()).unwrap();

        let messages = vec![
            ChatMessage::user("leave"),
            ChatMessage::bot("Annual leave is 15 days."),
        ];
        repository.save(&messages).await.unwrap();

        let loaded = repository.load().await;

        assert_eq!(loaded, messages);
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonHistoryRepository::new(temp_dir.path()).unwrap();

        assert!(repository.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonHistoryRepository::new(temp_dir.path()).unwrap();
        fs::write(repository.history_file_path(), "{ not json").unwrap();

        assert!(repository.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_transcript() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonHistoryRepository::new(temp_dir.path()).unwrap();

        repository.save(&[ChatMessage::user("first")]).await.unwrap();
        let replacement = vec![ChatMessage::user("first"), ChatMessage::bot("second")];
        repository.save(&replacement).await.unwrap();

        let loaded = repository.load().await;

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].content, "second");
        assert_eq!(loaded[1].role, MessageRole::Bot);
    }

    #[tokio::test]
    async fn test_messages_keep_role_and_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let repository = JsonHistoryRepository::new(temp_dir.path()).unwrap();

        let message = ChatMessage::user("hello");
        repository.save(std::slice::from_ref(&message)).await.unwrap();

        let loaded = repository.load().await;

        assert_eq!(loaded[0].id, message.id);
        assert_eq!(loaded[0].role, MessageRole::User);
        assert_eq!(loaded[0].timestamp, message.timestamp);
    }
}
