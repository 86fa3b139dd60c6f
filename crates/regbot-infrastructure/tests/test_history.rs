use async_trait::async_trait;
use regbot_core::{
    Category, ChatSession, MessageRole, RegbotError, Regulation, RegulationGateway, Result,
};
use regbot_infrastructure::JsonHistoryRepository;
use std::sync::Arc;
use tempfile::TempDir;

// Fixed catalog standing in for the remote backend
struct StaticGateway;

#[async_trait]
impl RegulationGateway for StaticGateway {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(vec![Category {
            id: "c1".to_string(),
            name: "HR".to_string(),
        }])
    }

    async fn list_regulations(&self, category_id: &str) -> Result<Vec<Regulation>> {
        if category_id != "c1" {
            return Ok(Vec::new());
        }
        Ok(vec![Regulation {
            id: "r1".to_string(),
            category_id: "c1".to_string(),
            title: "Leave Policy".to_string(),
            content: "Annual leave is 15 days.".to_string(),
        }])
    }

    async fn get_regulation(&self, id: &str) -> Result<Regulation> {
        if id != "r1" {
            return Err(RegbotError::not_found("Regulation", id));
        }
        Ok(Regulation {
            id: "r1".to_string(),
            category_id: "c1".to_string(),
            title: "Leave Policy".to_string(),
            content: "Annual leave is 15 days.".to_string(),
        })
    }
}

#[tokio::test]
async fn test_conversation_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    // First run: select a category and look up a regulation
    {
        let repository = JsonHistoryRepository::new(temp_dir.path()).expect("Should create repository");
        let session = ChatSession::open(Arc::new(StaticGateway), Arc::new(repository)).await;
        let categories = session.load_categories().await;
        session.select_category(&categories[0]).await;
        session.submit_input("leave").await;

        assert_eq!(session.messages().await.len(), 3);
    }

    // Second run: the transcript comes back from disk
    let repository = JsonHistoryRepository::new(temp_dir.path()).expect("Should create repository");
    let session = ChatSession::open(Arc::new(StaticGateway), Arc::new(repository)).await;

    let messages = session.messages().await;
    assert_eq!(messages.len(), 3, "Should restore the full transcript");
    assert_eq!(messages[0].role, MessageRole::Bot);
    assert!(messages[0].content.contains("Leave Policy"));
    assert_eq!(messages[1].content, "leave");
    assert_eq!(messages[2].content, "Annual leave is 15 days.");
}

#[tokio::test]
async fn test_restart_does_not_restore_selection() {
    let temp_dir = TempDir::new().unwrap();

    {
        let repository = JsonHistoryRepository::new(temp_dir.path()).expect("Should create repository");
        let session = ChatSession::open(Arc::new(StaticGateway), Arc::new(repository)).await;
        let categories = session.load_categories().await;
        session.select_category(&categories[0]).await;
    }

    // Only the transcript is persisted; the category must be picked again
    let repository = JsonHistoryRepository::new(temp_dir.path()).expect("Should create repository");
    let session = ChatSession::open(Arc::new(StaticGateway), Arc::new(repository)).await;

    assert_eq!(session.selected_category().await, None);

    session.submit_input("leave").await;
    let messages = session.messages().await;
    assert_eq!(
        messages.last().unwrap().content,
        regbot_core::chat::reply::SELECT_CATEGORY_REPLY
    );
}

#[tokio::test]
async fn test_transcript_file_is_valid_json() {
    let temp_dir = TempDir::new().unwrap();
    let repository = JsonHistoryRepository::new(temp_dir.path()).expect("Should create repository");
    let history_path = repository.history_file_path();
    let session = ChatSession::open(Arc::new(StaticGateway), Arc::new(repository)).await;

    session.submit_input("hello").await;

    let raw = std::fs::read_to_string(history_path).expect("Should read transcript file");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("Transcript should be JSON");
    let entries = parsed.as_array().expect("Transcript should be an array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["role"], "user");
    assert_eq!(entries[1]["role"], "bot");
}
