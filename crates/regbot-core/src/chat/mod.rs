//! Chat domain: messages, transcript persistence, and the session
//! controller that ties them to the regulation catalog.

mod message;
pub mod reply;
mod repository;
mod session;

pub use message::{ChatMessage, MessageRole};
pub use repository::HistoryRepository;
pub use session::ChatSession;
