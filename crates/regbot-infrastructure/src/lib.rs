pub mod json_history_repository;
pub mod paths;

pub use crate::json_history_repository::JsonHistoryRepository;
pub use crate::paths::RegbotPaths;
