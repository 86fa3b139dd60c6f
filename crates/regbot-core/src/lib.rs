//! Regbot Core - domain model for the regulation lookup chat
//!
//! This crate holds everything that does not touch the network or the
//! filesystem: the regulation catalog types, the gateway and history
//! repository traits, the chat message model, and the session controller
//! that implements the conversation rules.
//!
//! # Architecture
//!
//! - `catalog`: Categories, regulations, and the [`RegulationGateway`] trait
//! - `chat`: Messages, canned replies, [`HistoryRepository`], [`ChatSession`]
//! - `error`: [`RegbotError`] and the crate-wide [`Result`] alias
//!
//! Concrete gateway and repository implementations live in the
//! `regbot-gateway` and `regbot-infrastructure` crates and are injected
//! into [`ChatSession`] as trait objects.

pub mod catalog;
pub mod chat;
pub mod error;

pub use catalog::{Category, Regulation, RegulationGateway};
pub use chat::{ChatMessage, ChatSession, HistoryRepository, MessageRole};
pub use error::{RegbotError, Result};
