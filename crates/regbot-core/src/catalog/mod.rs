//! Catalog domain module.
//!
//! The remotely hosted regulation catalog: category and regulation models
//! plus the gateway trait used to read them.

mod gateway;
mod model;

pub use gateway::RegulationGateway;
pub use model::{Category, Regulation};
