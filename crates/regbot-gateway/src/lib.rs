//! Regbot Gateway - Supabase-backed regulation catalog access
//!
//! Implements the `RegulationGateway` trait from `regbot-core` against the
//! Supabase REST endpoint, and loads the credentials it needs from
//! `~/.config/regbot/secret.json` or the environment.

pub mod config;
mod supabase;

pub use config::{SecretConfig, SupabaseConfig, load_secret_config};
pub use supabase::SupabaseGateway;
