//! Catalog gateway trait.
//!
//! Defines the read interface to the remote catalog store.

use super::model::{Category, Regulation};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract read-only gateway to the hosted regulation catalog.
///
/// This trait decouples the conversation logic from the concrete backend
/// (Supabase/PostgREST in production) so tests can substitute a fake
/// gateway. All three operations are reads; the catalog is never written
/// from this side.
#[async_trait]
pub trait RegulationGateway: Send + Sync {
    /// Lists all categories, sorted by name ascending.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Category>)`: The full category list
    /// - `Err(_)`: Transport or backend failure
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Lists the regulations of one category, sorted by title ascending.
    ///
    /// # Arguments
    ///
    /// * `category_id` - The id of the category to list
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Regulation>)`: The regulations of that category
    /// - `Err(_)`: Transport or backend failure
    async fn list_regulations(&self, category_id: &str) -> Result<Vec<Regulation>>;

    /// Fetches a single regulation by id.
    ///
    /// # Arguments
    ///
    /// * `id` - The id of the regulation to fetch
    ///
    /// # Returns
    ///
    /// - `Ok(Regulation)`: The regulation with that id
    /// - `Err(RegbotError::NotFound)`: No regulation with that id exists
    /// - `Err(_)`: Transport or backend failure
    async fn get_regulation(&self, id: &str) -> Result<Regulation>;
}
