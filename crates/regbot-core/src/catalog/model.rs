//! Catalog domain models.
//!
//! Categories and the regulations grouped under them, as served by the
//! remote catalog store. Both are immutable from the client's perspective.

use serde::{Deserialize, Serialize};

/// A named grouping of regulations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (opaque string)
    pub id: String,
    /// Display name
    pub name: String,
}

/// A titled text document belonging to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regulation {
    /// Unique identifier (opaque string)
    pub id: String,
    /// Identifier of the category this regulation belongs to
    pub category_id: String,
    /// Title shown in listings and matched against user input
    pub title: String,
    /// Full regulation text
    pub content: String,
}

impl Regulation {
    /// Returns true when the title contains `input`, compared
    /// case-insensitively.
    ///
    /// Containment only: no trimming or normalization beyond the case fold,
    /// and the content is never searched.
    pub fn title_contains(&self, input: &str) -> bool {
        self.title.to_lowercase().contains(&input.to_lowercase())
    }
}
