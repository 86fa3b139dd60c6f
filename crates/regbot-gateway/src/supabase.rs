//! SupabaseGateway - PostgREST implementation of the regulation catalog.
//!
//! This gateway calls the Supabase REST endpoint (`/rest/v1`) directly.
//! Configuration priority: ~/.config/regbot/secret.json > environment variables

use async_trait::async_trait;
use regbot_core::{Category, RegbotError, Regulation, RegulationGateway, Result};
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;

use crate::config;

/// Accept header that asks PostgREST for exactly one JSON object.
const PGRST_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Gateway implementation that talks to a Supabase project over HTTP.
#[derive(Clone)]
pub struct SupabaseGateway {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseGateway {
    /// Creates a new gateway for the given project URL and anon key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Loads configuration from ~/.config/regbot/secret.json or environment variables.
    ///
    /// Priority:
    /// 1. ~/.config/regbot/secret.json (`supabase` section)
    /// 2. Environment variables (SUPABASE_URL, SUPABASE_ANON_KEY)
    pub fn try_from_env() -> Result<Self> {
        // Try loading from secret.json first
        if let Ok(secret_config) = config::load_secret_config() {
            if let Some(supabase) = secret_config.supabase {
                return Ok(Self::new(supabase.url, supabase.anon_key));
            }
        }

        // Fallback to environment variables
        let url = env::var("SUPABASE_URL").map_err(|_| {
            RegbotError::config(
                "SUPABASE_URL not found in ~/.config/regbot/secret.json or environment variables",
            )
        })?;
        let anon_key = env::var("SUPABASE_ANON_KEY").map_err(|_| {
            RegbotError::config(
                "SUPABASE_ANON_KEY not found in ~/.config/regbot/secret.json or environment variables",
            )
        })?;

        Ok(Self::new(url, anon_key))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Sends a GET to a table endpoint and deserializes the JSON body.
    ///
    /// With `accept` set to [`PGRST_OBJECT`] the endpoint returns a single
    /// object instead of an array, answering 406 when no row matches.
    async fn get_json<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
        accept: Option<&'static str>,
    ) -> Result<T> {
        let mut request = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .query(query);
        if let Some(accept) = accept {
            request = request.header(header::ACCEPT, accept);
        }

        let response = request
            .send()
            .await
            .map_err(|err| RegbotError::gateway(format!("Supabase request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Supabase error body".to_string());
            return Err(map_http_error(status, body));
        }

        response
            .json()
            .await
            .map_err(|err| RegbotError::gateway(format!("Failed to parse Supabase response: {err}")))
    }
}

#[async_trait]
impl RegulationGateway for SupabaseGateway {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let query = [("select", "*"), ("order", "name.asc")];
        let rows: Vec<CategoryRow> = self.get_json("categories", &query, None).await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn list_regulations(&self, category_id: &str) -> Result<Vec<Regulation>> {
        let category_filter = format!("eq.{category_id}");
        let query = [
            ("select", "*"),
            ("category_id", category_filter.as_str()),
            ("order", "title.asc"),
        ];
        let rows: Vec<RegulationRow> = self.get_json("regulations", &query, None).await?;
        Ok(rows.into_iter().map(Regulation::from).collect())
    }

    async fn get_regulation(&self, id: &str) -> Result<Regulation> {
        let id_filter = format!("eq.{id}");
        let query = [("select", "*"), ("id", id_filter.as_str())];
        let result: Result<RegulationRow> =
            self.get_json("regulations", &query, Some(PGRST_OBJECT)).await;

        match result {
            Ok(row) => Ok(row.into()),
            // PostgREST rejects the single-object Accept header with 406
            // when the filter matches no row.
            Err(RegbotError::Gateway {
                status: Some(406), ..
            }) => Err(RegbotError::not_found("Regulation", id)),
            Err(err) => Err(err),
        }
    }
}

/// Wire row of the `categories` table.
#[derive(Debug, Clone, Deserialize)]
struct CategoryRow {
    id: String,
    name: String,
    #[allow(dead_code)]
    created_at: String,
    #[allow(dead_code)]
    updated_at: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
        }
    }
}

/// Wire row of the `regulations` table.
#[derive(Debug, Clone, Deserialize)]
struct RegulationRow {
    id: String,
    category_id: String,
    title: String,
    content: String,
    #[allow(dead_code)]
    created_at: String,
    #[allow(dead_code)]
    updated_at: String,
}

impl From<RegulationRow> for Regulation {
    fn from(row: RegulationRow) -> Self {
        Regulation {
            id: row.id,
            category_id: row.category_id,
            title: row.title,
            content: row.content,
        }
    }
}

#[derive(Deserialize)]
struct PostgrestErrorBody {
    message: String,
}

fn map_http_error(status: StatusCode, body: String) -> RegbotError {
    let message = serde_json::from_str::<PostgrestErrorBody>(&body)
        .map(|wrapper| wrapper.message)
        .unwrap_or_else(|_| body.clone());

    RegbotError::gateway_http(status.as_u16(), message)
}
