//! PostgREST client for a hosted Supabase `meetings` table.
//!
//! Rows are addressed through `{project}/rest/v1/{table}` with the project API
//! key sent both as `apikey` and as a bearer token. Writes ask for
//! `return=representation` so the affected rows come back in the response;
//! an empty representation means no row matched the id filter.

use std::time::Duration;

use meetings::{Meeting, MeetingInsert, MeetingPatch, MeetingStatus};
use reqwest::{Method, RequestBuilder};
use tracing::warn;

use super::{MeetingStore, StoreError};
use crate::config::SupabaseConfig;

const PREFER_REPRESENTATION: &str = "return=representation";
const ORDER_NEWEST_FIRST: &str = "arranged_time.desc";

pub struct SupabaseStore {
    http: reqwest::Client,
    table_url: String,
    api_key: String,
}

impl SupabaseStore {
    /// Build a store from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, table_url: table_url(&config.url, &config.table), api_key: config.api_key.clone() })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send_rows(&self, builder: RequestBuilder) -> Result<Vec<Meeting>, StoreError> {
        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        if !status.is_success() {
            warn!(status = status.as_u16(), body = %text, "backend returned error status");
            return Err(StoreError::Response { status: status.as_u16(), body: text });
        }
        parse_rows(&text)
    }
}

#[async_trait::async_trait]
impl MeetingStore for SupabaseStore {
    async fn list_meetings(&self) -> Result<Vec<Meeting>, StoreError> {
        let builder = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", ORDER_NEWEST_FIRST)]);
        self.send_rows(builder).await
    }

    async fn list_meetings_by_status(&self, status: MeetingStatus) -> Result<Vec<Meeting>, StoreError> {
        let builder = self.request(Method::GET).query(&[
            ("select", "*".to_owned()),
            ("status", eq_filter(status.as_str())),
            ("order", ORDER_NEWEST_FIRST.to_owned()),
        ]);
        self.send_rows(builder).await
    }

    async fn get_meeting(&self, id: &str) -> Result<Meeting, StoreError> {
        let builder = self
            .request(Method::GET)
            .query(&[("select", "*".to_owned()), ("id", eq_filter(id))]);
        single_row(self.send_rows(builder).await?, id)
    }

    async fn create_meeting(&self, insert: &MeetingInsert) -> Result<Meeting, StoreError> {
        let builder = self
            .request(Method::POST)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(insert);
        self.send_rows(builder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no rows".to_owned()))
    }

    async fn update_meeting(&self, id: &str, patch: &MeetingPatch) -> Result<Meeting, StoreError> {
        let builder = self
            .request(Method::PATCH)
            .query(&[("id", eq_filter(id))])
            .header("Prefer", PREFER_REPRESENTATION)
            .json(patch);
        single_row(self.send_rows(builder).await?, id)
    }

    async fn delete_meeting(&self, id: &str) -> Result<bool, StoreError> {
        let builder = self
            .request(Method::DELETE)
            .query(&[("id", eq_filter(id))])
            .header("Prefer", PREFER_REPRESENTATION);
        single_row(self.send_rows(builder).await?, id).map(|_| true)
    }
}

// =============================================================================
// WIRE HELPERS
// =============================================================================

pub(crate) fn table_url(project_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{table}", project_url.trim_end_matches('/'))
}

pub(crate) fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

pub(crate) fn parse_rows(text: &str) -> Result<Vec<Meeting>, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Decode(e.to_string()))
}

pub(crate) fn single_row(rows: Vec<Meeting>, id: &str) -> Result<Meeting, StoreError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::NotFound(id.to_owned()))
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
