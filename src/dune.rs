//! Client for the Dune Analytics API. We only ever read the latest materialized result of a
//! query, executing queries is left to Dune's own schedule.
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::row::Row;

const DUNE_API_KEY_HEADER: &str = "X-Dune-API-Key";

// Generated from: https://transform.tools/json-to-rust-serde
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuneResponse<R> {
    pub execution_id: String,
    pub query_id: i64,
    pub is_execution_finished: bool,
    pub state: String,
    pub submitted_at: String,
    pub expires_at: String,
    pub execution_started_at: String,
    pub execution_ended_at: String,
    pub result: Option<DuneResult<R>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuneResult<R> {
    pub rows: Vec<R>,
    #[serde(default)]
    pub metadata: Metadata,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub column_names: Vec<String>,
    pub column_types: Vec<String>,
    pub row_count: i64,
    pub result_set_bytes: i64,
    pub total_row_count: i64,
    pub total_result_set_bytes: i64,
    pub datapoint_count: i64,
    pub pending_time_millis: i64,
    pub execution_time_millis: i64,
}

#[derive(Debug, Error)]
pub enum DuneError {
    #[error("dune returned no result for query {query_id}, execution state: {state}")]
    NoResult { query_id: i64, state: String },
}

#[automock]
#[async_trait]
pub trait DuneApi {
    /// Rows of the most recent materialized result, in the order Dune returns them.
    async fn get_latest_result(&self, query_id: i64) -> Result<Vec<Row>>;
}

pub struct DuneApiHttp {
    api_key: String,
    server_url: String,
    client: reqwest::Client,
}

impl DuneApiHttp {
    pub fn new(api_key: &str) -> Self {
        Self::new_with_url(api_key, "https://api.dune.com")
    }

    pub fn new_with_url(api_key: &str, server_url: &str) -> Self {
        Self {
            api_key: api_key.into(),
            server_url: server_url.trim_end_matches('/').into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DuneApi for DuneApiHttp {
    async fn get_latest_result(&self, query_id: i64) -> Result<Vec<Row>> {
        let url = format!("{}/api/v1/query/{}/results", self.server_url, query_id);

        let body = self
            .client
            .get(url)
            .header(DUNE_API_KEY_HEADER, &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<DuneResponse<Row>>()
            .await?;

        debug!(
            query_id,
            execution_id = %body.execution_id,
            state = %body.state,
            "got dune response"
        );

        match body.result {
            Some(result) => Ok(result.rows),
            None => Err(DuneError::NoResult {
                query_id,
                state: body.state,
            }
            .into()),
        }
    }
}
