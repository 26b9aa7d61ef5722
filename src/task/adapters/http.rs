//! REST adapter for the remote task resource.
//!
//! Maps the gateway port onto `GET <base>`, `POST <base>`,
//! `PUT <base>/<key>` and `DELETE <base>/<key>` with JSON bodies.
//!
//! A listing must be a JSON array. Records inside it are decoded one at a
//! time, so an unreadable record is logged and skipped without failing the
//! rest of the listing.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::BoardConfig;
use crate::task::{
    domain::{Task, TaskId},
    ports::{GatewayError, GatewayResult, ListQuery, RemoteIds, TaskGateway, TaskPayload},
};

/// Query parameter carrying the owner filter.
const OWNER_PARAM: &str = "userId";

/// Upper bound on pages fetched by one paginated listing.
const MAX_PAGES: u32 = 1_000;

/// HTTP client for the task resource.
#[derive(Debug, Clone)]
pub struct HttpTaskGateway {
    client: reqwest::Client,
    base_url: Url,
    page_size: Option<u32>,
    timeout: Duration,
}

impl HttpTaskGateway {
    /// Creates a client for the resource named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidEndpoint`] when the API URL cannot
    /// address task records or the auth token is not a valid header value,
    /// and [`GatewayError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: &BoardConfig) -> GatewayResult<Self> {
        let base_url = Url::parse(config.api_url())
            .map_err(|err| GatewayError::InvalidEndpoint(format!("{}: {err}", config.api_url())))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidEndpoint(config.api_url().to_owned()));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = config.auth_token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|err| GatewayError::InvalidEndpoint(format!("auth token: {err}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(GatewayError::transport)?;

        Ok(Self {
            client,
            base_url,
            page_size: config.page_size(),
            timeout: config.request_timeout(),
        })
    }

    fn item_url(&self, key: &TaskId) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .push(key.as_str());
        Ok(url)
    }

    fn classify(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout)
        } else {
            GatewayError::transport(err)
        }
    }

    /// Sends `request` and returns the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> GatewayResult<String> {
        let response = request.send().await.map_err(|err| self.classify(err))?;
        let status = response.status();
        let body = response.text().await.map_err(|err| self.classify(err))?;
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// Fetches one listing page as raw JSON records.
    async fn fetch_page(
        &self,
        query: &ListQuery,
        page: Option<(u32, u32)>,
    ) -> GatewayResult<Vec<Value>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(owner) = query.owner() {
            params.push((OWNER_PARAM, owner.as_str().to_owned()));
        }
        if let Some((number, size)) = page {
            params.push(("page", number.to_string()));
            params.push(("limit", size.to_string()));
        }
        let body = self
            .send(self.client.get(self.base_url.clone()).query(&params))
            .await?;
        serde_json::from_str(&body).map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[async_trait]
impl TaskGateway for HttpTaskGateway {
    #[instrument(skip(self, query), fields(owner = ?query.owner()))]
    async fn list(&self, query: &ListQuery) -> GatewayResult<Vec<TaskPayload>> {
        let Some(size) = self.page_size else {
            let records: Vec<TaskPayload> = self
                .fetch_page(query, None)
                .await?
                .into_iter()
                .filter_map(decode_record)
                .collect();
            debug!(count = records.len(), "fetched task records");
            return Ok(records);
        };

        // Servers that ignore `page` return the same records every time, so a
        // page without unseen keys ends the listing.
        let page_len = usize::try_from(size).unwrap_or(usize::MAX);
        let mut seen = HashSet::new();
        let mut records = Vec::new();
        for number in 1..=MAX_PAGES {
            let batch = self.fetch_page(query, Some((number, size))).await?;
            let fetched = batch.len();
            let mut progressed = false;
            for record in batch.into_iter().filter_map(decode_record) {
                let repeated = record_key(&record).is_some_and(|key| !seen.insert(key.clone()));
                if repeated {
                    continue;
                }
                progressed = true;
                records.push(record);
            }
            if fetched < page_len || !progressed {
                break;
            }
        }
        debug!(count = records.len(), "fetched task records");
        Ok(records)
    }

    #[instrument(skip(self, task), fields(task_id = %task.id()))]
    async fn create(&self, task: &Task) -> GatewayResult<RemoteIds> {
        let payload = TaskPayload::from(task);
        let body = self
            .send(self.client.post(self.base_url.clone()).json(&payload))
            .await?;
        if body.trim().is_empty() {
            return Ok(RemoteIds::default());
        }
        Ok(serde_json::from_str(&body).unwrap_or_else(|err| {
            debug!(error = %err, "create response carried no identifiers");
            RemoteIds::default()
        }))
    }

    #[instrument(skip(self, task), fields(task_id = %task.remote_key()))]
    async fn update(&self, task: &Task) -> GatewayResult<TaskPayload> {
        let payload = TaskPayload::from(task);
        let url = self.item_url(task.remote_key())?;
        let body = self.send(self.client.put(url).json(&payload)).await?;
        if body.trim().is_empty() {
            return Ok(payload);
        }
        Ok(serde_json::from_str(&body).unwrap_or_else(|err| {
            debug!(error = %err, "update response was not a task record");
            payload
        }))
    }

    #[instrument(skip(self, task), fields(task_id = %task.remote_key()))]
    async fn delete(&self, task: &Task) -> GatewayResult<()> {
        let url = self.item_url(task.remote_key())?;
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

fn decode_record(raw: Value) -> Option<TaskPayload> {
    serde_json::from_value(raw)
        .inspect_err(|err| warn!(error = %err, "skipping unreadable task record"))
        .ok()
}

/// Key addressing the record on the server: `_id` when present, else `id`.
fn record_key(record: &TaskPayload) -> Option<&TaskId> {
    record.server_id.as_ref().or(record.id.as_ref())
}
