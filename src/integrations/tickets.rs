//! HTTP client for the ticket backend.
//!
//! json-server style collection: `GET <base>?_page=&_limit=`, `GET <base>/:id`,
//! `PUT <base>/:id`, `DELETE <base>/:id`.

use crate::config::ApiConfig;
use crate::data::{Ticket, TicketId, TicketQuery};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Why a backend call failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("{method} {url} failed: {source}")]
    Network {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// A response arrived but its body was not the expected JSON.
    #[error("{method} {url} returned an unexpected body: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The backend answered with a non-success status.
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
}

/// Operations the UI performs against the ticket backend.
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Fetch one page of tickets.
    async fn list(&self, query: &TicketQuery) -> Result<Vec<Ticket>, ApiError>;
    /// Fetch a single ticket.
    async fn get(&self, id: &TicketId) -> Result<Ticket, ApiError>;
    /// Replace a ticket with the given full record.
    async fn update(&self, ticket: &Ticket) -> Result<(), ApiError>;
    async fn delete(&self, id: &TicketId) -> Result<(), ApiError>;
}

pub struct TicketClient {
    client: reqwest::Client,
    base_url: String,
}

impl TicketClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(5);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self::with_client(client, &config.base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self, query: &TicketQuery) -> String {
        format!("{}?{}", self.base_url, query.to_query_string())
    }

    pub fn ticket_url(&self, id: &TicketId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(&id.to_string()))
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        tracing::debug!("{} {}", method, url);
        let response = request.send().await.map_err(|source| ApiError::Network {
            method,
            url: url.to_string(),
            source,
        })?;

        if !response.status().is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(
        method: &'static str,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let body = response.text().await.map_err(|source| ApiError::Network {
            method,
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            method,
            url: url.to_string(),
            source,
        })
    }
}

/// Decode a page record by record. A malformed record (e.g. without an id)
/// is dropped so the rest of the page still renders.
fn decode_page(records: Vec<serde_json::Value>) -> Vec<Ticket> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Ticket>(record) {
            Ok(ticket) => Some(ticket),
            Err(e) => {
                tracing::warn!("Skipping malformed ticket record: {}", e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl TicketApi for TicketClient {
    async fn list(&self, query: &TicketQuery) -> Result<Vec<Ticket>, ApiError> {
        let url = self.list_url(query);
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        let records: Vec<serde_json::Value> = Self::read_json("GET", &url, response).await?;
        Ok(decode_page(records))
    }

    async fn get(&self, id: &TicketId) -> Result<Ticket, ApiError> {
        let url = self.ticket_url(id);
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        Self::read_json("GET", &url, response).await
    }

    async fn update(&self, ticket: &Ticket) -> Result<(), ApiError> {
        let url = self.ticket_url(&ticket.id);
        // .json() sets Content-Type: application/json
        self.send("PUT", &url, self.client.put(&url).json(ticket))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &TicketId) -> Result<(), ApiError> {
        let url = self.ticket_url(id);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}
