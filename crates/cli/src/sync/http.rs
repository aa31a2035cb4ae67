// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP item store for the remote todo service.
//!
//! Routes, relative to the configured base URL:
//!
//! | Operation     | Request                              |
//! |---------------|--------------------------------------|
//! | list          | `GET /todos`                         |
//! | create        | `POST /todos` `{"text"}`             |
//! | set completed | `PUT /todos/{id}` `{"completed"}`    |
//! | rename        | `PUT /todos/{id}` `{"text"}`         |
//! | delete        | `DELETE /todos/{id}`                 |

use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use td_core::{Item, ItemId, ItemStore, StoreFuture, StoreResult, SyncError};

use super::response::{decode_item, decode_list};
use crate::config::{ApiConfig, DeploymentType};
use crate::error::{Error, Result};

const COLLECTION: &str = "todos";

#[derive(Serialize)]
struct NewItem<'a> {
    text: &'a str,
}

/// Partial update; only the changed field is sent.
#[derive(Default, Serialize)]
struct ItemPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

/// [`ItemStore`] backed by the remote todo service.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base: Url,
    deployment: DeploymentType,
}

impl HttpStore {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let base = parse_base_url(&api.base_url)?;
        let client = Client::builder()
            .user_agent(concat!("td/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(HttpStore {
            client,
            base,
            deployment: api.deployment,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn deployment(&self) -> DeploymentType {
        self.deployment
    }

    /// `<base>/todos[/<segment>...]`, with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push(COLLECTION).extend(segments);
        }
        url
    }

    fn item_endpoint(&self, id: &ItemId) -> Url {
        self.endpoint(&[id.as_str()])
    }

    /// Sends a request and returns the body of a successful response.
    async fn send(&self, request: RequestBuilder) -> StoreResult<String> {
        let response = request.send().await.map_err(|e| {
            tracing::debug!(error = %e, "request failed before a response");
            SyncError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "response");

        if !status.is_success() {
            // An unreadable body falls back to the status line.
            let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
            return Err(SyncError::Rejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body,
            });
        }

        response.text().await.map_err(|e| SyncError::Transport {
            message: format!("failed to read response: {}", e),
        })
    }

    async fn update(&self, id: &ItemId, patch: ItemPatch<'_>) -> StoreResult<Item> {
        let url = self.item_endpoint(id);
        let body = self.send(self.client.put(url).json(&patch)).await?;
        decode_item(&body)
    }
}

impl ItemStore for HttpStore {
    fn list_all(&self) -> StoreFuture<'_, Vec<Item>> {
        Box::pin(async move {
            let body = self.send(self.client.get(self.endpoint(&[]))).await?;
            decode_list(&body)
        })
    }

    fn create<'a>(&'a self, text: &'a str) -> StoreFuture<'a, Item> {
        Box::pin(async move {
            let request = self.client.post(self.endpoint(&[])).json(&NewItem { text });
            let body = self.send(request).await?;
            decode_item(&body)
        })
    }

    fn set_completed<'a>(&'a self, id: &'a ItemId, completed: bool) -> StoreFuture<'a, Item> {
        Box::pin(self.update(
            id,
            ItemPatch {
                completed: Some(completed),
                ..ItemPatch::default()
            },
        ))
    }

    fn rename<'a>(&'a self, id: &'a ItemId, text: &'a str) -> StoreFuture<'a, Item> {
        Box::pin(self.update(
            id,
            ItemPatch {
                text: Some(text),
                ..ItemPatch::default()
            },
        ))
    }

    fn delete<'a>(&'a self, id: &'a ItemId) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            self.send(self.client.delete(self.item_endpoint(id))).await?;
            Ok(())
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: &str| Error::InvalidUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL"));
    }
    Ok(url)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
