use crate::config::local::LocalStore;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape of one remote document: `{ "value": ... }`.
#[derive(Debug, Serialize, Deserialize)]
struct RemoteDocument {
    value: Value,
}

/// Write-through store: every `set` commits to the local store first, then
/// mirrors the write to a remote document store keyed by the same name.
///
/// Reads prefer the remote value (caching it locally) and degrade
/// transparently to the local value when the remote is unreachable. A mirror
/// failure is logged, never propagated: the scheduler keeps working from
/// local state.
pub struct MirroredStore {
    local: LocalStore,
    client: Client,
    endpoint: String,
}

impl MirroredStore {
    pub fn new(local: LocalStore, endpoint: String) -> Self {
        Self {
            local,
            client: Client::new(),
            endpoint,
        }
    }

    fn key_url(&self, key: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), key)
    }

    async fn fetch_remote(&self, key: &str) -> Result<Option<Value>> {
        let response = self.client.get(self.key_url(key)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: RemoteDocument = response.error_for_status()?.json().await?;
        Ok(Some(document.value))
    }

    async fn mirror_remote(&self, key: &str, value: Value) -> Result<()> {
        self.client
            .put(self.key_url(key))
            .json(&RemoteDocument { value })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MirroredStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        match self.fetch_remote(key).await {
            Ok(Some(value)) => {
                tracing::debug!("Remote value for {} cached locally", key);
                self.local.set(key, value.clone()).await?;
                Ok(Some(value))
            }
            // No remote document yet: an earlier mirror may have been
            // missed, so the local value still wins.
            Ok(None) => self.local.get(key).await,
            Err(e) => {
                tracing::warn!("Remote store read failed, using local value: {}", e);
                self.local.get(key).await
            }
        }
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.local.set(key, value.clone()).await?;
        if let Err(e) = self.mirror_remote(key, value).await {
            tracing::warn!("Remote mirror write failed, kept local value: {}", e);
        }
        Ok(())
    }
}
