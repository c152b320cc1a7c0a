//! `VoteStoreProvider` implementation for a JSON document-store REST API.
//!
//! The store exposes one endpoint per collection: `POST {base}/{collection}`
//! appends a document and returns `{"id": "..."}`; `GET {base}/{collection}`
//! returns every document in the collection as a JSON array, in insertion
//! order.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use tracing::debug;

use crate::errors::VoteStoreError;
use crate::interfaces::VoteStoreProvider;

/// Production vote store client backed by a document-store REST API.
///
/// # Example
///
/// ```ignore
/// use vibecheck_repository::RestVoteStoreProvider;
///
/// let provider = RestVoteStoreProvider::new("http://localhost:8080");
/// let records = provider.read_all("votes").await?;
/// ```
pub struct RestVoteStoreProvider {
    base_url: String,
    client: ReqwestClient,
}

impl RestVoteStoreProvider {
    /// Create a new provider for the store at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }
}

#[async_trait]
impl VoteStoreProvider for RestVoteStoreProvider {
    async fn write_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, VoteStoreError> {
        let url = self.collection_url(collection);

        let response = self
            .client
            .post(&url)
            .json(&document)
            .send()
            .await
            .map_err(|e| VoteStoreError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VoteStoreError::write(format!(
                "store returned {} for POST {}",
                status, url
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| VoteStoreError::parse(e.to_string()))?;

        let id = body
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| VoteStoreError::parse("write response missing document id"))?
            .to_string();

        debug!(collection, document_id = %id, "Wrote vote document");
        Ok(id)
    }

    async fn read_all(&self, collection: &str) -> Result<Vec<Value>, VoteStoreError> {
        let url = self.collection_url(collection);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| VoteStoreError::connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VoteStoreError::read(format!(
                "store returned {} for GET {}",
                status, url
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| VoteStoreError::parse(e.to_string()))?;

        match body {
            Value::Array(documents) => {
                debug!(collection, count = documents.len(), "Read collection");
                Ok(documents)
            }
            other => Err(VoteStoreError::parse(format!(
                "expected JSON array from GET {}, got {}",
                url,
                type_name(&other)
            ))),
        }
    }
}

/// Human-readable JSON type name for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
