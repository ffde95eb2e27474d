//! CouchDB implementation of the URL record store.
//!
//! Talks plain HTTP to a CouchDB endpoint: database creation, Mango index
//! creation, document insertion, selector-based `_find` queries, and the
//! `_up` liveness probe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

/// Errors from the CouchDB HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("document store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document store returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

impl From<DocumentStoreError> for AppError {
    fn from(e: DocumentStoreError) -> Self {
        warn!("Record store error: {}", e);
        AppError::unavailable("Record store unreachable", json!({}))
    }
}

/// A URL record as stored in CouchDB.
///
/// Wire names are camelCase to match the documents' JSON shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordDocument {
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_ip: Option<String>,
}

impl From<RecordDocument> for UrlRecord {
    fn from(doc: RecordDocument) -> Self {
        UrlRecord {
            short_code: doc.short_code,
            long_url: doc.long_url,
            created_at: doc.created_at,
            source_ip: doc.source_ip,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    docs: Vec<RecordDocument>,
}

#[derive(Debug, Deserialize)]
struct AllDocsResponse {
    rows: Vec<AllDocsRow>,
}

#[derive(Debug, Deserialize)]
struct AllDocsRow {
    id: String,
    // Raw value: design documents share the view and don't match the record shape.
    doc: Option<serde_json::Value>,
}

/// CouchDB repository for permanent URL records.
///
/// Every request carries the client-wide timeout, so a hung store never
/// hangs a request indefinitely.
pub struct CouchRecordRepository {
    http: reqwest::Client,
    base_url: String,
    database: String,
    username: Option<String>,
    password: Option<String>,
}

impl CouchRecordRepository {
    /// Connects to CouchDB, creating the database and Mango indexes if missing.
    ///
    /// Index fields mirror the record's queryable fields: `shortCode` is the
    /// primary lookup key, `longUrl` and `createdAt` serve auxiliary queries.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] if the endpoint is unreachable or
    /// database/index creation fails.
    pub async fn connect(
        base_url: &str,
        database: &str,
        username: Option<String>,
        password: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DocumentStoreError> {
        info!("Connecting to CouchDB at {}", base_url);

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        let repo = Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            database: database.to_string(),
            username,
            password,
        };

        repo.ensure_database().await?;
        repo.ensure_index(&["shortCode"], "by-short-code").await?;
        repo.ensure_index(&["longUrl"], "by-long-url").await?;
        repo.ensure_index(&["createdAt"], "by-created-at").await?;

        info!("✓ Connected to CouchDB, database '{}' ready", repo.database);

        Ok(repo)
    }

    fn db_url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/{}", self.base_url, self.database)
        } else {
            format!("{}/{}/{}", self.base_url, self.database, path)
        }
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.username {
            Some(user) => request.basic_auth(user, self.password.as_deref()),
            None => request,
        }
    }

    /// Creates the database, treating "already exists" (412) as success.
    async fn ensure_database(&self) -> Result<(), DocumentStoreError> {
        let response = self.with_auth(self.http.put(self.db_url(""))).send().await?;

        match response.status() {
            StatusCode::CREATED | StatusCode::PRECONDITION_FAILED => Ok(()),
            status => Err(DocumentStoreError::UnexpectedStatus {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }

    /// Creates a Mango index; CouchDB reports an existing index as 200.
    async fn ensure_index(
        &self,
        fields: &[&str],
        name: &str,
    ) -> Result<(), DocumentStoreError> {
        let body = json!({
            "index": { "fields": fields },
            "name": name,
            "type": "json",
        });

        let response = self
            .with_auth(self.http.post(self.db_url("_index")).json(&body))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(DocumentStoreError::UnexpectedStatus {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl RecordRepository for CouchRecordRepository {
    async fn insert(&self, record: NewUrlRecord) -> Result<(), AppError> {
        let doc = RecordDocument {
            short_code: record.short_code,
            long_url: record.long_url,
            created_at: Utc::now(),
            source_ip: record.source_ip,
        };

        let response = self
            .with_auth(self.http.post(self.db_url("")).json(&doc))
            .send()
            .await
            .map_err(DocumentStoreError::from)?;

        match response.status() {
            StatusCode::CREATED | StatusCode::ACCEPTED => {
                debug!("Record stored for {}", doc.short_code);
                Ok(())
            }
            status => Err(DocumentStoreError::UnexpectedStatus {
                status,
                body: response.text().await.unwrap_or_default(),
            }
            .into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let body = json!({
            "selector": { "shortCode": { "$eq": code } },
            "limit": 1,
        });

        let response = self
            .with_auth(self.http.post(self.db_url("_find")).json(&body))
            .send()
            .await
            .map_err(DocumentStoreError::from)?;

        if !response.status().is_success() {
            return Err(DocumentStoreError::UnexpectedStatus {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        let found: FindResponse = response.json().await.map_err(DocumentStoreError::from)?;

        Ok(found.docs.into_iter().next().map(UrlRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<UrlRecord>, AppError> {
        let response = self
            .with_auth(
                self.http
                    .get(self.db_url("_all_docs"))
                    .query(&[("include_docs", "true")]),
            )
            .send()
            .await
            .map_err(DocumentStoreError::from)?;

        if !response.status().is_success() {
            return Err(DocumentStoreError::UnexpectedStatus {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        let all: AllDocsResponse = response.json().await.map_err(DocumentStoreError::from)?;

        // Design documents live alongside data documents in _all_docs.
        Ok(all
            .rows
            .into_iter()
            .filter(|row| !row.id.starts_with("_design/"))
            .filter_map(|row| row.doc)
            .filter_map(|doc| serde_json::from_value::<RecordDocument>(doc).ok())
            .map(UrlRecord::from)
            .collect())
    }

    async fn ping(&self) -> bool {
        let url = format!("{}/_up", self.base_url);
        match self.with_auth(self.http.get(url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
