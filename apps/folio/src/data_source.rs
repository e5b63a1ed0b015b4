//! DataSource: fetches and parses the résumé document.
//!
//! No retries and no cache fallback: the document is static, so a failed load
//! means the deployment is wrong and the caller renders the error view.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::errors::LoadError;
use crate::models::ResumeDocument;

#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load(&self, path: &str) -> Result<ResumeDocument, LoadError>;
}

/// Fetches the document over HTTP(S).
#[derive(Clone, Default)]
pub struct HttpDataSource {
    client: Client,
}

impl HttpDataSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn load(&self, path: &str) -> Result<ResumeDocument, LoadError> {
        debug!(path, "Fetching resume data");

        let response = self
            .client
            .get(path)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Transport {
                path: path.to_string(),
                source,
            })?;

        let doc = parse_document(path, &body)?;
        info!(path, timeline = doc.timeline.len(), skills = doc.skills.len(), "Resume data loaded");
        Ok(doc)
    }
}

/// Reads the document from the local filesystem.
#[derive(Clone, Copy, Default)]
pub struct FileDataSource;

#[async_trait]
impl DataSource for FileDataSource {
    async fn load(&self, path: &str) -> Result<ResumeDocument, LoadError> {
        debug!(path, "Reading resume data");

        let body = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;

        let doc = parse_document(path, &body)?;
        info!(path, timeline = doc.timeline.len(), skills = doc.skills.len(), "Resume data loaded");
        Ok(doc)
    }
}

/// Picks the source matching the path's scheme.
pub fn data_source_for(path: &str) -> Box<dyn DataSource> {
    if path.starts_with("http://") || path.starts_with("https://") {
        Box::new(HttpDataSource::default())
    } else {
        Box::new(FileDataSource)
    }
}

fn parse_document(path: &str, body: &[u8]) -> Result<ResumeDocument, LoadError> {
    serde_json::from_slice(body).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })
}
