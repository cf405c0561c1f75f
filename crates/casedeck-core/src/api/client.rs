use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use super::{ApiError, TestCaseApi, UploadResponse};
use crate::config::DEFAULT_EXPORT_STEM;
use crate::intake::SelectedFile;
use crate::testcase::{TestCase, TestCaseDraft};

/// reqwest-backed implementation of [`TestCaseApi`].
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-success response to [`ApiError::Server`], preferring the
    /// JSON `error` body over the operation's generic fallback.
    async fn check(response: Response, fallback: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServerError>(&body)
            .map(|e| e.error)
            .unwrap_or_else(|_| fallback.to_string());

        tracing::warn!(status = status.as_u16(), %message, "server rejected request");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TestCaseApi for ApiClient {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse, ApiError> {
        let bytes = tokio::fs::read(&file.path)
            .await
            .map_err(|e| ApiError::io(&file.path, e))?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.kind.mime())?;
        let form = Form::new().part("file", part);

        tracing::debug!(name = %file.name, size = file.size, "uploading document");

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;
        let response = Self::check(response, "Failed to generate test cases").await?;

        let upload: UploadResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        tracing::debug!(
            filename = %upload.filename,
            count = upload.test_cases.len(),
            replaced = upload.replaced,
            "generation finished"
        );

        Ok(upload)
    }

    async fn list(&self, filename: Option<&str>) -> Result<Vec<TestCase>, ApiError> {
        let mut request = self.client.get(self.url("/test-cases"));
        if let Some(filename) = filename {
            // reqwest percent-encodes query values for us
            request = request.query(&[("filename", filename)]);
        }

        let response = request.send().await?;
        let response = Self::check(response, "Failed to load test cases").await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn update(&self, id: i64, draft: &TestCaseDraft) -> Result<(), ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/test-cases/{id}")))
            .json(draft)
            .send()
            .await?;
        Self::check(response, "Failed to update test case").await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/test-cases/{id}")))
            .send()
            .await?;
        Self::check(response, "Failed to delete test case").await?;
        Ok(())
    }

    async fn clear_all(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .delete(self.url("/test-cases/clear-all"))
            .send()
            .await?;
        let response = Self::check(response, "Failed to clear test cases").await?;

        let message: ServerMessage = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(message.message)
    }

    async fn export(&self, dest_dir: &Path) -> Result<PathBuf, ApiError> {
        let response = self.client.get(self.url("/export")).send().await?;
        let response = Self::check(response, "Failed to export test cases").await?;

        let name = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_filename)
            .unwrap_or_else(default_export_name);

        let dest = dest_dir.join(name);
        let mut file = tokio::fs::File::create(&dest)
            .await
            .map_err(|e| ApiError::io(&dest, e))?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| ApiError::Network(e.to_string()))?;
            file.write_all(&chunk)
                .await
                .map_err(|e| ApiError::io(&dest, e))?;
        }
        file.flush().await.map_err(|e| ApiError::io(&dest, e))?;

        tracing::debug!(path = %dest.display(), "export written");
        Ok(dest)
    }
}

#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ServerError {
    error: String,
}

/// Extracts the filename from a `Content-Disposition: attachment` header.
fn attachment_filename(value: &str) -> Option<String> {
    let start = value.find("filename=")? + "filename=".len();
    let name = value[start..]
        .split(';')
        .next()?
        .trim()
        .trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn default_export_name() -> String {
    format!(
        "{}_{}.xlsx",
        DEFAULT_EXPORT_STEM,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}
