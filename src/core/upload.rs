use crate::domain::model::Report;
use crate::utils::error::{Result, ScrubError};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use uuid::Uuid;

/// 2 MiB，與後端分塊協定一致
pub const DEFAULT_CHUNK_SIZE: usize = 2 * 1024 * 1024;

pub(crate) const GENERIC_SERVER_ERROR: &str = "Server error during file processing.";

/// 單次上傳的暫時狀態，合併完成或失敗後即丟棄
#[derive(Debug, Clone)]
pub struct UploadSession {
    pub file_id: String,
    pub file_name: String,
    pub total_chunks: usize,
    chunk_size: usize,
    file_size: usize,
}

impl UploadSession {
    pub fn new(file_name: impl Into<String>, file_size: usize, chunk_size: usize) -> Self {
        Self {
            file_id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            total_chunks: file_size.div_ceil(chunk_size),
            chunk_size,
            file_size,
        }
    }

    /// 第 index 塊的位元組範圍，最後一塊可能較短
    pub fn chunk_range(&self, index: usize) -> std::ops::Range<usize> {
        let start = index * self.chunk_size;
        let end = ((index + 1) * self.chunk_size).min(self.file_size);
        start..end
    }
}

/// 從錯誤回應取出 `{"error": ...}`，否則回傳通用訊息
pub(crate) async fn server_error_message(response: reqwest::Response) -> String {
    match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        Err(_) => GENERIC_SERVER_ERROR.to_string(),
    }
}

/// 整檔單一請求上傳
pub struct DirectUploader {
    client: Client,
    base_url: String,
}

impl DirectUploader {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: trim_base(base_url.into()),
        }
    }

    pub async fn upload(&self, file_name: &str, data: Vec<u8>) -> Result<Report> {
        tracing::info!("🚀 Uploading {} ({} bytes)", file_name, data.len());

        let form = Form::new().part("file", Part::bytes(data).file_name(file_name.to_string()));
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        tracing::debug!("Upload response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = server_error_message(response).await;
            return Err(ScrubError::Server { status, message });
        }

        Ok(response.json().await?)
    }
}

/// 分塊上傳：固定大小切塊、依序送出、最後要求合併。
/// 不重試、不續傳，任何一塊失敗即中止整個流程。
pub struct ChunkedUploader {
    client: Client,
    base_url: String,
    chunk_size: usize,
}

impl ChunkedUploader {
    pub fn new(client: Client, base_url: impl Into<String>, chunk_size: usize) -> Self {
        Self {
            client,
            base_url: trim_base(base_url.into()),
            chunk_size,
        }
    }

    pub async fn upload(&self, file_name: &str, data: &[u8]) -> Result<Report> {
        let session = UploadSession::new(file_name, data.len(), self.chunk_size);

        tracing::info!(
            "🚀 Uploading {} in {} chunks (file_id={})",
            session.file_name,
            session.total_chunks,
            session.file_id
        );

        for index in 0..session.total_chunks {
            self.upload_chunk(&session, index, &data[session.chunk_range(index)])
                .await?;
        }

        self.merge(&session).await
    }

    async fn upload_chunk(&self, session: &UploadSession, index: usize, bytes: &[u8]) -> Result<()> {
        tracing::debug!("Uploading chunk {}/{}", index + 1, session.total_chunks);

        let form = Form::new()
            .text("file_id", session.file_id.clone())
            .text("chunk_index", index.to_string())
            .text("total_chunks", session.total_chunks.to_string())
            .part(
                "file",
                Part::bytes(bytes.to_vec()).file_name(session.file_name.clone()),
            );

        let response = self
            .client
            .post(format!("{}/upload_chunk", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ScrubError::ChunkUpload {
                index,
                total: session.total_chunks,
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }

    async fn merge(&self, session: &UploadSession) -> Result<Report> {
        tracing::debug!("Requesting merge for file_id={}", session.file_id);

        let response = self
            .client
            .post(format!("{}/merge_chunks", self.base_url))
            .json(&serde_json::json!({
                "file_id": session.file_id,
                "filename": session.file_name,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let message = server_error_message(response).await;
            return Err(ScrubError::Merge { message });
        }

        Ok(response.json().await?)
    }
}

fn trim_base(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
