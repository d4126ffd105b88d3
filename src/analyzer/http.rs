//! 解析APIクライアント
//!
//! `POST <endpoint>` に multipart の `image` フィールドで画像を送る。
//! 2xx以外は失敗として扱い、FastAPIの `detail` があればメッセージに使う。

use crate::error::{CellScanError, Result};
use cellscan_common::{
    health_url, interpret_analysis_response, parse_health_response, AnalysisError,
    AnalysisResult, Analyzer, HealthStatus, IMAGE_FIELD,
};
use image::ImageFormat;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = build_client(timeout)?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Analyzer for HttpAnalyzer {
    type Upload = PathBuf;

    async fn analyze(&self, upload: PathBuf) -> std::result::Result<AnalysisResult, AnalysisError> {
        let bytes = tokio::fs::read(&upload)
            .await
            .map_err(|e| AnalysisError::Request(format!("{}: {}", upload.display(), e)))?;

        let file_name = upload
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type(&upload))
            .map_err(|e| AnalysisError::Request(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "Analysis response received");
        interpret_analysis_response(status, &body)
    }
}

/// バックエンドのヘルスチェック
pub async fn check_health(endpoint: &str, timeout: Duration) -> Result<HealthStatus> {
    let url = health_url(endpoint)?;
    tracing::debug!(%url, "Checking backend health");

    let response = build_client(timeout)?
        .get(&url)
        .send()
        .await
        .map_err(|e| CellScanError::HealthCheck(e.to_string()))?;

    if !response.status().is_success() {
        return Err(CellScanError::HealthCheck(format!(
            "{} returned status {}",
            url,
            response.status().as_u16()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CellScanError::HealthCheck(e.to_string()))?;
    Ok(parse_health_response(&body)?)
}

fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CellScanError::Http(e.to_string()))
}

/// 拡張子からContent-Typeを決める（不明ならoctet-stream）
fn mime_type(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream")
}
