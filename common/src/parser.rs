//! バックエンドレスポンスパーサー
//!
//! 解析APIとヘルスチェックAPIのレスポンスを型に変換する。
//! HTTPクライアントはCLI(reqwest)とWASM(fetch)で別だが、判定はここに揃える。

use crate::error::{AnalysisError, Error, Result};
use crate::types::{AnalysisResult, HealthStatus};

/// ヘルスチェックのレスポンスボディをパース
pub fn parse_health_response(body: &str) -> Result<HealthStatus> {
    serde_json::from_str(body.trim()).map_err(|e| Error::Parse(format!("ヘルスチェックJSONパースエラー: {}", e)))
}

/// エラーレスポンスから `detail` を取り出す
///
/// `{"detail": "..."}` と、バリデーションエラーの `{"detail": [{"msg": "..."}]}` に対応。
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body.trim()).ok()?;
    let detail = match value.get("detail")? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    (!detail.is_empty()).then_some(detail)
}

/// ステータスとボディから解析結果を判定
pub fn interpret_analysis_response(status: u16, body: &str) -> std::result::Result<AnalysisResult, AnalysisError> {
    if !(200..300).contains(&status) {
        return Err(AnalysisError::Status {
            status,
            message: parse_error_detail(body),
        });
    }
    // バナーにそのまま出るので serde のエラー文だけを渡す
    serde_json::from_str(body.trim())
        .map_err(|e| AnalysisError::Decode(format!("invalid response body: {}", e)))
}

/// 解析エンドポイントからヘルスチェックURLを作る
///
/// ```
/// use cellscan_common::health_url;
///
/// let url = health_url("http://localhost:8000/api/analyze").unwrap();
/// assert_eq!(url, "http://localhost:8000/api/health");
/// ```
pub fn health_url(endpoint: &str) -> Result<String> {
    let base = endpoint.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::Config("エンドポイントが空です".into()));
    }
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(Error::Config(format!("URLではありません: {}", endpoint)));
    }

    if let Some(prefix) = base.strip_suffix("/analyze") {
        Ok(format!("{}/health", prefix))
    } else if base.ends_with("/api") {
        Ok(format!("{}/health", base))
    } else {
        Ok(format!("{}/api/health", base))
    }
}
