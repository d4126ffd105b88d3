//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 解析失敗
///
/// 1回の送信に対して終端的なエラー。画面には `display_message()` の文字列がそのまま表示される。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// 送信自体に失敗（接続不可・タイムアウトなど）
    #[error("request failed: {0}")]
    Request(String),

    /// 2xx以外のステータス
    #[error("server returned status {status}")]
    Status { status: u16, message: Option<String> },

    /// レスポンスボディが解析結果として読めない
    #[error("{0}")]
    Decode(String),

    /// その他（メッセージなしを含む）
    #[error("{}", .0.as_deref().unwrap_or("unknown"))]
    Other(Option<String>),
}

impl AnalysisError {
    /// 画面に出すメッセージ部分。空文字はメッセージなしとして扱う
    pub fn message(&self) -> Option<String> {
        let msg = match self {
            AnalysisError::Request(m) | AnalysisError::Decode(m) => Some(m.clone()),
            AnalysisError::Status { status, message } => Some(
                message
                    .clone()
                    .unwrap_or_else(|| format!("Server returned status {}", status)),
            ),
            AnalysisError::Other(m) => m.clone(),
        };
        msg.filter(|m| !m.is_empty())
    }

    /// エラーバナーの表示文字列
    pub fn display_message(&self) -> String {
        format!(
            "Analysis failed: {}",
            self.message().unwrap_or_else(|| "Unknown error".to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message_with_message() {
        let err = AnalysisError::Other(Some("X".to_string()));
        assert_eq!(err.display_message(), "Analysis failed: X");
    }

    #[test]
    fn test_display_message_without_message() {
        let err = AnalysisError::Other(None);
        assert_eq!(err.display_message(), "Analysis failed: Unknown error");
    }

    #[test]
    fn test_display_message_empty_message_falls_back() {
        let err = AnalysisError::Request(String::new());
        assert_eq!(err.display_message(), "Analysis failed: Unknown error");
    }

    #[test]
    fn test_status_uses_server_detail() {
        let err = AnalysisError::Status {
            status: 400,
            message: Some("File must be an image".to_string()),
        };
        assert_eq!(err.display_message(), "Analysis failed: File must be an image");
    }

    #[test]
    fn test_status_without_detail() {
        let err = AnalysisError::Status { status: 503, message: None };
        assert_eq!(err.message().as_deref(), Some("Server returned status 503"));
        assert_eq!(format!("{}", err), "server returned status 503");
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("endpoint is empty".to_string());
        assert_eq!(format!("{}", error), "Config error: endpoint is empty");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
