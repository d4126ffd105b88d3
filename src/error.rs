use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("エンドポイントが設定されていません。`cellscan config --set-endpoint URL` で設定してください")]
    MissingEndpoint,

    #[error("HTTPクライアントエラー: {0}")]
    Http(String),

    /// 画面に出すエラーバナーの文字列をそのまま持つ
    #[error("{0}")]
    AnalysisFailed(String),

    #[error("ヘルスチェック失敗: {0}")]
    HealthCheck(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cellscan_common::Error),
}

pub type Result<T> = std::result::Result<T, CellScanError>;
