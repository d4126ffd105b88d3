//! 解析の実行
//!
//! Root画面の `handle_analysis` に相当する処理と、バックエンドの切り替え。

mod http;
mod mock;

pub use http::{check_health, HttpAnalyzer};
pub use mock::MockAnalyzer;

use crate::backend::BackendKind;
use crate::config::Config;
use crate::error::Result;
use cellscan_common::{AnalysisError, AnalysisResult, AnalysisSession, Analyzer};
use std::path::PathBuf;
use std::time::Duration;

/// 設定から選ばれたバックエンド
pub enum Backend {
    Mock(MockAnalyzer),
    Http(HttpAnalyzer),
}

impl Backend {
    pub fn from_config(kind: BackendKind, config: &Config, endpoint: Option<String>) -> Result<Self> {
        match kind {
            BackendKind::Mock => Ok(Backend::Mock(MockAnalyzer::new(Duration::from_millis(
                config.mock_delay_ms,
            )))),
            BackendKind::Http => {
                let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
                Ok(Backend::Http(HttpAnalyzer::new(
                    endpoint,
                    Duration::from_secs(config.timeout_seconds),
                )?))
            }
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Mock(_) => BackendKind::Mock,
            Backend::Http(_) => BackendKind::Http,
        }
    }
}

impl Analyzer for Backend {
    type Upload = PathBuf;

    async fn analyze(&self, upload: PathBuf) -> std::result::Result<AnalysisResult, AnalysisError> {
        match self {
            Backend::Mock(a) => a.analyze(upload).await,
            Backend::Http(a) => a.analyze(upload).await,
        }
    }
}

/// 画像1枚の解析を実行してセッションに反映
///
/// 結果がセッションに反映された場合 true。
pub async fn handle_analysis<A>(session: &mut AnalysisSession, analyzer: &A, image: PathBuf) -> bool
where
    A: Analyzer<Upload = PathBuf>,
{
    let ticket = session.begin();
    tracing::info!(image = %image.display(), ticket = ticket.seq(), "Analyzing image");

    let outcome = analyzer.analyze(image).await;
    match &outcome {
        Ok(result) => tracing::debug!(classification = %result.classification, confidence = result.confidence, "Analysis finished"),
        // 利用者への表示は呼び出し側のバナーに任せる
        Err(e) => tracing::info!("Analysis error: {}", e),
    }

    session.finish(ticket, outcome)
}
