use cellscan_common::{mock_result, AnalysisError, AnalysisResult, Analyzer, MOCK_DELAY_MS};
use std::path::PathBuf;
use std::time::Duration;

/// 実バックエンドなしで動かすための解析器
///
/// 画像は読まない。待ち時間のあと固定結果を返す。
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    delay: Duration,
}

impl MockAnalyzer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new(Duration::from_millis(MOCK_DELAY_MS))
    }
}

impl Analyzer for MockAnalyzer {
    type Upload = PathBuf;

    async fn analyze(&self, _upload: PathBuf) -> Result<AnalysisResult, AnalysisError> {
        tokio::time::sleep(self.delay).await;
        Ok(mock_result())
    }
}
