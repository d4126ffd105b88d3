use cellscan_common::{mock_result, AnalysisError, AnalysisResult, Analyzer, MOCK_DELAY_MS};
use gloo::timers::future::TimeoutFuture;
use web_sys::File;

/// 固定の待ち時間のあと固定結果を返す
#[derive(Debug, Clone, PartialEq)]
pub struct MockAnalyzer {
    delay_ms: u32,
}

impl MockAnalyzer {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self {
            delay_ms: MOCK_DELAY_MS as u32,
        }
    }
}

impl Analyzer for MockAnalyzer {
    type Upload = File;

    async fn analyze(&self, _upload: File) -> Result<AnalysisResult, AnalysisError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(mock_result())
    }
}
