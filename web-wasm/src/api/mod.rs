//! 解析バックエンド（ブラウザ側）
//!
//! ビルド時に `CELLSCAN_ENDPOINT` が設定されていればHTTP、なければモックを使う。

mod http;
mod mock;

pub use http::HttpAnalyzer;
pub use mock::MockAnalyzer;

use cellscan_common::{AnalysisError, AnalysisResult, Analyzer};
use web_sys::File;

const BUILD_ENDPOINT: Option<&str> = option_env!("CELLSCAN_ENDPOINT");

#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Mock(MockAnalyzer),
    Http(HttpAnalyzer),
}

impl Backend {
    /// ビルド時設定から選ぶ
    pub fn from_build_env() -> Self {
        Self::from_endpoint(BUILD_ENDPOINT)
    }

    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(url) => Backend::Http(HttpAnalyzer::new(url)),
            None => Backend::Mock(MockAnalyzer::default()),
        }
    }
}

impl Analyzer for Backend {
    type Upload = File;

    async fn analyze(&self, upload: File) -> Result<AnalysisResult, AnalysisError> {
        match self {
            Backend::Mock(a) => a.analyze(upload).await,
            Backend::Http(a) => a.analyze(upload).await,
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use cellscan_common::{mock_result, AnalysisSession, AnalysisState};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_file() -> File {
        let parts = js_sys::Array::of1(&JsValue::from_str("fake image"));
        File::new_with_str_sequence(&parts, "cell.png").expect("File生成失敗")
    }

    #[wasm_bindgen_test]
    async fn mock_backend_returns_fixed_result() {
        let backend = Backend::Mock(MockAnalyzer::with_delay(10));
        let result = backend.analyze(sample_file()).await.expect("解析失敗");
        assert_eq!(result, mock_result());
    }

    #[wasm_bindgen_test]
    async fn session_goes_loading_then_success() {
        let backend = Backend::Mock(MockAnalyzer::with_delay(10));
        let mut session = AnalysisSession::new();

        let ticket = session.begin();
        assert_eq!(session.state(), AnalysisState::Loading);

        let outcome = backend.analyze(sample_file()).await;
        session.finish(ticket, outcome);
        assert_eq!(session.state(), AnalysisState::Success(mock_result()));
    }

    #[wasm_bindgen_test]
    async fn unreachable_endpoint_reports_failure() {
        let backend = Backend::from_endpoint(Some("http://127.0.0.1:9/api/analyze"));
        let err = backend.analyze(sample_file()).await.unwrap_err();
        assert!(err.display_message().starts_with("Analysis failed: "));
    }
}
