//! 解析処理のインターフェース（CLI/WASM共通）
//!
//! 実装はモック（固定遅延＋固定結果）とHTTP（multipart POST）の2種類。
//! どちらを使ってもRoot側の制御フローは変わらない。

use crate::error::AnalysisError;
use crate::types::AnalysisResult;
use std::future::Future;

/// モック解析の待ち時間
pub const MOCK_DELAY_MS: u64 = 2000;

/// multipart のフィールド名
pub const IMAGE_FIELD: &str = "image";

/// 既定の解析エンドポイント
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/analyze";

/// 画像1枚を解析する
pub trait Analyzer {
    /// 受け取るファイルの型（ブラウザなら `web_sys::File`、CLIならパス）
    type Upload;

    fn analyze(&self, upload: Self::Upload) -> impl Future<Output = Result<AnalysisResult, AnalysisError>>;
}

/// モックが返す固定結果
pub fn mock_result() -> AnalysisResult {
    AnalysisResult::new("Test Classification", 0.95).with_details("This is a test result")
}
