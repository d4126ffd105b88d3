//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResult: 1枚の画像に対する分類結果
//! - Details: 補足情報（自由記述またはクラス別確率つき）
//! - HealthStatus: バックエンドの稼働状態

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// 分類ラベル
    pub classification: String,

    /// 信頼度 [0,1]
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

/// 補足情報
///
/// モックは文字列、実バックエンドは `{message, class_probabilities}` を返すので両方受け付ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Details {
    Text(String),
    Structured(StructuredDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub class_probabilities: BTreeMap<String, f64>,
}

impl AnalysisResult {
    pub fn new(classification: impl Into<String>, confidence: f64) -> Self {
        Self {
            classification: classification.into(),
            confidence,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(Details::Text(details.into()));
        self
    }

    /// 表示用の補足テキスト（空なら None）
    pub fn details_text(&self) -> Option<&str> {
        let text = match self.details.as_ref()? {
            Details::Text(t) => t.as_str(),
            Details::Structured(s) => s.message.as_deref()?,
        };
        (!text.is_empty()).then_some(text)
    }

    /// クラス別確率（ラベル順）
    pub fn class_probabilities(&self) -> Vec<(&str, f64)> {
        match &self.details {
            Some(Details::Structured(s)) => s
                .class_probabilities
                .iter()
                .map(|(label, p)| (label.as_str(), *p))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// `GET /api/health` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub available_classes: Vec<String>,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}
