use crate::backend::BackendKind;
use crate::error::{CellScanError, Result};
use cellscan_common::{DEFAULT_ENDPOINT, MOCK_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const ENDPOINT_ENV: &str = "CELLSCAN_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendKind,
    pub endpoint: Option<String>,
    pub mock_delay_ms: u64,
    pub timeout_seconds: u64,
    /// 古い送信の完了を無視する
    pub ignore_stale_responses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendKind::Mock,
            endpoint: None,
            mock_delay_ms: MOCK_DELAY_MS,
            timeout_seconds: 60,
            ignore_stale_responses: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CellScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cellscan").join("config.json"))
    }

    /// 解析エンドポイント（環境変数 > 設定ファイル > 既定値）
    pub fn endpoint(&self) -> String {
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                return url;
            }
        }

        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        let url = url.trim().to_string();
        if url.is_empty() {
            return Err(CellScanError::MissingEndpoint);
        }
        // URLとして妥当かを先に確認
        cellscan_common::health_url(&url)?;
        self.endpoint = Some(url);
        Ok(())
    }
}
