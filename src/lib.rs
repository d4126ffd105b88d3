//! cellscan - 細胞画像解析クライアント（CLI）

pub mod analyzer;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
