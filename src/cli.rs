use clap::{Parser, Subcommand};
use crate::backend::BackendKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cellscan")]
#[command(about = "Cancer Cell Detection Analysis", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を1枚解析して結果を表示
    Analyze {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 解析バックエンド（省略時は設定値）
        #[arg(short, long)]
        backend: Option<BackendKind>,

        /// 解析エンドポイント（省略時は設定値）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// バックエンドの稼働状態を確認
    Health {
        /// 解析エンドポイント（省略時は設定値）
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 既定のバックエンドを設定
        #[arg(long)]
        set_backend: Option<BackendKind>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
