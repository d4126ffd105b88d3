use clap::Parser;
use cellscan::{analyzer, cli, config, error};
use cellscan_common::{AnalysisSession, AnalysisState, ResultsView};
use cli::{Cli, Commands};
use config::Config;
use error::{CellScanError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DISCLAIMER: &str = "Medical Disclaimer: This tool is for research and preliminary screening purposes only. \
It should not be used as a primary diagnostic tool. Always consult with qualified healthcare professionals \
for medical diagnosis and advice.";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Debug表記ではなくDisplayのまま出す（解析失敗はバナー文字列そのもの）
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, backend, endpoint, json } => {
            let kind = backend.unwrap_or(config.backend);
            let analyzer = analyzer::Backend::from_config(kind, &config, endpoint)?;

            if !json {
                println!("🔬 Cancer Cell Detection Analysis\n");
                println!("{}\n", DISCLAIMER);
                println!("- バックエンド: {}", analyzer.kind());
            }

            let mut session = AnalysisSession::new().with_stale_guard(config.ignore_stale_responses);
            let spinner = (!json).then(loading_spinner);
            analyzer::handle_analysis(&mut session, &analyzer, image).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            match session.state() {
                AnalysisState::Success(result) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        println!("{}", ResultsView::new(&result).to_text());
                    }
                }
                AnalysisState::Error(message) => {
                    return Err(CellScanError::AnalysisFailed(message));
                }
                AnalysisState::Idle | AnalysisState::Loading => {
                    return Err(CellScanError::AnalysisFailed(
                        "Analysis failed: Unknown error".to_string(),
                    ));
                }
            }
        }

        Commands::Health { endpoint } => {
            let endpoint = endpoint.unwrap_or_else(|| config.endpoint());
            let health =
                analyzer::check_health(&endpoint, Duration::from_secs(config.timeout_seconds)).await?;

            println!("バックエンド: {}", endpoint);
            println!("  状態: {}", health.status);
            println!("  モデル: {}", if health.model_loaded { "読込済み" } else { "未読込" });
            println!("  クラス: {}", health.available_classes.join(", "));

            if !health.is_ready() {
                return Err(CellScanError::HealthCheck("モデルが利用できません".into()));
            }
        }

        Commands::Config { set_endpoint, set_backend, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                changed = true;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(kind) = set_backend {
                config.backend = kind;
                changed = true;
                println!("✔ バックエンドを {} に設定しました", kind);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  バックエンド: {}", config.backend);
                println!("  エンドポイント: {}", config.endpoint());
                println!("  モック待ち時間: {}ms", config.mock_delay_ms);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  古い応答を無視: {}", if config.ignore_stale_responses { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}
