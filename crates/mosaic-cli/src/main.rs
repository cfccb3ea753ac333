use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use mosaic_core::app::AppBuilder;
use mosaic_core::config::MosaicConfig;
use mosaic_core::domain::layout::select;

#[derive(Debug, Parser)]
#[command(name = "mosaic", about = "Time-limited image galleries on a key-value store")]
struct Cli {
    /// TOML config file (MOSAIC_* environment variables override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create galleries from a JSON array against an in-memory store, then list them
    Demo {
        /// File holding a JSON array of creation requests
        #[arg(long)]
        requests: PathBuf,

        /// Listing size (default from config, capped at 100)
        #[arg(long)]
        limit: Option<usize>,

        /// Admin token presented when reading the quota
        #[arg(long)]
        token: Option<String>,
    },

    /// Print the cover layout chosen for a gallery id
    Layout { id: String, image_count: usize },
}

#[derive(Debug, Serialize)]
struct ListingLine<'a> {
    id: &'a str,
    title: &'a str,
    created: i64,
    layout: &'static str,
    cover_image_count: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Stderr logging, `RUST_LOG` filter, `info` by default.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn demo(
    config: MosaicConfig,
    requests: PathBuf,
    limit: Option<usize>,
    token: Option<String>,
) -> Result<()> {
    // (A) 設定からサービスを組み立てる（ストアはプロセス内のメモリ）
    let service = AppBuilder::new(config).build()?;

    // (B) リクエストを読み込む
    let raw = std::fs::read_to_string(&requests)
        .with_context(|| format!("reading {}", requests.display()))?;
    let requests: Vec<serde_json::Value> =
        serde_json::from_str(&raw).context("requests file must hold a JSON array")?;

    // (C) 1 件ずつ作成して結果を出力（失敗しても続ける）
    for request in &requests {
        let response = service.create_json(&request.to_string()).await;
        print_json(&response)?;
    }

    // (D) 新しい順の一覧とカバーレイアウト
    for card in service.list(limit).await? {
        print_json(&ListingLine {
            id: card.gallery.id.as_str(),
            title: &card.gallery.title,
            created: card.gallery.created,
            layout: card.cover.layout.as_str(),
            cover_image_count: card.cover.cover_image_count,
        })?;
    }

    // (E) クォータ
    let authorization = token.map(|t| format!("Bearer {t}"));
    match service.quota(authorization.as_deref()).await {
        Ok(status) => print_json(&status)?,
        Err(e) => tracing::warn!(error = %e, kind = e.kind().as_str(), "quota read refused"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Demo {
            requests,
            limit,
            token,
        } => {
            let config = MosaicConfig::load(cli.config.as_deref())?;
            demo(config, requests, limit, token).await
        }
        Command::Layout { id, image_count } => print_json(&select(&id, image_count)),
    }
}
