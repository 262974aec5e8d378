//! # respond デモサーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DEMO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `DEMO_PORT` | No | ポート番号（デフォルト: `3100`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,respond=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p respond-demo-server
//!
//! DEMO_PORT=8080 LOG_FORMAT=json cargo run -p respond-demo-server --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use respond::observability::{TracingConfig, init_tracing};
use respond_demo_server::{app, config::DemoConfig, handler::WidgetState};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("demo-server")
        .with_default_filter("info,respond=debug,respond_demo_server=debug");
    init_tracing(&tracing_config)?;

    let config = DemoConfig::from_env()?;
    let addr: SocketAddr = config.bind_address().parse()?;

    let app = app(Arc::new(WidgetState::default())).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("デモサーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
