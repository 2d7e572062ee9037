//! # Imagine Actions
//!
//! Solana Actions に準拠した単一エンドポイントのHTTPサーバー。
//!
//! ## 役割
//! - アクションのメタデータ公開（アイコン・ラベル・説明・タイトル）
//! - 呼び出し元ウォレットをfee payerとする未署名トランザクションの構築
//!
//! 署名・ブロードキャストは行わない（クライアントが署名する）。状態は持たない。
//!
//! ## API エンドポイント
//! - `GET /api/actions` — メタデータ
//! - `OPTIONS /api/actions` — GETと同一
//! - `POST /api/actions` — 未署名トランザクション

mod blockhash;
mod config;
mod cors;
mod endpoints;
mod error;
mod solana_tx;

use std::sync::Arc;

use blockhash::SolanaRpcBlockhashSource;
use config::{ActionConfig, ActionState};

/// ルーターを構築する。全レスポンスにCORSヘッダーを付与する。
pub(crate) fn app(state: Arc<ActionState>) -> axum::Router {
    axum::Router::new()
        .route("/api/actions", axum::routing::any(endpoints::handle_actions))
        .layer(axum::middleware::map_response(cors::apply_cors_headers))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ActionConfig::default();

    let blockhash_source = SolanaRpcBlockhashSource::new(reqwest::Client::new(), &config.rpc_url);
    tracing::info!(rpc_url = %blockhash_source.rpc_url(), "Solana RPCを設定");

    let addr = config.bind_addr.clone();
    let state = Arc::new(ActionState {
        config,
        blockhash_source: Box::new(blockhash_source),
    });

    tracing::info!("Actionsサーバーを {} で起動します", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
