//! # Solana JSON-RPC による blockhash 取得
//!
//! `getLatestBlockhash` を1回だけ呼び出す。

use std::str::FromStr;

use solana_sdk::hash::Hash;

use super::BlockhashSource;
use crate::error::ActionError;

/// Solana RPCノードからblockhashを取得する実装。
pub struct SolanaRpcBlockhashSource {
    /// HTTPクライアント
    http_client: reqwest::Client,
    /// Solana RPC URL
    rpc_url: String,
}

impl SolanaRpcBlockhashSource {
    pub fn new(http_client: reqwest::Client, rpc_url: impl Into<String>) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.into(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}

#[async_trait::async_trait]
impl BlockhashSource for SolanaRpcBlockhashSource {
    async fn latest_blockhash(&self) -> Result<Hash, ActionError> {
        let rpc_request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getLatestBlockhash",
            "params": [{"commitment": "finalized"}]
        });

        let rpc_response = self
            .http_client
            .post(&self.rpc_url)
            .json(&rpc_request)
            .send()
            .await
            .map_err(|e| ActionError::Rpc(format!("RPC送信失敗: {e}")))?;

        let rpc_body: serde_json::Value = rpc_response
            .json()
            .await
            .map_err(|e| ActionError::Rpc(format!("RPCレスポンスのパースに失敗: {e}")))?;

        if let Some(error) = rpc_body.get("error") {
            return Err(ActionError::Rpc(format!(
                "getLatestBlockhashがエラーを返しました: {error}"
            )));
        }

        let blockhash = rpc_body
            .pointer("/result/value/blockhash")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ActionError::Rpc("RPCレスポンスにresult.value.blockhashがありません".to_string())
            })?;

        let hash = Hash::from_str(blockhash)
            .map_err(|e| ActionError::Rpc(format!("blockhashのBase58デコードに失敗: {e}")))?;

        tracing::debug!(blockhash = %hash, rpc_url = %self.rpc_url, "最新blockhashを取得");
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    /// モックRPCサーバーを起動し、指定のJSONを返す。
    async fn start_mock_rpc(response: serde_json::Value) -> u16 {
        let app = axum::Router::new().route(
            "/",
            axum::routing::post(move |Json(body): Json<serde_json::Value>| {
                let response = response.clone();
                async move {
                    assert_eq!(body["method"], "getLatestBlockhash");
                    Json(response)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        port
    }

    #[tokio::test]
    async fn test_latest_blockhash_success() {
        let expected = Hash::new_unique();
        let port = start_mock_rpc(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": {"slot": 1234},
                "value": {
                    "blockhash": expected.to_string(),
                    "lastValidBlockHeight": 3090
                }
            }
        }))
        .await;

        let source =
            SolanaRpcBlockhashSource::new(reqwest::Client::new(), format!("http://127.0.0.1:{port}/"));
        let hash = source.latest_blockhash().await.unwrap();
        assert_eq!(hash, expected);
    }

    /// RPCがerrorオブジェクトを返した場合はRpcエラー
    #[tokio::test]
    async fn test_latest_blockhash_rpc_error() {
        let port = start_mock_rpc(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32005, "message": "Node is unhealthy"}
        }))
        .await;

        let source =
            SolanaRpcBlockhashSource::new(reqwest::Client::new(), format!("http://127.0.0.1:{port}/"));
        let result = source.latest_blockhash().await;
        assert!(matches!(result, Err(ActionError::Rpc(_))));
    }

    #[tokio::test]
    async fn test_latest_blockhash_malformed_result() {
        let port = start_mock_rpc(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"value": {"blockhash": "not-base58-0OIl"}}
        }))
        .await;

        let source =
            SolanaRpcBlockhashSource::new(reqwest::Client::new(), format!("http://127.0.0.1:{port}/"));
        let result = source.latest_blockhash().await;
        assert!(matches!(result, Err(ActionError::Rpc(_))));
    }

    /// 接続できないRPCはリトライせずにRpcエラー
    #[tokio::test]
    async fn test_latest_blockhash_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let source =
            SolanaRpcBlockhashSource::new(reqwest::Client::new(), format!("http://127.0.0.1:{port}/"));
        let result = source.latest_blockhash().await;
        assert!(matches!(result, Err(ActionError::Rpc(_))));
    }
}
