//! # Blockhash取得
//!
//! トランザクションに埋め込む最新blockhashの取得元の抽象インターフェース。
//! Solana JSON-RPC実装は `rpc` サブモジュールを参照。

pub mod rpc;

pub use rpc::SolanaRpcBlockhashSource;

use solana_sdk::hash::Hash;

use crate::error::ActionError;

/// 最新blockhashの取得元。
///
/// リクエストごとに一度だけ呼び出される。リトライやタイムアウトの上書きは行わない。
#[async_trait::async_trait]
pub trait BlockhashSource: Send + Sync {
    /// 最新のblockhashを取得する。
    async fn latest_blockhash(&self) -> Result<Hash, ActionError>;
}
