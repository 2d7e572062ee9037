//! # Actions設定・共有状態
//!
//! アクションの固定値（プログラムID、優先手数料、表示文言など）と
//! ハンドラ間で共有する状態の定義。

use solana_sdk::pubkey::Pubkey;

use crate::blockhash::BlockhashSource;

/// Memo Program (v2) ID
pub const MEMO_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

/// デフォルトのSolana RPC URL（devnet）
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
/// デフォルトの待ち受けアドレス
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Compute Unitあたりの優先手数料（micro-lamports）
pub const DEFAULT_COMPUTE_UNIT_PRICE: u64 = 1000;
/// Memo命令に載せる固定メッセージ
pub const DEFAULT_MEMO_MESSAGE: &str = "this is a simple memo message";

/// アクションの設定値。起動時に一度だけ構築し、以後は変更しない。
#[derive(Debug, Clone)]
pub struct ActionConfig {
    /// blockhash取得に使うSolana RPC URL
    pub rpc_url: String,
    /// 待ち受けアドレス
    pub bind_addr: String,
    /// SetComputeUnitPriceに渡すmicro-lamports
    pub compute_unit_price: u64,
    /// Memo命令の宛先プログラム
    pub memo_program_id: Pubkey,
    /// Memo命令のペイロード
    pub memo_message: String,
    /// アイコンURLのスキーム（ホストはリクエストから取る）
    pub icon_scheme: String,
    /// アイコンの相対パス
    pub icon_path: String,
    pub label: String,
    pub description: String,
    pub title: String,
    /// POSTレスポンスに添えるメッセージ（Noneなら省略）
    pub post_message: Option<String>,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            compute_unit_price: DEFAULT_COMPUTE_UNIT_PRICE,
            memo_program_id: MEMO_PROGRAM_ID,
            memo_message: DEFAULT_MEMO_MESSAGE.to_string(),
            icon_scheme: "http".to_string(),
            icon_path: "/logo.jpg".to_string(),
            label: "Mint NFT".to_string(),
            description: "Imagine your NFT".to_string(),
            title: "Imagine Demo".to_string(),
            post_message: None,
        }
    }
}

/// Actionsの共有状態。
pub struct ActionState {
    /// 固定設定
    pub config: ActionConfig,
    /// 最新blockhashの取得元（Solana RPC等、トレイトで抽象化）
    pub blockhash_source: Box<dyn BlockhashSource>,
}
