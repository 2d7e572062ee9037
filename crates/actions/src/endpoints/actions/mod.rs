//! # /api/actions エンドポイント
//!
//! Solana Actions の GET/POST ペア。
//!
//! ## GET / OPTIONS
//! アイコン・ラベル・説明・タイトルを返す。アイコンURLはリクエストのホストから導出する。
//!
//! ## POST
//! `{ "account": "<base58>" }` を受け取り、accountをfee payerとする
//! 未署名トランザクション（compute_budget + memo）をBase64で返す。
//!
//! ## エラー
//! - 不正なaccount → 400 `Invalid "account" provided`
//! - RPC失敗・構築失敗 → 400 `Bad Request`
//! - GET処理中の失敗 → 500
//! - その他のメソッド → 405

mod handler;


pub use handler::handle_actions;
