//! # Imagine Actions 共有型定義
//!
//! Solana Actions の GET/POST で授受するJSONをRust構造体として提供する。
//! ウォレット等のクライアントと `imagine-actions` サーバーで共有する。
//!
//! ## エンコーディング規則
//! - Base58: Solanaアドレス、公開鍵
//! - Base64: シリアライズ済みトランザクション

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GET /api/actions
// ---------------------------------------------------------------------------

/// GET /api/actions レスポンス。
///
/// アクションの表示用メタデータ。リクエストごとに新規構築される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionGetResponse {
    /// アイコン画像の絶対URL（リクエストのホストから導出）
    pub icon: String,
    /// ボタン等に表示するラベル
    pub label: String,
    /// アクションの説明文
    pub description: String,
    /// アクションのタイトル
    pub title: String,
}

// ---------------------------------------------------------------------------
// POST /api/actions
// ---------------------------------------------------------------------------

/// POST /api/actions リクエスト。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionPostRequest {
    /// Base58エンコードされた呼び出し元ウォレットの公開鍵（fee payerになる）
    pub account: String,
}

/// POST /api/actions レスポンス。
///
/// 未署名トランザクションを返却する。署名はクライアント側で行う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPostResponse {
    /// Base64エンコードされたシリアライズ済みトランザクション
    pub transaction: String,
    /// ウォレットに表示する任意メッセージ
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// エラー
// ---------------------------------------------------------------------------

/// エラーレスポンスのボディ。
///
/// 内部の失敗理由は含めず、呼び出し元に見せてよい短い文言のみを返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// messageが未設定の場合はJSONから省略されることを確認
    #[test]
    fn test_post_response_omits_empty_message() {
        let response = ActionPostResponse {
            transaction: "AQID".to_string(),
            message: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, serde_json::json!({ "transaction": "AQID" }));

        let parsed: ActionPostResponse =
            serde_json::from_value(serde_json::json!({ "transaction": "AQID" })).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_post_response_with_message() {
        let response = ActionPostResponse {
            transaction: "AQID".to_string(),
            message: Some("memo".to_string()),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "memo");
    }
}
