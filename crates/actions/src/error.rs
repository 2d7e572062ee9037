//! # Actions エラー型
//!
//! 全ハンドラで共通のエラー型。
//! 失敗理由はサーバーログにのみ出力し、レスポンスには固定文言だけを返す。

use axum::http::StatusCode;
use axum::Json;
use imagine_types::ActionErrorBody;

/// 不正なaccountに対するレスポンス文言
pub const INVALID_ACCOUNT_MESSAGE: &str = "Invalid \"account\" provided";
/// トランザクション構築失敗に対するレスポンス文言
pub const BAD_REQUEST_MESSAGE: &str = "Bad Request";
/// GET処理中の予期しない失敗に対するレスポンス文言
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Actionsエラー型。
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// accountが欠落している、または公開鍵として不正
    #[error("不正なaccount: {0}")]
    InvalidAccount(String),
    /// Solana RPC エラー（送信失敗、errorオブジェクト、resultの形式不正）
    #[error("Solana RPC エラー: {0}")]
    Rpc(String),
    /// トランザクションの構築・署名・シリアライズに失敗
    #[error("トランザクション構築に失敗: {0}")]
    Transaction(String),
    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl ActionError {
    /// HTTPステータスコード。
    /// RPC失敗も呼び出し元には400として返し、入力エラーと区別しない。
    pub fn status(&self) -> StatusCode {
        match self {
            ActionError::InvalidAccount(_)
            | ActionError::Rpc(_)
            | ActionError::Transaction(_) => StatusCode::BAD_REQUEST,
            ActionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 呼び出し元に返す文言。
    pub fn public_message(&self) -> &'static str {
        match self {
            ActionError::InvalidAccount(_) => INVALID_ACCOUNT_MESSAGE,
            ActionError::Rpc(_) | ActionError::Transaction(_) => BAD_REQUEST_MESSAGE,
            ActionError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl axum::response::IntoResponse for ActionError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "リクエスト処理に失敗しました");
        } else {
            tracing::warn!(error = %self, "リクエストを拒否しました");
        }

        let body = ActionErrorBody {
            error: self.public_message().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ActionError::InvalidAccount("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ActionError::Rpc("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ActionError::Transaction("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ActionError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// 内部の詳細がレスポンス文言に漏れないことを確認
    #[test]
    fn test_public_message_does_not_leak_detail() {
        let err = ActionError::Rpc("connection refused (os error 111)".into());
        assert_eq!(err.public_message(), "Bad Request");
        assert!(!err.public_message().contains("refused"));

        let err = ActionError::InvalidAccount("Invalid Base58 string".into());
        assert!(err.public_message().contains("account"));
    }
}
