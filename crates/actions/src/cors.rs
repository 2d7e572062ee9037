//! # CORSヘッダー
//!
//! Solana Actions クライアントはブラウザ拡張等から任意オリジンで呼び出すため、
//! ステータスに関係なく全レスポンスに固定のCORSヘッダーを付与する。

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderName, HeaderValue};
use axum::response::Response;

/// Actions用CORSヘッダー一式。
pub const ACTIONS_CORS_HEADERS: [(HeaderName, &str); 4] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET,POST,PUT,OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
    (CONTENT_TYPE, "application/json"),
];

/// レスポンスにCORSヘッダーを付与する（`axum::middleware::map_response` 用）。
///
/// ハンドラが設定したContent-Typeも含め、4つすべてを固定値で上書きする。
pub async fn apply_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in ACTIONS_CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
    response
}
