//! /api/actions ハンドラ実装

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ALLOW, HOST};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use solana_sdk::pubkey::Pubkey;

use imagine_types::{ActionGetResponse, ActionPostRequest, ActionPostResponse};

use crate::config::{ActionConfig, ActionState};
use crate::error::ActionError;
use crate::solana_tx;

/// 405レスポンスのAllowヘッダー
pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

/// /api/actions のディスパッチャ。
///
/// GET/OPTIONS → メタデータ、POST → トランザクション構築、それ以外 → 405。
pub async fn handle_actions(
    State(state): State<Arc<ActionState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method == Method::GET || method == Method::OPTIONS {
        handle_describe_action(State(state), uri, headers)
            .await
            .into_response()
    } else if method == Method::POST {
        handle_build_transaction(State(state), body)
            .await
            .into_response()
    } else {
        method_not_allowed(&method)
    }
}

/// GET /api/actions — アクションのメタデータを返す。
pub async fn handle_describe_action(
    State(state): State<Arc<ActionState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<ActionGetResponse>, ActionError> {
    // Hostヘッダーを優先し、無ければURIのauthority（HTTP/2等）を使う
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()));

    let payload = describe_action(&state.config, host)?;
    Ok(Json(payload))
}

/// アクションのメタデータを構築する。
///
/// アイコンURLは `{icon_scheme}://{host}` を基点に `icon_path` を解決したもの。
pub fn describe_action(
    config: &ActionConfig,
    host: Option<&str>,
) -> Result<ActionGetResponse, ActionError> {
    let host = host.ok_or_else(|| ActionError::Internal("Hostヘッダーがありません".to_string()))?;

    let base = reqwest::Url::parse(&format!("{}://{}", config.icon_scheme, host))
        .map_err(|e| ActionError::Internal(format!("ベースURLの構築に失敗 (host={host}): {e}")))?;
    let icon = base
        .join(&config.icon_path)
        .map_err(|e| ActionError::Internal(format!("アイコンURLの解決に失敗: {e}")))?;

    Ok(ActionGetResponse {
        icon: icon.to_string(),
        label: config.label.clone(),
        description: config.description.clone(),
        title: config.title.clone(),
    })
}

/// POST /api/actions — 未署名トランザクションを構築して返す。
///
/// ## 処理フロー
/// 1. accountを公開鍵としてパース（失敗時は400 Invalid "account"）
/// 2. compute_budget + memo の命令列を構築
/// 3. 最新blockhashを1回だけ取得
/// 4. fee payer = account で未署名トランザクションを構築し、Base64に整形
pub async fn handle_build_transaction(
    State(state): State<Arc<ActionState>>,
    body: Bytes,
) -> Result<Json<ActionPostResponse>, ActionError> {
    // Step 1: account
    let Json(request) = Json::<ActionPostRequest>::from_bytes(&body)
        .map_err(|e| ActionError::InvalidAccount(format!("リクエストボディのパースに失敗: {e}")))?;
    let account = Pubkey::from_str(&request.account).map_err(|e| {
        ActionError::InvalidAccount(format!("accountの公開鍵パースに失敗 ({}): {e}", request.account))
    })?;

    // Step 2: 命令
    let instructions = solana_tx::action_instructions(&state.config);

    // Step 3: blockhash
    let blockhash = state.blockhash_source.latest_blockhash().await?;

    // Step 4: 未署名トランザクション（署名者なし）
    let tx = solana_tx::build_unsigned_tx(&account, &instructions, &blockhash);
    let response = solana_tx::create_post_response(tx, &[], state.config.post_message.clone())?;

    tracing::info!(
        account = %account,
        blockhash = %blockhash,
        "アクショントランザクションを構築しました"
    );

    Ok(Json(response))
}

/// 未対応メソッドへの405レスポンス。
pub fn method_not_allowed(method: &Method) -> Response {
    tracing::warn!(method = %method, "未対応のメソッドです");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(ALLOW, ALLOWED_METHODS)],
        format!("Method {method} Not Allowed"),
    )
        .into_response()
}
