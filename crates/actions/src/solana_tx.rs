//! # Solanaトランザクション構築ヘルパー
//!
//! アクション用の未署名トランザクション構築と、
//! POSTレスポンス形式（Base64）への整形を行う。
//!
//! トランザクションには常に2つの命令がこの順で含まれる:
//! 1. compute_budget::set_compute_unit_price — 優先手数料
//! 2. memo — 固定メッセージ

use base64::Engine;
use imagine_types::ActionPostResponse;
#[allow(deprecated)] // solana-sdk 2.x のcompute_budget再エクスポート非推奨警告を抑制
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use crate::config::ActionConfig;
use crate::error::ActionError;

/// Base64エンジン（Standard）
pub(crate) fn b64() -> base64::engine::GeneralPurpose {
    base64::engine::general_purpose::STANDARD
}

// ---------------------------------------------------------------------------
// 命令
// ---------------------------------------------------------------------------

/// 優先手数料（Compute Unitあたりのmicro-lamports）を設定する命令。
pub fn compute_unit_price_instruction(micro_lamports: u64) -> Instruction {
    ComputeBudgetInstruction::set_compute_unit_price(micro_lamports)
}

/// Memo命令。アカウント参照は持たない。
pub fn memo_instruction(memo_program_id: &Pubkey, message: &str) -> Instruction {
    Instruction::new_with_bytes(*memo_program_id, message.as_bytes(), vec![])
}

/// 設定からアクションの命令列を組み立てる。
pub fn action_instructions(config: &ActionConfig) -> Vec<Instruction> {
    vec![
        compute_unit_price_instruction(config.compute_unit_price),
        memo_instruction(&config.memo_program_id, &config.memo_message),
    ]
}

// ---------------------------------------------------------------------------
// トランザクション構築
// ---------------------------------------------------------------------------

/// 未署名トランザクションを構築する。
///
/// fee payerは `payer`。署名スロットはすべてデフォルト値（ゼロ）で埋め、
/// 署名はクライアントに任せる。
pub fn build_unsigned_tx(
    payer: &Pubkey,
    instructions: &[Instruction],
    blockhash: &Hash,
) -> Transaction {
    let message = Message::new_with_blockhash(instructions, Some(payer), blockhash);

    let num_signers = message.header.num_required_signatures as usize;
    let signatures = vec![Signature::default(); num_signers];

    Transaction {
        signatures,
        message,
    }
}

/// トランザクションをバイナリにシリアライズする。
pub fn serialize_transaction(tx: &Transaction) -> Result<Vec<u8>, ActionError> {
    bincode::serialize(tx)
        .map_err(|e| ActionError::Transaction(format!("トランザクションのシリアライズに失敗: {e}")))
}

// ---------------------------------------------------------------------------
// レスポンス整形
// ---------------------------------------------------------------------------

/// トランザクションをPOSTレスポンスに整形する。
///
/// `signers` が空でなければ、各署名者の署名スロットに部分署名してからシリアライズする。
/// 署名者が署名スロットに見つからない場合はエラー。
pub fn create_post_response(
    mut tx: Transaction,
    signers: &[&Keypair],
    message: Option<String>,
) -> Result<ActionPostResponse, ActionError> {
    if !signers.is_empty() {
        let message_bytes = tx.message.serialize();
        let num_signers = tx.message.header.num_required_signatures as usize;

        for signer in signers {
            let pubkey = signer.pubkey();
            let index = tx
                .message
                .account_keys
                .iter()
                .take(num_signers)
                .position(|k| *k == pubkey)
                .ok_or_else(|| {
                    ActionError::Transaction(format!(
                        "公開鍵 {pubkey} がトランザクションの署名者に見つかりません"
                    ))
                })?;
            tx.signatures[index] = signer.sign_message(&message_bytes);
        }
    }

    let tx_bytes = serialize_transaction(&tx)?;

    Ok(ActionPostResponse {
        transaction: b64().encode(&tx_bytes),
        message,
    })
}
