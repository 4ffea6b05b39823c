// crates/blinkstake-staking/src/builder.rs

//! Assembles the create-and-delegate stake transaction.

use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    stake::{
        self,
        state::{Authorized, Lockup, StakeStateV2},
    },
    transaction::Transaction,
};
use tracing::debug;

use crate::rpc::SolanaRpcClient;
use crate::{Result, StakeError};

/// Compute-unit price hint attached to every stake transaction, in
/// micro-lamports.
pub const COMPUTE_UNIT_PRICE_MICRO_LAMPORTS: u64 = 50;

/// Instruction sequence funding a fresh stake account and delegating it.
///
/// Order is fixed: compute-budget price hint, stake-account creation
/// funded with `lamports` (the caller already folds the rent-exempt
/// minimum in), delegation to `vote_account`. The sender is both staker
/// and withdrawer authority; no lockup.
pub fn stake_instructions(
    sender: &Pubkey,
    vote_account: &Pubkey,
    stake_account: &Pubkey,
    lamports: u64,
) -> Vec<Instruction> {
    let authorized = Authorized {
        staker: *sender,
        withdrawer: *sender,
    };

    let mut instructions = vec![ComputeBudgetInstruction::set_compute_unit_price(
        COMPUTE_UNIT_PRICE_MICRO_LAMPORTS,
    )];
    instructions.extend(stake::instruction::create_account(
        sender,
        stake_account,
        &authorized,
        &Lockup::default(),
        lamports,
    ));
    instructions.push(stake::instruction::delegate_stake(
        stake_account,
        sender,
        vote_account,
    ));
    instructions
}

/// Builds the partially signed transaction staking `lamports` from
/// `sender` with `vote_account`.
///
/// A fresh keypair identifies the new stake account; it signs here and is
/// dropped with this call, leaving only its signature in the output. The
/// sender's signature slot stays empty for the wallet to fill
/// client-side. RPC failures propagate as hard errors.
pub async fn prepare_stake_transaction(
    rpc: &SolanaRpcClient,
    sender: &Pubkey,
    vote_account: &Pubkey,
    lamports: u64,
) -> Result<Transaction> {
    let stake_account = Keypair::new();

    let rent_exempt = rpc
        .minimum_balance_for_rent_exemption(StakeStateV2::size_of())
        .await?;
    let funding = lamports.checked_add(rent_exempt).ok_or_else(|| {
        StakeError::InvalidStakeAmount(format!(
            "{} lamports overflows once the rent-exempt minimum of {} is added",
            lamports, rent_exempt
        ))
    })?;

    let instructions = stake_instructions(sender, vote_account, &stake_account.pubkey(), funding);

    let recent_blockhash = rpc.latest_blockhash().await?;
    let mut transaction = Transaction::new_with_payer(&instructions, Some(sender));
    transaction
        .try_partial_sign(&[&stake_account], recent_blockhash)
        .map_err(|e| StakeError::Signing(e.to_string()))?;

    debug!(
        "prepared stake transaction funding {} lamports for {}",
        funding, sender
    );

    Ok(transaction)
}

/// Wire bytes of the signed transaction; the HTTP layer base64-wraps them.
pub fn serialize_transaction(transaction: &Transaction) -> Result<Vec<u8>> {
    bincode::serialize(transaction).map_err(|e| StakeError::Serialization(e.to_string()))
}
