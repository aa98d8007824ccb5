//! Escrow ledger: deposits keyed by access hash.
//!
//! Each hash walks `Unused -> Locked -> {Claimed | Canceled}`. Top-ups keep a
//! hash in `Locked`; the terminal states never accept another lock.

use soroban_sdk::{log, token, Address, BytesN, Env};

use crate::error::RemittanceError;
use crate::events;
use crate::hash;
use crate::policy;
use crate::storage::{self, EscrowState, EscrowStatus, LockedFunds};

fn token_client(env: &Env) -> Result<token::Client<'_>, RemittanceError> {
    let token = storage::read_token(env).ok_or(RemittanceError::Inactive)?;
    Ok(token::Client::new(env, &token))
}

fn add_to_total(env: &Env, amount: i128) -> Result<(), RemittanceError> {
    let total = storage::read_total_locked(env)
        .checked_add(amount)
        .ok_or(RemittanceError::Overflow)?;
    storage::write_total_locked(env, total);
    Ok(())
}

fn sub_from_total(env: &Env, amount: i128) -> Result<(), RemittanceError> {
    let total = storage::read_total_locked(env)
        .checked_sub(amount)
        .ok_or(RemittanceError::Overflow)?;
    storage::write_total_locked(env, total);
    Ok(())
}

/// Deposits `amount` under `access_hash`.
///
/// The first lock under a hash fixes the depositor and the expiry. Only that
/// depositor may add to a still-locked hash; a top-up's `lock_period` must
/// still respect the current ceiling but is otherwise ignored.
pub fn lock(
    env: &Env,
    depositor: &Address,
    access_hash: &BytesN<32>,
    lock_period: u64,
    amount: i128,
) -> Result<(), RemittanceError> {
    depositor.require_auth();

    policy::ensure_running(env)?;
    if amount <= 0 {
        return Err(RemittanceError::InvalidAmount);
    }
    policy::ensure_within_ceiling(env, lock_period)?;

    let now = env.ledger().timestamp();
    let funds = match storage::read_escrow(env, access_hash) {
        None => LockedFunds {
            amount,
            lock_expiry: now
                .checked_add(lock_period)
                .ok_or(RemittanceError::Overflow)?,
            depositor: depositor.clone(),
        },
        Some(EscrowState::Locked(mut funds)) => {
            if funds.depositor != *depositor {
                return Err(RemittanceError::NotDepositor);
            }
            funds.amount = funds
                .amount
                .checked_add(amount)
                .ok_or(RemittanceError::Overflow)?;
            funds
        }
        Some(EscrowState::Claimed) | Some(EscrowState::Canceled) => {
            return Err(RemittanceError::AlreadyUsed);
        }
    };

    add_to_total(env, amount)?;
    token_client(env)?.transfer(depositor, &env.current_contract_address(), &amount);
    storage::write_escrow(env, access_hash, &EscrowState::Locked(funds.clone()));
    storage::bump_instance(env);

    log!(env, "locked {} under {}, total {}", amount, access_hash.clone(), funds.amount);
    events::locked(env, access_hash, &funds.depositor, funds.amount, funds.lock_expiry);
    Ok(())
}

/// Pays out the escrow committed to `secret` and `recipient`.
///
/// `secret` is the material fed to the hash: a single secret, or the output of
/// [`hash::combine_secrets`] for the two-secret variant.
pub fn claim(
    env: &Env,
    recipient: &Address,
    secret: &BytesN<32>,
) -> Result<i128, RemittanceError> {
    recipient.require_auth();

    let access_hash = hash::compute_access_hash(env, secret, recipient)?;
    let funds = match storage::read_escrow(env, &access_hash) {
        Some(EscrowState::Locked(funds)) => funds,
        _ => return Err(RemittanceError::NotFound),
    };

    storage::write_escrow(env, &access_hash, &EscrowState::Claimed);
    sub_from_total(env, funds.amount)?;
    token_client(env)?.transfer(&env.current_contract_address(), recipient, &funds.amount);
    storage::bump_instance(env);

    events::claimed(env, &access_hash, recipient, funds.amount);
    Ok(funds.amount)
}

/// Returns an expired escrow to the account that first funded it.
pub fn cancel(
    env: &Env,
    depositor: &Address,
    access_hash: &BytesN<32>,
) -> Result<i128, RemittanceError> {
    depositor.require_auth();

    let funds = match storage::read_escrow(env, access_hash) {
        Some(EscrowState::Locked(funds)) => funds,
        _ => return Err(RemittanceError::Inactive),
    };
    if funds.depositor != *depositor {
        return Err(RemittanceError::NotDepositor);
    }
    let now = env.ledger().timestamp();
    if now < funds.lock_expiry {
        log!(env, "cancel at {} before expiry {}", now, funds.lock_expiry);
        return Err(RemittanceError::NotExpired);
    }

    storage::write_escrow(env, access_hash, &EscrowState::Canceled);
    sub_from_total(env, funds.amount)?;
    token_client(env)?.transfer(&env.current_contract_address(), depositor, &funds.amount);
    storage::bump_instance(env);

    events::canceled(env, access_hash, depositor, funds.amount);
    Ok(funds.amount)
}

pub fn locked_funds(env: &Env, access_hash: &BytesN<32>) -> Option<LockedFunds> {
    match storage::read_escrow(env, access_hash) {
        Some(EscrowState::Locked(funds)) => Some(funds),
        _ => None,
    }
}

pub fn status(env: &Env, access_hash: &BytesN<32>) -> EscrowStatus {
    storage::read_escrow(env, access_hash)
        .map(|state| state.status())
        .unwrap_or(EscrowStatus::Unused)
}

pub fn extend_ttl(
    env: &Env,
    access_hash: &BytesN<32>,
    extend_to: u32,
) -> Result<(), RemittanceError> {
    if !storage::has_escrow(env, access_hash) {
        return Err(RemittanceError::NotFound);
    }
    storage::extend_escrow(env, access_hash, extend_to);
    Ok(())
}
