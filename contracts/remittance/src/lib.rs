//! Hash-locked remittance escrow for Soroban.
//!
//! A depositor locks tokens under an access hash that commits to a secret, the
//! intended recipient and this contract's address. The recipient claims by
//! revealing the secret; if nobody claims, the depositor can cancel once the
//! lock period has passed. Every access hash is single use.

#![no_std]
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env};

mod error;
mod events;
mod hash;
mod ledger;
mod policy;
mod storage;

pub use error::RemittanceError;
pub use storage::{EscrowStatus, LockedFunds};

/// Ceiling suggested for new deployments: 100 days.
pub const DEFAULT_MAX_LOCK_PERIOD: u64 = 100 * 24 * 3600;

#[contract]
pub struct RemittanceContract;

#[contractimpl]
impl RemittanceContract {
    pub fn __constructor(env: Env, owner: Address, token: Address, max_lock_period: u64) {
        storage::write_config(&env, &owner, &token, max_lock_period);
        storage::bump_instance(&env);
        log!(&env, "remittance deployed, max lock period {}", max_lock_period);
    }

    // Access hashes

    pub fn compute_access_hash(
        env: Env,
        secret: BytesN<32>,
        recipient: Address,
    ) -> Result<BytesN<32>, RemittanceError> {
        hash::compute_access_hash(&env, &secret, &recipient)
    }

    pub fn compute_access_hash_pair(
        env: Env,
        secret_a: BytesN<32>,
        secret_b: BytesN<32>,
        recipient: Address,
    ) -> Result<BytesN<32>, RemittanceError> {
        hash::compute_access_hash_pair(&env, &secret_a, &secret_b, &recipient)
    }

    // Escrow ledger

    pub fn lock(
        env: Env,
        depositor: Address,
        access_hash: BytesN<32>,
        lock_period: u64,
        amount: i128,
    ) -> Result<(), RemittanceError> {
        ledger::lock(&env, &depositor, &access_hash, lock_period, amount)
    }

    pub fn claim(
        env: Env,
        recipient: Address,
        secret: BytesN<32>,
    ) -> Result<i128, RemittanceError> {
        ledger::claim(&env, &recipient, &secret)
    }

    /// Claims an escrow whose hash was built with [`Self::compute_access_hash_pair`].
    pub fn claim_with_secrets(
        env: Env,
        recipient: Address,
        secret_a: BytesN<32>,
        secret_b: BytesN<32>,
    ) -> Result<i128, RemittanceError> {
        let combined = hash::combine_secrets(&env, &secret_a, &secret_b)?;
        ledger::claim(&env, &recipient, &combined)
    }

    pub fn cancel(
        env: Env,
        depositor: Address,
        access_hash: BytesN<32>,
    ) -> Result<i128, RemittanceError> {
        ledger::cancel(&env, &depositor, &access_hash)
    }

    /// Active escrow under `access_hash`, or `None` if it is unused or spent.
    pub fn locked_funds(env: Env, access_hash: BytesN<32>) -> Option<LockedFunds> {
        ledger::locked_funds(&env, &access_hash)
    }

    pub fn balance(env: Env, access_hash: BytesN<32>) -> i128 {
        ledger::locked_funds(&env, &access_hash)
            .map(|funds| funds.amount)
            .unwrap_or(0)
    }

    pub fn escrow_status(env: Env, access_hash: BytesN<32>) -> EscrowStatus {
        ledger::status(&env, &access_hash)
    }

    /// Sum of every active escrow.
    pub fn total_locked(env: Env) -> i128 {
        storage::read_total_locked(&env)
    }

    pub fn extend_escrow_ttl(
        env: Env,
        access_hash: BytesN<32>,
        extend_to: u32,
    ) -> Result<(), RemittanceError> {
        ledger::extend_ttl(&env, &access_hash, extend_to)
    }

    // Administration

    pub fn change_max_lock_period(
        env: Env,
        caller: Address,
        period: u64,
    ) -> Result<(), RemittanceError> {
        policy::set_max_lock_period(&env, &caller, period)
    }

    pub fn shutdown(env: Env, caller: Address) -> Result<(), RemittanceError> {
        policy::shut_down(&env, &caller)
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::read_owner(&env)
    }

    pub fn token(env: Env) -> Option<Address> {
        storage::read_token(&env)
    }

    pub fn max_lock_period(env: Env) -> u64 {
        storage::read_max_lock_period(&env)
    }

    pub fn is_shut_down(env: Env) -> bool {
        storage::read_shut_down(&env)
    }
}
