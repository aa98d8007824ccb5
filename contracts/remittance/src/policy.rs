//! Owner capability check, lock-period ceiling and the shutdown switch.
//!
//! The escrow ledger only asks two questions of this module: is the contract
//! still accepting deposits, and what is the current ceiling. Everything that
//! knows about the owner stays here.

use soroban_sdk::{log, Address, Env};

use crate::error::RemittanceError;
use crate::events;
use crate::storage;

/// Authenticates `caller` and checks it is the configured owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), RemittanceError> {
    caller.require_auth();

    match storage::read_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => Err(RemittanceError::Unauthorized),
    }
}

pub fn ensure_running(env: &Env) -> Result<(), RemittanceError> {
    if storage::read_shut_down(env) {
        return Err(RemittanceError::Inactive);
    }
    Ok(())
}

pub fn ensure_within_ceiling(env: &Env, lock_period: u64) -> Result<(), RemittanceError> {
    let ceiling = storage::read_max_lock_period(env);
    if lock_period > ceiling {
        log!(env, "lock period {} exceeds ceiling {}", lock_period, ceiling);
        return Err(RemittanceError::PolicyViolation);
    }
    Ok(())
}

/// Escrows already locked keep the expiry computed when they were created.
pub fn set_max_lock_period(
    env: &Env,
    caller: &Address,
    period: u64,
) -> Result<(), RemittanceError> {
    require_owner(env, caller)?;

    storage::write_max_lock_period(env, period);
    storage::bump_instance(env);

    events::max_lock_period_changed(env, period);
    Ok(())
}

/// Stops new deposits for good. Claims and cancels on escrows that are
/// already locked keep working.
pub fn shut_down(env: &Env, caller: &Address) -> Result<(), RemittanceError> {
    require_owner(env, caller)?;

    if storage::read_shut_down(env) {
        return Ok(());
    }

    storage::write_shut_down(env);
    storage::bump_instance(env);

    events::shut_down(env, caller);
    Ok(())
}
