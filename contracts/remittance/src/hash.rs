//! Access hash derivation.
//!
//! An access hash commits to the secret material, the recipient who may
//! claim, and the address of this contract instance:
//!
//! ```text
//! sha256(xdr(contract) || xdr(recipient) || secret)
//! ```
//!
//! Binding the recipient means a third party who sees the secret in a pending
//! claim cannot replay it for themselves. Binding the contract address keeps a
//! commitment from being valid on any other deployment.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

use crate::error::RemittanceError;

const ZERO_DIGEST: [u8; 32] = [0; 32];

fn ensure_nonzero(secret: &BytesN<32>) -> Result<(), RemittanceError> {
    if secret.to_array() == ZERO_DIGEST {
        return Err(RemittanceError::ZeroSecret);
    }
    Ok(())
}

pub fn compute_access_hash(
    env: &Env,
    secret: &BytesN<32>,
    recipient: &Address,
) -> Result<BytesN<32>, RemittanceError> {
    ensure_nonzero(secret)?;

    let contract = env.current_contract_address();
    if *recipient == contract {
        return Err(RemittanceError::InvalidRecipient);
    }

    let mut payload = Bytes::new(env);
    payload.append(&contract.to_xdr(env));
    payload.append(&recipient.clone().to_xdr(env));
    payload.append(&Bytes::from(secret.clone()));

    Ok(env.crypto().sha256(&payload).to_bytes())
}

/// Folds two independently chosen secrets into one piece of secret material,
/// so that neither party alone controls the commitment.
pub fn combine_secrets(
    env: &Env,
    secret_a: &BytesN<32>,
    secret_b: &BytesN<32>,
) -> Result<BytesN<32>, RemittanceError> {
    ensure_nonzero(secret_a)?;
    ensure_nonzero(secret_b)?;

    let mut payload = Bytes::from(secret_a.clone());
    payload.append(&Bytes::from(secret_b.clone()));

    Ok(env.crypto().sha256(&payload).to_bytes())
}

pub fn compute_access_hash_pair(
    env: &Env,
    secret_a: &BytesN<32>,
    secret_b: &BytesN<32>,
    recipient: &Address,
) -> Result<BytesN<32>, RemittanceError> {
    let combined = combine_secrets(env, secret_a, secret_b)?;
    compute_access_hash(env, &combined, recipient)
}
