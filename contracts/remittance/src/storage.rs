use soroban_sdk::{contracttype, Address, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const ESCROW_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const ESCROW_LIFETIME_THRESHOLD: u32 = ESCROW_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    MaxLockPeriod,
    ShutDown,
    TotalLocked,
    Escrow(BytesN<32>),
}

/// Funds held under one access hash.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockedFunds {
    pub amount: i128,
    /// Ledger timestamp from which the depositor may cancel.
    pub lock_expiry: u64,
    pub depositor: Address,
}

/// Stored slot for an access hash. A missing slot means the hash was never
/// used; the terminal variants keep a spent hash from ever being locked again.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EscrowState {
    Locked(LockedFunds),
    Claimed,
    Canceled,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum EscrowStatus {
    Unused = 0,
    Locked = 1,
    Claimed = 2,
    Canceled = 3,
}

impl EscrowState {
    pub fn status(&self) -> EscrowStatus {
        match self {
            EscrowState::Locked(_) => EscrowStatus::Locked,
            EscrowState::Claimed => EscrowStatus::Claimed,
            EscrowState::Canceled => EscrowStatus::Canceled,
        }
    }
}

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Configuration written once by the constructor.

pub(crate) fn write_config(env: &Env, owner: &Address, token: &Address, max_lock_period: u64) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Owner, owner);
    instance.set(&DataKey::Token, token);
    instance.set(&DataKey::MaxLockPeriod, &max_lock_period);
    instance.set(&DataKey::ShutDown, &false);
    instance.set(&DataKey::TotalLocked, &0i128);
}

pub(crate) fn read_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub(crate) fn read_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Token)
}

pub(crate) fn read_max_lock_period(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::MaxLockPeriod)
        .unwrap_or(0)
}

pub(crate) fn write_max_lock_period(env: &Env, period: u64) {
    env.storage().instance().set(&DataKey::MaxLockPeriod, &period);
}

pub(crate) fn read_shut_down(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::ShutDown)
        .unwrap_or(false)
}

pub(crate) fn write_shut_down(env: &Env) {
    env.storage().instance().set(&DataKey::ShutDown, &true);
}

pub(crate) fn read_total_locked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0)
}

pub(crate) fn write_total_locked(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalLocked, &total);
}

// Escrow slots live in persistent storage so spent hashes outlive the
// instance's working set.

pub(crate) fn read_escrow(env: &Env, access_hash: &BytesN<32>) -> Option<EscrowState> {
    let key = DataKey::Escrow(access_hash.clone());
    let state = env.storage().persistent().get(&key);
    if state.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, ESCROW_LIFETIME_THRESHOLD, ESCROW_BUMP_AMOUNT);
    }
    state
}

pub(crate) fn write_escrow(env: &Env, access_hash: &BytesN<32>, state: &EscrowState) {
    let key = DataKey::Escrow(access_hash.clone());
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, ESCROW_LIFETIME_THRESHOLD, ESCROW_BUMP_AMOUNT);
}

pub(crate) fn has_escrow(env: &Env, access_hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Escrow(access_hash.clone()))
}

pub(crate) fn extend_escrow(env: &Env, access_hash: &BytesN<32>, extend_to: u32) {
    env.storage().persistent().extend_ttl(
        &DataKey::Escrow(access_hash.clone()),
        extend_to,
        extend_to,
    );
}
