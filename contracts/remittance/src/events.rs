use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub(crate) fn locked(
    env: &Env,
    access_hash: &BytesN<32>,
    depositor: &Address,
    amount: i128,
    lock_expiry: u64,
) {
    env.events().publish(
        (symbol_short!("locked"), access_hash.clone()),
        (depositor.clone(), amount, lock_expiry),
    );
}

pub(crate) fn claimed(env: &Env, access_hash: &BytesN<32>, recipient: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("claimed"), access_hash.clone()),
        (recipient.clone(), amount),
    );
}

pub(crate) fn canceled(env: &Env, access_hash: &BytesN<32>, depositor: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("canceled"), access_hash.clone()),
        (depositor.clone(), amount),
    );
}

pub(crate) fn max_lock_period_changed(env: &Env, period: u64) {
    env.events().publish((symbol_short!("max_lock"),), period);
}

pub(crate) fn shut_down(env: &Env, owner: &Address) {
    env.events().publish((symbol_short!("shutdown"),), owner.clone());
}
