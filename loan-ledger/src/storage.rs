use soroban_sdk::{contracttype, Address, Env};

use crate::error::Error;
use crate::types::{LedgerConfig, Loan};

// ---------- TTL constants ----------
// Testnet: ~5s per ledger
// 30 days  ≈  518_400 ledgers
// 180 days ≈ 3_110_400 ledgers
const INSTANCE_LIFETIME_THRESHOLD: u32 = 100_800; // ~7 days
const INSTANCE_BUMP_AMOUNT: u32 = 518_400;        // bump to ~30 days
const LOAN_LIFETIME_THRESHOLD: u32 = 518_400;     // ~30 days
const LOAN_BUMP_AMOUNT: u32 = 3_110_400;          // bump to ~180 days

pub const FIRST_LOAN_ID: u64 = 1;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    NextLoanId,
    Loan(u64),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ============ OWNER ============

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

// ============ CONFIG ============

pub fn read_config(env: &Env) -> Result<LedgerConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

// ============ LOAN IDS ============

pub fn read_next_loan_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextLoanId)
        .unwrap_or(FIRST_LOAN_ID)
}

pub fn write_next_loan_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextLoanId, &id);
}

// ============ LOANS ============

/// A missing entry and a zero-principal record both read as "no such loan".
pub fn read_loan(env: &Env, loan_id: u64) -> Option<Loan> {
    let key = DataKey::Loan(loan_id);
    let loan: Loan = env.storage().persistent().get(&key)?;
    if loan.amount <= 0 {
        return None;
    }
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
    Some(loan)
}

pub fn write_loan(env: &Env, loan_id: u64, loan: &Loan) {
    let key = DataKey::Loan(loan_id);
    env.storage().persistent().set(&key, loan);
    env.storage()
        .persistent()
        .extend_ttl(&key, LOAN_LIFETIME_THRESHOLD, LOAN_BUMP_AMOUNT);
}
