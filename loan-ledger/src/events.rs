use soroban_sdk::{symbol_short, Address, Env};

// Event emitted when a borrower escrows collateral and opens a loan request
pub fn loan_requested(env: &Env, borrower: Address, amount: i128, interest_rate: u32, duration: u64) {
    let topics = (symbol_short!("requested"), borrower);
    env.events().publish(topics, (amount, interest_rate, duration));
}

// Event emitted when a lender advances the principal
pub fn loan_funded(env: &Env, loan_id: u64, amount: i128, lender: Address, borrower: Address) {
    let topics = (symbol_short!("funded"), loan_id);
    env.events().publish(topics, (amount, lender, borrower));
}

pub fn loan_repaid(
    env: &Env,
    loan_id: u64,
    repayment_amount: i128,
    lender: Address,
    borrower: Address,
) {
    let topics = (symbol_short!("repaid"), loan_id);
    env.events().publish(topics, (repayment_amount, lender, borrower));
}

// Event emitted when the lender seizes collateral of a defaulted loan
pub fn collateral_claimed(
    env: &Env,
    loan_id: u64,
    borrower: Address,
    lender: Address,
    collateral_amount: i128,
) {
    let topics = (symbol_short!("claimed"), loan_id);
    env.events().publish(topics, (borrower, lender, collateral_amount));
}

pub fn collateral_returned(env: &Env, loan_id: u64, borrower: Address, collateral_amount: i128) {
    let topics = (symbol_short!("returned"), loan_id);
    env.events().publish(topics, (borrower, collateral_amount));
}

pub fn ownership_transferred(env: &Env, previous: Address, new_owner: Address) {
    let topics = (symbol_short!("owner"), previous);
    env.events().publish(topics, new_owner);
}
