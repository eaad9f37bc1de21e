#![no_std]

use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};

mod access;
mod error;
mod events;
mod storage;
mod types;

use access::AccessOwner;
pub use error::Error;
pub use types::{LedgerConfig, Loan, LoanStatus};

use storage::{
    extend_instance, has_owner, read_config, read_loan, read_next_loan_id, write_config,
    write_loan, write_next_loan_id, FIRST_LOAN_ID,
};

const PERCENT: i128 = 100;
const MAX_LTV: u32 = 100;

/// principal = floor(ltv * collateral / 100)
fn compute_principal(ltv: u32, collateral: i128) -> Result<i128, Error> {
    let scaled = collateral
        .checked_mul(ltv as i128)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(scaled / PERCENT)
}

/// repayment = amount + floor(amount * interest_rate / 100)
fn compute_repayment(amount: i128, interest_rate: u32) -> Result<i128, Error> {
    let interest = amount
        .checked_mul(interest_rate as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / PERCENT;
    amount.checked_add(interest).ok_or(Error::ArithmeticOverflow)
}

/// Moves `amount` of the ledger's token. A rejected transfer surfaces as
/// `TransferFailed` so the caller can bail out before writing state.
fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}

fn load_loan(env: &Env, loan_id: u64) -> Result<Loan, Error> {
    read_loan(env, loan_id).ok_or(Error::LoanNotFound)
}

#[contract]
pub struct LoanLedger;

#[contractimpl]
impl LoanLedger {
    /// Initialize the ledger.
    /// `owner` - privileged identity for owner-gated operations
    /// `token` - token contract used for collateral, principal and repayment
    /// `ltv`   - loan-to-value percentage, 0..=100, fixed for the ledger's lifetime
    pub fn initialize(env: Env, owner: Address, token: Address, ltv: u32) -> Result<(), Error> {
        if has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if ltv > MAX_LTV {
            return Err(Error::InvalidLtv);
        }

        owner.require_auth();

        AccessOwner::install(&env, &owner);
        write_config(&env, &LedgerConfig { ltv, token });
        write_next_loan_id(&env, FIRST_LOAN_ID);
        extend_instance(&env);

        log!(&env, "LoanLedger: Initialized, ltv={}", ltv);
        Ok(())
    }

    /// Upgrade the contract WASM. Only callable by the owner.
    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        AccessOwner::load(&env)?.require(&caller)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        extend_instance(&env);
        let access = AccessOwner::load(&env)?;
        let previous = access.owner().clone();
        access.transfer(&env, &caller, &new_owner)?;

        events::ownership_transferred(&env, previous, new_owner);
        Ok(())
    }

    /// Bump instance TTL — can be called by anyone to keep the ledger alive.
    pub fn bump_instance(env: Env) {
        extend_instance(&env);
    }

    // ==========================================================
    // Loan lifecycle
    // ==========================================================

    /// Escrow `collateral_value` and open a loan request.
    /// Principal is derived from the ledger's LTV; the loan falls due
    /// `duration` seconds from now.
    pub fn request_loan(
        env: Env,
        borrower: Address,
        collateral_value: i128,
        interest_rate: u32,
        duration: u64,
    ) -> Result<u64, Error> {
        borrower.require_auth();
        extend_instance(&env);

        if collateral_value <= 0 {
            return Err(Error::InvalidAmount);
        }
        if interest_rate == 0 {
            return Err(Error::InvalidInterestRate);
        }
        if duration == 0 {
            return Err(Error::InvalidDuration);
        }

        let config = read_config(&env)?;
        let due_date = env
            .ledger()
            .timestamp()
            .checked_add(duration)
            .ok_or(Error::DueDateOverflow)?;
        let amount = compute_principal(config.ltv, collateral_value)?;
        if amount <= 0 {
            return Err(Error::PrincipalTooSmall);
        }

        let loan_id = read_next_loan_id(&env);
        let next_id = loan_id.checked_add(1).ok_or(Error::ArithmeticOverflow)?;

        transfer(
            &env,
            &config.token,
            &borrower,
            &env.current_contract_address(),
            collateral_value,
        )?;

        let loan = Loan {
            borrower: borrower.clone(),
            lender: None,
            collateral_amount: collateral_value,
            amount,
            interest_rate,
            due_date,
            status: LoanStatus::Requested,
            collateral_returned: false,
        };
        write_loan(&env, loan_id, &loan);
        write_next_loan_id(&env, next_id);

        events::loan_requested(&env, borrower.clone(), amount, interest_rate, duration);

        log!(
            &env,
            "Loan requested: id={}, borrower={}, collateral={}, amount={}, due={}",
            loan_id, borrower, collateral_value, amount, due_date
        );

        Ok(loan_id)
    }

    /// Advance exactly the loan principal from `lender` to the borrower.
    pub fn fund_loan(env: Env, loan_id: u64, lender: Address, supplied_value: i128) -> Result<(), Error> {
        lender.require_auth();
        extend_instance(&env);

        let mut loan = load_loan(&env, loan_id)?;
        if loan.status != LoanStatus::Requested {
            return Err(Error::AlreadyFunded);
        }
        if supplied_value != loan.amount {
            return Err(Error::AmountMismatch);
        }
        if env.ledger().timestamp() >= loan.due_date {
            return Err(Error::FundingWindowClosed);
        }

        let config = read_config(&env)?;
        transfer(&env, &config.token, &lender, &loan.borrower, loan.amount)?;

        loan.status = LoanStatus::Funded;
        loan.lender = Some(lender.clone());
        write_loan(&env, loan_id, &loan);

        events::loan_funded(&env, loan_id, loan.amount, lender.clone(), loan.borrower.clone());

        log!(&env, "Loan funded: id={}, lender={}, amount={}", loan_id, lender, loan.amount);
        Ok(())
    }

    /// Pay principal plus flat interest to the lender. Anyone may repay on
    /// the borrower's behalf. The due date is not checked: repayment stays
    /// possible until the lender has claimed the collateral.
    pub fn repay_loan(env: Env, loan_id: u64, payer: Address, supplied_value: i128) -> Result<(), Error> {
        payer.require_auth();
        extend_instance(&env);

        let mut loan = load_loan(&env, loan_id)?;
        match loan.status {
            LoanStatus::Funded => {}
            LoanStatus::Requested => return Err(Error::NotFunded),
            LoanStatus::Repaid => return Err(Error::AlreadyRepaid),
            LoanStatus::Defaulted => return Err(Error::CollateralAlreadyClaimed),
        }
        let lender = loan.lender.clone().ok_or(Error::NotFunded)?;

        let repayment_amount = compute_repayment(loan.amount, loan.interest_rate)?;
        if supplied_value != repayment_amount {
            return Err(Error::AmountMismatch);
        }

        let config = read_config(&env)?;
        transfer(&env, &config.token, &payer, &lender, repayment_amount)?;

        loan.status = LoanStatus::Repaid;
        write_loan(&env, loan_id, &loan);

        events::loan_repaid(&env, loan_id, repayment_amount, lender, loan.borrower.clone());

        log!(&env, "Loan repaid: id={}, payer={}, amount={}", loan_id, payer, repayment_amount);
        Ok(())
    }

    /// Lender seizes the escrowed collateral once the loan is past due and
    /// unpaid. The loan moves to `Defaulted`, which blocks any second claim
    /// and any late repayment.
    pub fn claim_collateral(env: Env, loan_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        extend_instance(&env);

        let mut loan = load_loan(&env, loan_id)?;
        if let Some(lender) = &loan.lender {
            if *lender != caller {
                return Err(Error::NotLender);
            }
        }
        if env.ledger().timestamp() <= loan.due_date {
            return Err(Error::NotInDefault);
        }
        match loan.status {
            LoanStatus::Funded => {}
            LoanStatus::Requested => return Err(Error::NotFunded),
            LoanStatus::Repaid => return Err(Error::AlreadyRepaid),
            LoanStatus::Defaulted => return Err(Error::CollateralAlreadyClaimed),
        }
        // Funded loans always carry a lender
        let lender = loan.lender.clone().ok_or(Error::NotLender)?;

        let config = read_config(&env)?;
        transfer(
            &env,
            &config.token,
            &env.current_contract_address(),
            &lender,
            loan.collateral_amount,
        )?;

        loan.status = LoanStatus::Defaulted;
        write_loan(&env, loan_id, &loan);

        events::collateral_claimed(
            &env,
            loan_id,
            loan.borrower.clone(),
            lender.clone(),
            loan.collateral_amount,
        );

        log!(
            &env,
            "Collateral claimed: id={}, lender={}, amount={}",
            loan_id, lender, loan.collateral_amount
        );
        Ok(())
    }

    /// Return escrowed collateral to the borrower of a repaid loan.
    pub fn withdraw_collateral(env: Env, loan_id: u64, borrower: Address) -> Result<(), Error> {
        borrower.require_auth();
        extend_instance(&env);

        let mut loan = load_loan(&env, loan_id)?;
        if loan.borrower != borrower {
            return Err(Error::NotBorrower);
        }
        if loan.status != LoanStatus::Repaid {
            return Err(Error::NotRepaid);
        }
        if loan.collateral_returned {
            return Err(Error::CollateralAlreadyReturned);
        }

        let config = read_config(&env)?;
        transfer(
            &env,
            &config.token,
            &env.current_contract_address(),
            &borrower,
            loan.collateral_amount,
        )?;

        loan.collateral_returned = true;
        write_loan(&env, loan_id, &loan);

        events::collateral_returned(&env, loan_id, borrower.clone(), loan.collateral_amount);

        log!(&env, "Collateral returned: id={}, amount={}", loan_id, loan.collateral_amount);
        Ok(())
    }

    // --- Views ---

    pub fn get_loan(env: Env, loan_id: u64) -> Option<Loan> {
        extend_instance(&env);
        read_loan(&env, loan_id)
    }

    pub fn get_ltv(env: Env) -> Result<u32, Error> {
        extend_instance(&env);
        Ok(read_config(&env)?.ltv)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        extend_instance(&env);
        Ok(read_config(&env)?.token)
    }

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        extend_instance(&env);
        Ok(AccessOwner::load(&env)?.owner().clone())
    }

    /// Id the next `request_loan` will receive.
    pub fn get_next_loan_id(env: Env) -> u64 {
        extend_instance(&env);
        read_next_loan_id(&env)
    }

    /// Exact value `repay_loan` expects for this loan.
    pub fn get_repayment_amount(env: Env, loan_id: u64) -> Result<i128, Error> {
        extend_instance(&env);
        let loan = load_loan(&env, loan_id)?;
        compute_repayment(loan.amount, loan.interest_rate)
    }

    /// True when the lender could claim the collateral right now.
    pub fn is_defaultable(env: Env, loan_id: u64) -> bool {
        extend_instance(&env);
        match read_loan(&env, loan_id) {
            Some(loan) => {
                loan.status == LoanStatus::Funded && env.ledger().timestamp() > loan.due_date
            }
            None => false,
        }
    }
}
