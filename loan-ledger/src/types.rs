use soroban_sdk::{contracttype, Address};

/// Lifecycle stage of a loan. `Repaid` and `Defaulted` are terminal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoanStatus {
    Requested,
    Funded,
    Repaid,
    // Collateral claimed by the lender after the due date
    Defaulted,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Loan {
    pub borrower: Address,

    // None until the loan is funded
    pub lender: Option<Address>,

    pub collateral_amount: i128,

    // Principal advanced to the borrower
    pub amount: i128,

    // Flat percentage, charged once at repayment
    pub interest_rate: u32,

    pub due_date: u64,

    pub status: LoanStatus,

    pub collateral_returned: bool,
}

impl Loan {
    pub fn is_funded(&self) -> bool {
        self.status != LoanStatus::Requested
    }

    pub fn is_repaid(&self) -> bool {
        self.status == LoanStatus::Repaid
    }
}

/// Construction-time configuration. Never mutated after `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    // Loan-to-value, percent of collateral advanced as principal
    pub ltv: u32,

    // Token contract that denominates both collateral and principal
    pub token: Address,
}
