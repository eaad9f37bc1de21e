use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Validation
    InvalidLtv = 3,
    InvalidAmount = 4,
    InvalidInterestRate = 5,
    InvalidDuration = 6,
    DueDateOverflow = 7,
    ArithmeticOverflow = 8,
    PrincipalTooSmall = 9,
    AmountMismatch = 10,

    // Lifecycle
    LoanNotFound = 11,
    AlreadyFunded = 12,
    NotFunded = 13,
    AlreadyRepaid = 14,
    NotInDefault = 15,
    FundingWindowClosed = 16,
    CollateralAlreadyClaimed = 17,
    NotRepaid = 18,
    CollateralAlreadyReturned = 19,

    // Authorization
    Unauthorized = 20,
    NotLender = 21,
    NotBorrower = 22,

    // Token contract rejected a transfer
    TransferFailed = 23,
}
