use soroban_sdk::contracterror;

/// Failure codes surfaced by every remittance entry point.
///
/// A call that returns one of these leaves storage and balances exactly as
/// they were before the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RemittanceError {
    /// Deposit amount is zero or negative.
    InvalidAmount = 1,
    /// Requested lock period exceeds the current ceiling.
    PolicyViolation = 2,
    /// Access hash was already claimed or canceled.
    AlreadyUsed = 3,
    /// Contract is shut down, or the escrow is not active.
    Inactive = 4,
    /// No active escrow matches the presented secret.
    NotFound = 5,
    NotDepositor = 6,
    NotExpired = 7,
    Unauthorized = 8,
    /// Secret material is the all-zero digest.
    ZeroSecret = 9,
    /// Recipient cannot be bound into a usable commitment.
    InvalidRecipient = 10,
    Overflow = 11,
}
