use soroban_sdk::contracterror;

/// Failures surfaced by the registry. Codes are part of the contract ABI.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InvoiceError {
    /// Nothing stored under the requested id.
    NotFound = 1,
    /// The invoice was already settled.
    AlreadyPaid = 2,
    /// The token contract refused `transfer_from` (balance or allowance).
    TransferRejected = 3,
    /// Negative amounts cannot be expressed in the token's smallest unit.
    InvalidAmount = 4,
}
