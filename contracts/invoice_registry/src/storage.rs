use soroban_sdk::{contracttype, Env};

use crate::errors::InvoiceError;
use crate::types::Invoice;

// ~5s ledgers: extend below ~1 day, up to ~30 days.
const MIN_TTL: u32 = 17_280;
const BUMP_TTL: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    InvoiceCount,  // instance: u64
    Invoice(u64),  // persistent: Invoice
}

pub fn invoice_count(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::InvoiceCount).unwrap_or(0)
}

/// Bump the counter and return the new value. Ids start at 1.
pub fn next_id(e: &Env) -> u64 {
    let n = invoice_count(e) + 1;
    e.storage().instance().set(&DataKey::InvoiceCount, &n);
    e.storage().instance().extend_ttl(MIN_TTL, BUMP_TTL);
    n
}

pub fn has_invoice(e: &Env, id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Invoice(id))
}

pub fn get_invoice(e: &Env, id: u64) -> Result<Invoice, InvoiceError> {
    let key = DataKey::Invoice(id);
    let invoice: Invoice = e
        .storage()
        .persistent()
        .get(&key)
        .ok_or(InvoiceError::NotFound)?;
    e.storage().persistent().extend_ttl(&key, MIN_TTL, BUMP_TTL);
    Ok(invoice)
}

pub fn put_invoice(e: &Env, invoice: &Invoice) {
    let key = DataKey::Invoice(invoice.id);
    e.storage().persistent().set(&key, invoice);
    e.storage().persistent().extend_ttl(&key, MIN_TTL, BUMP_TTL);
}
