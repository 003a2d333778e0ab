#![no_std]
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::InvoiceError;
pub use types::{Invoice, InvoiceStatus};

#[contract]
pub struct InvoiceRegistry;

#[contractimpl]
impl InvoiceRegistry {
    /// Register an invoice owed to `payee` and return its id.
    ///
    /// Anyone may register; the payee only has to sign for themselves.
    /// Zero amounts are accepted. `due_date` and `metadata_uri` are stored
    /// as given.
    pub fn register(
        e: Env,
        payee: Address,
        amount: i128,
        due_date: u64,
        metadata_uri: String,
    ) -> Result<u64, InvoiceError> {
        payee.require_auth();

        if amount < 0 {
            return Err(InvoiceError::InvalidAmount);
        }

        let id = storage::next_id(&e);
        let invoice = Invoice {
            id,
            payee: payee.clone(),
            payer: None,
            amount,
            due_date,
            is_paid: false,
            metadata_uri,
        };
        storage::put_invoice(&e, &invoice);

        events::created(&e, id, payee, amount);
        log!(&e, "invoice registered", id, amount);
        Ok(id)
    }

    /// Settle invoice `invoice_id` by moving its amount from `payer` to the
    /// payee through `token`.
    ///
    /// The payer must already have approved this contract as spender for at
    /// least the invoice amount. The record is marked paid before the token
    /// is called, so a nested call during the transfer sees `AlreadyPaid`.
    /// If the transfer fails the invocation returns an error and the host
    /// discards the interim write.
    pub fn pay(e: Env, payer: Address, invoice_id: u64, token: Address) -> Result<(), InvoiceError> {
        payer.require_auth();

        let mut invoice = storage::get_invoice(&e, invoice_id)?;
        if invoice.is_paid {
            return Err(InvoiceError::AlreadyPaid);
        }

        invoice.is_paid = true;
        invoice.payer = Some(payer.clone());
        storage::put_invoice(&e, &invoice);

        // nothing to move for a zero-amount invoice
        if invoice.amount > 0 {
            let ledger = token::Client::new(&e, &token);
            let spender = e.current_contract_address();
            let moved = ledger.try_transfer_from(&spender, &payer, &invoice.payee, &invoice.amount);
            if !matches!(moved, Ok(Ok(()))) {
                log!(&e, "transfer rejected", invoice_id, payer);
                return Err(InvoiceError::TransferRejected);
            }
        }

        events::paid(&e, invoice_id, payer);
        log!(&e, "invoice paid", invoice_id);
        Ok(())
    }

    /// Full stored record for `invoice_id`.
    pub fn get_invoice(e: Env, invoice_id: u64) -> Result<Invoice, InvoiceError> {
        storage::get_invoice(&e, invoice_id)
    }

    pub fn has_invoice(e: Env, invoice_id: u64) -> bool {
        storage::has_invoice(&e, invoice_id)
    }

    /// Number of invoices registered so far; also the last id issued.
    pub fn invoice_count(e: Env) -> u64 {
        storage::invoice_count(&e)
    }

    pub fn status(e: Env, invoice_id: u64) -> Result<InvoiceStatus, InvoiceError> {
        Ok(storage::get_invoice(&e, invoice_id)?.status())
    }

    /// Unpaid and past its due date at the current ledger time.
    /// Informational only: `pay` does not look at the due date.
    pub fn is_overdue(e: Env, invoice_id: u64) -> Result<bool, InvoiceError> {
        let invoice = storage::get_invoice(&e, invoice_id)?;
        Ok(!invoice.is_paid && e.ledger().timestamp() > invoice.due_date)
    }
}
