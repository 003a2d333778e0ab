use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invoice {
    pub id: u64,
    pub payee: Address,
    pub payer: Option<Address>, // set once, by whoever pays
    pub amount: i128,           // token's smallest unit
    pub due_date: u64,          // unix seconds, informational
    pub is_paid: bool,
    pub metadata_uri: String,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
}

impl Invoice {
    pub fn status(&self) -> InvoiceStatus {
        if self.is_paid {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Unpaid
        }
    }
}
