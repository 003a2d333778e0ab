use soroban_sdk::{symbol_short, Address, Env};

// topics: ("created", id)  data: (payee, amount)
pub fn created(e: &Env, id: u64, payee: Address, amount: i128) {
    e.events()
        .publish((symbol_short!("created"), id), (payee, amount));
}

// topics: ("paid", id)  data: payer
pub fn paid(e: &Env, id: u64, payer: Address) {
    e.events().publish((symbol_short!("paid"), id), payer);
}
