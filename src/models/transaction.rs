use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Outcome,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Transaction {
    pub kind: TransactionKind, // Direction of the money movement
    pub title: String,         // What the entry was for
    pub amount: u32,           // Rubles, always positive; sign comes from kind
    pub date: String,          // Preformatted display date
}
