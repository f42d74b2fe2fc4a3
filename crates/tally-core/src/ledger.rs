//! The ledger: an append-only transaction sequence with append listeners.

use std::fmt;

use crate::Transaction;

/// Capability notified synchronously whenever a transaction is appended.
///
/// External tooling (e.g. the bank-reconciliation matcher, which indexes
/// transfers by absolute amount) registers a listener before the import
/// runs and sees every transaction in append order.
pub trait AppendListener {
    /// Called with the just-appended transaction.
    fn transaction_added(&mut self, transaction: &Transaction);
}

/// The in-memory collection of parsed transactions for one input file.
///
/// The sequence grows monotonically during a single import pass and is
/// never reordered or truncated. The ledger owns its transactions and is
/// discarded with the process; there is no persistence.
#[derive(Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    listeners: Vec<Box<dyn AppendListener>>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction and notify every registered listener.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
        if let Some(added) = self.transactions.last() {
            for listener in &mut self.listeners {
                listener.transaction_added(added);
            }
        }
    }

    /// Register a listener to be notified on each append.
    pub fn register_listener(&mut self, listener: Box<dyn AppendListener>) {
        self.listeners.push(listener);
    }

    /// Read-only ordered view of the imported transactions.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of imported transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.transactions)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
