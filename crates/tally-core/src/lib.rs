//! Core types for tally
//!
//! This crate provides the fundamental types used throughout the tally project:
//!
//! - [`Amount`] - A signed decimal quantity with a currency or commodity unit
//! - [`ClearanceState`] - Whether a transfer is pending, cleared, or unmarked
//! - [`Transfer`] - One account's leg of a transaction
//! - [`Transaction`] - A dated, described event composed of transfers
//! - [`Ledger`] - The append-only collection of transactions for one import
//! - [`AppendListener`] - Capability notified synchronously on each append
//!
//! # Example
//!
//! ```
//! use tally_core::{Amount, Ledger, Transaction, Transfer};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let txn = Transaction::new(
//!     NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
//!     "Consulting Income",
//!     vec![
//!         Transfer::new("Asset:MyBank:Checking", Amount::new(dec!(123.45), "$")),
//!         Transfer::balancing("Income:Nerds, Inc."),
//!     ],
//! );
//!
//! let mut ledger = Ledger::new();
//! ledger.add_transaction(txn);
//!
//! assert_eq!(ledger.len(), 1);
//! assert!(ledger.transactions()[0].balancing_transfer().is_some());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod ledger;
pub mod transaction;

pub use amount::Amount;
pub use ledger::{AppendListener, Ledger};
pub use transaction::{ClearanceState, Transaction, Transfer};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
