//! Transaction and transfer types.
//!
//! A [`Transaction`] records one dated financial event as an ordered list
//! of [`Transfer`]s, one per account leg. At most one transfer may omit
//! its amount; that leg implicitly balances the transaction to zero. The
//! parser enforces the invariant when forming transactions; once formed,
//! a transaction is never mutated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Amount;

/// Clearance state of a transfer, from the optional leading marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearanceState {
    /// No marker present
    #[default]
    Default,
    /// Marked with `!`
    Pending,
    /// Marked with `*`
    Cleared,
}

impl ClearanceState {
    /// The marker text for this state, empty for [`Self::Default`].
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Pending => "!",
            Self::Cleared => "*",
        }
    }
}

impl fmt::Display for ClearanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One account's leg of a transaction.
///
/// The account is a hierarchical colon-delimited path kept as opaque
/// text (e.g. `Asset:MyBank:Checking`). The amount is either a complete
/// [`Amount`] or absent for the balancing leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// The account path for this transfer
    pub account: String,
    /// The transferred amount, or `None` for the balancing transfer
    pub amount: Option<Amount>,
    /// Clearance state from the optional leading marker
    pub status: ClearanceState,
}

impl Transfer {
    /// Create a transfer with a complete amount.
    #[must_use]
    pub fn new(account: impl Into<String>, amount: Amount) -> Self {
        Self {
            account: account.into(),
            amount: Some(amount),
            status: ClearanceState::Default,
        }
    }

    /// Create a transfer with no amount, to be balanced by the ledger.
    #[must_use]
    pub fn balancing(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            amount: None,
            status: ClearanceState::Default,
        }
    }

    /// Set the clearance state.
    #[must_use]
    pub const fn with_status(mut self, status: ClearanceState) -> Self {
        self.status = status;
        self
    }

    /// Whether this is the balancing transfer (no amount given).
    #[must_use]
    pub const fn is_balancing(&self) -> bool {
        self.amount.is_none()
    }
}

/// One dated, described financial event composed of transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction date (no time component)
    pub date: NaiveDate,
    /// Free-text description from the header line
    pub description: String,
    /// Ordered transfers; at least one, at most one balancing
    pub transfers: Vec<Transfer>,
}

impl Transaction {
    /// Create a new transaction.
    #[must_use]
    pub fn new(date: NaiveDate, description: impl Into<String>, transfers: Vec<Transfer>) -> Self {
        Self {
            date,
            description: description.into(),
            transfers,
        }
    }

    /// The balancing transfer, if this transaction has one.
    #[must_use]
    pub fn balancing_transfer(&self) -> Option<&Transfer> {
        self.transfers.iter().find(|t| t.is_balancing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_clearance_state_markers() {
        assert_eq!(ClearanceState::Default.marker(), "");
        assert_eq!(ClearanceState::Pending.marker(), "!");
        assert_eq!(ClearanceState::Cleared.marker(), "*");
        assert_eq!(ClearanceState::default(), ClearanceState::Default);
    }

    #[test]
    fn test_transfer_new() {
        let t = Transfer::new("Asset:Checking", Amount::new(dec!(5), "$"));
        assert_eq!(t.account, "Asset:Checking");
        assert_eq!(t.amount, Some(Amount::new(dec!(5), "$")));
        assert_eq!(t.status, ClearanceState::Default);
        assert!(!t.is_balancing());
    }

    #[test]
    fn test_transfer_balancing() {
        let t = Transfer::balancing("Income:Nerds, Inc.");
        assert!(t.is_balancing());
        assert_eq!(t.amount, None);
    }

    #[test]
    fn test_transfer_with_status() {
        let t = Transfer::balancing("Asset:Checking").with_status(ClearanceState::Cleared);
        assert_eq!(t.status, ClearanceState::Cleared);
    }

    #[test]
    fn test_balancing_transfer_lookup() {
        let txn = Transaction::new(
            date(2022, 7, 14),
            "Simple Transaction",
            vec![
                Transfer::new("Asset:Checking", Amount::new(dec!(123.45), "$")),
                Transfer::balancing("Income:Nerds, Inc."),
            ],
        );
        let balancing = txn.balancing_transfer().unwrap();
        assert_eq!(balancing.account, "Income:Nerds, Inc.");

        let txn = Transaction::new(
            date(2022, 7, 14),
            "Fully Specified",
            vec![Transfer::new("Asset:Checking", Amount::new(dec!(1), "$"))],
        );
        assert!(txn.balancing_transfer().is_none());
    }
}
