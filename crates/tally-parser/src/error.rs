//! Parse error types.
//!
//! Errors carry the raw line, header, or token text that triggered them
//! so messages are directly actionable without re-reading the file.
//! Parsing is all-or-nothing: the first malformed block unwinds out of
//! the parse with no partial recovery.

use thiserror::Error;

/// Header, body-count, or duplicate-blank-amount violation in one block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// The header line did not start with a `YYYY/M/D` date.
    #[error("expected date, found '{0}'")]
    ExpectedDate(String),
    /// No description followed the date on the header line.
    #[error("could not find description in '{0}'")]
    MissingDescription(String),
    /// The date matched the grammar but is not a real calendar date.
    #[error("'{0}' is not a valid calendar date")]
    InvalidDate(String),
    /// The block had a header but no transfer lines.
    #[error("failed to find any transfers for '{0}'")]
    NoTransfers(String),
    /// A body line matched none of the transfer-line alternatives.
    #[error("unable to parse transfer: '{0}'")]
    UnparsableTransfer(String),
    /// More than one transfer line left its amount blank.
    #[error("found multiple transfers with no amount specified for '{0}'")]
    MultipleBlankAmounts(String),
}

/// Unparsable amount token or unrecognized status marker on one line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The raw token matched neither cash nor commodity notation, or its
    /// numeral failed decimal conversion.
    #[error("unable to parse amount string: '{0}'")]
    BadAmount(String),
    /// The status marker was neither empty, `!`, nor `*`.
    #[error("unable to parse status from: '{0}'")]
    BadStatus(String),
}

/// Any failure while parsing ledger text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A block could not be formed into a transaction.
    #[error("malformed transaction: {0}")]
    MalformedTransaction(#[from] TransactionError),
    /// A transfer's amount or status field could not be parsed.
    #[error("malformed transfer: {0}")]
    MalformedTransfer(#[from] TransferError),
}
