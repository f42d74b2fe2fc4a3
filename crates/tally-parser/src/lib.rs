//! Parser for the plain-text ledger format.
//!
//! The input is a human-authored ledger file: blocks of contiguous
//! non-empty lines separated by blank lines, where each block is either a
//! transaction, a rule directive (skipped), or pure comments (dropped).
//! This crate segments the line sequence into blocks, strips comments,
//! and applies the transaction grammar, producing the ordered transaction
//! sequence for the whole file.
//!
//! Parsing is deterministic, single-pass, and all-or-nothing: the first
//! malformed block aborts the parse with an error naming the offending
//! line or token.
//!
//! # Example
//!
//! ```
//! let source = "\
//! 2022/01/02 Consulting Income
//!     Asset:MyBank:Checking  $123.45
//!     Income:Nerds, Inc.
//! ";
//!
//! let transactions = tally_parser::parse(source).unwrap();
//! assert_eq!(transactions.len(), 1);
//! assert_eq!(transactions[0].description, "Consulting Income");
//! assert_eq!(transactions[0].transfers.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod error;
pub mod scan;
pub mod transaction;

pub use amount::parse_raw_amount;
pub use error::{ParseError, TransactionError, TransferError};
pub use transaction::{form_transaction, match_transfer_line, parse_status, TransferLine};

use tally_core::Transaction;

/// Parse a whole ledger source text into its transaction sequence.
pub fn parse(source: &str) -> Result<Vec<Transaction>, ParseError> {
    let lines: Vec<&str> = source.lines().collect();
    parse_lines(&lines)
}

/// Parse an indexed line sequence into its transaction sequence.
///
/// Repeatedly locates the next span of contiguous non-empty lines,
/// strips comments, skips blocks that are empty after stripping or are
/// rule directives, and forms a transaction from everything else.
pub fn parse_lines(lines: &[&str]) -> Result<Vec<Transaction>, ParseError> {
    let mut transactions = Vec::new();
    let mut next = 0;
    while let Some(start) = scan::scan_to_nonempty(lines, next) {
        // the start line has text, so the span end always exists
        let end = scan::scan_to_last_nonempty(lines, start).unwrap_or(start);
        let block = scan::strip_comments(&lines[start..=end]);
        if !block.is_empty() && !scan::is_rule(&block) {
            transactions.push(transaction::form_transaction(&block)?);
        }
        next = end + 1;
    }
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_empty_source() {
        assert_eq!(parse("").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_comment_only_source() {
        let source = "; just a comment\n\n  ; another one\n";
        assert_eq!(parse(source).unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_skips_rules() {
        let source = "\
= expr Account:Foo
    Account:Bar  $1

2022/01/02 Real Transaction
    Asset:Checking  $5
    Expenses:Misc
";
        let transactions = parse(source).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].description, "Real Transaction");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let source = "\
2022/01/02 Consulting Income
    Asset:MyBank:Checking  $123.45
    Income:Nerds, Inc.

2022/01/03 20m CW HF Radio Kit
    Expenses:Hobby:Ham Radio  $75
    Asset:MyBank:Checking
";
        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }

    proptest! {
        /// Blank and whitespace-only line sequences never yield transactions.
        #[test]
        fn test_whitespace_only_input_yields_empty_ledger(
            lines in proptest::collection::vec(" |\t| {1,8}", 0..32)
        ) {
            let source = lines.join("\n");
            prop_assert_eq!(parse(&source).unwrap(), Vec::new());
        }
    }
}
