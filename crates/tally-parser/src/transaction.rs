//! The transaction grammar: header line, transfer lines, status markers.
//!
//! A comment-stripped, non-rule block is formed into a [`Transaction`]
//! in two steps. The header line yields the date and description. Every
//! remaining line is classified by an ordered set of line matchers into
//! a [`TransferLine`] variant, first match wins, and then translated
//! into a [`Transfer`]. A line matching no alternative, a missing body,
//! and a second blank-amount line are all malformed-transaction errors;
//! a bad amount token or status marker inside a matched line is a
//! malformed-transfer error.

use chrono::NaiveDate;
use tally_core::{ClearanceState, Transaction, Transfer};

use crate::amount::{is_numeral, is_unit_label, parse_raw_amount, CASH_SYMBOLS};
use crate::error::{ParseError, TransactionError, TransferError};

/// Minimum leading whitespace on a transfer line.
const TRANSFER_INDENT: usize = 4;

/// A body line classified by the ordered grammar alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferLine<'a> {
    /// Account followed by a symbol-prefixed amount token, e.g. `$-42.00`.
    Cash {
        /// Raw status marker text, empty when absent
        status: &'a str,
        /// The account path
        account: &'a str,
        /// The raw amount token
        token: &'a str,
    },
    /// Account followed by a decimal-plus-unit token, e.g. `2 FOO`.
    /// A trailing `@ price` clause is recognized and discarded.
    Commodity {
        /// Raw status marker text, empty when absent
        status: &'a str,
        /// The account path
        account: &'a str,
        /// The raw amount token, price clause already removed
        token: &'a str,
    },
    /// Account with the amount field left blank; its value is implicitly
    /// the balancing remainder of the transaction.
    Blank {
        /// Raw status marker text, empty when absent
        status: &'a str,
        /// The account path
        account: &'a str,
    },
}

/// Map the optional pre-trimmed status marker to a clearance state.
///
/// Empty maps to [`ClearanceState::Default`]; anything other than `!` or
/// `*` is a malformed-transfer error naming the offending text.
pub fn parse_status(marker: &str) -> Result<ClearanceState, TransferError> {
    match marker.trim() {
        "" => Ok(ClearanceState::Default),
        "!" => Ok(ClearanceState::Pending),
        "*" => Ok(ClearanceState::Cleared),
        other => Err(TransferError::BadStatus(other.to_string())),
    }
}

/// Split a leading `! ` or `* ` marker off the trimmed line body.
///
/// The account must follow the marker immediately; a second space after
/// the marker is not part of the grammar.
fn split_status(body: &str) -> (&str, &str) {
    for marker in ["!", "*"] {
        if let Some(rest) = body.strip_prefix(marker) {
            if let Some(account_part) = rest.strip_prefix(' ') {
                return (marker, account_part);
            }
        }
    }
    ("", body)
}

/// An account is one or more space-free tokens joined by single spaces.
fn is_account(text: &str) -> bool {
    !text.is_empty()
        && text
            .split(' ')
            .all(|tok| !tok.is_empty() && !tok.contains(char::is_whitespace))
}

/// Split at the first run of two-or-more spaces separating the account
/// from the amount field. `None` when the line has no such separator.
fn split_at_gap(text: &str) -> Option<(&str, &str)> {
    let idx = text.find("  ")?;
    Some((&text[..idx], text[idx..].trim_start()))
}

/// Strip an optional trailing `@ price` clause off a commodity token.
fn strip_price_clause(token: &str) -> &str {
    match token.find(" @ ") {
        Some(idx) if is_single_token(&token[idx + 3..]) => &token[..idx],
        _ => token,
    }
}

fn is_single_token(text: &str) -> bool {
    !text.is_empty() && !text.contains(char::is_whitespace)
}

/// Classify a body line against the three transfer alternatives, tried
/// in order: cash, commodity, blank. `None` when the line matches no
/// alternative.
#[must_use]
pub fn match_transfer_line(line: &str) -> Option<TransferLine<'_>> {
    let indent = line.chars().take_while(|c| c.is_whitespace()).count();
    if indent < TRANSFER_INDENT {
        return None;
    }
    let (status, rest) = split_status(line.trim());
    match split_at_gap(rest) {
        Some((account, token)) => {
            if !is_account(account) {
                return None;
            }
            if token.starts_with(CASH_SYMBOLS) && is_single_token(token) {
                return Some(TransferLine::Cash {
                    status,
                    account,
                    token,
                });
            }
            let token = strip_price_clause(token);
            match token.split_once(' ') {
                Some((numeral, unit)) if is_numeral(numeral) && is_unit_label(unit) => {
                    Some(TransferLine::Commodity {
                        status,
                        account,
                        token,
                    })
                }
                _ => None,
            }
        }
        None => is_account(rest).then_some(TransferLine::Blank {
            status,
            account: rest,
        }),
    }
}

/// Translate a matched line into a transfer, parsing its status marker
/// and amount token.
fn form_transfer(line: TransferLine<'_>) -> Result<Transfer, TransferError> {
    match line {
        TransferLine::Cash {
            status,
            account,
            token,
        }
        | TransferLine::Commodity {
            status,
            account,
            token,
        } => {
            let status = parse_status(status)?;
            let amount = parse_raw_amount(token)?;
            Ok(Transfer::new(account, amount).with_status(status))
        }
        TransferLine::Blank { status, account } => {
            let status = parse_status(status)?;
            Ok(Transfer::balancing(account).with_status(status))
        }
    }
}

fn take_digits(text: &str, min: usize, max: usize) -> Option<(&str, &str)> {
    let len = text.chars().take_while(char::is_ascii_digit).count();
    if (min..=max).contains(&len) {
        Some((&text[..len], &text[len..]))
    } else {
        None
    }
}

/// Match a `YYYY/M/D` date at the start of `text`, returning its fields
/// and the remainder.
fn match_date(text: &str) -> Option<(i32, u32, u32, &str)> {
    let (year, rest) = take_digits(text, 4, 4)?;
    let rest = rest.strip_prefix('/')?;
    let (month, rest) = take_digits(rest, 1, 2)?;
    let rest = rest.strip_prefix('/')?;
    let (day, rest) = take_digits(rest, 1, 2)?;
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?, rest))
}

/// Parse the header line into a date and description.
fn parse_header(line: &str) -> Result<(NaiveDate, String), TransactionError> {
    let (year, month, day, rest) =
        match_date(line).ok_or_else(|| TransactionError::ExpectedDate(line.to_string()))?;

    // optional `=YYYY/M/D` effective-date override, validated and discarded
    let rest = if let Some(effective) = rest.strip_prefix('=') {
        match_date(effective)
            .ok_or_else(|| TransactionError::MissingDescription(line.to_string()))?
            .3
    } else {
        rest
    };

    if !rest.starts_with(char::is_whitespace) {
        return Err(TransactionError::MissingDescription(line.to_string()));
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TransactionError::InvalidDate(format!("{year:04}/{month}/{day}")))?;

    Ok((date, rest.trim().to_string()))
}

/// Form a transaction from a comment-stripped, non-rule block.
///
/// The first line is the header; every remaining line must match one of
/// the transfer alternatives, and at most one may leave its amount
/// blank.
pub fn form_transaction(lines: &[&str]) -> Result<Transaction, ParseError> {
    let header = *lines
        .first()
        .ok_or_else(|| TransactionError::ExpectedDate(String::new()))?;
    let (date, description) = parse_header(header)?;

    let body = &lines[1..];
    if body.is_empty() {
        return Err(TransactionError::NoTransfers(header.to_string()).into());
    }

    let mut transfers = Vec::with_capacity(body.len());
    let mut found_blank = false;
    for line in body {
        let matched = match_transfer_line(line)
            .ok_or_else(|| TransactionError::UnparsableTransfer((*line).to_string()))?;
        if matches!(matched, TransferLine::Blank { .. }) {
            if found_blank {
                return Err(TransactionError::MultipleBlankAmounts(header.to_string()).into());
            }
            found_blank = true;
        }
        transfers.push(form_transfer(matched)?);
    }

    Ok(Transaction::new(date, description, transfers))
}
