//! Ledger file importer.
//!
//! This crate is the file-level driver over the parser: it reads the
//! whole ledger file into memory, runs the block/transaction pipeline,
//! and appends the results into a [`Ledger`], firing registered append
//! listeners per transaction. Diagnostics are emitted as `tracing`
//! events; the caller decides where they go by installing a subscriber,
//! so the import pipeline itself holds no process-wide state.
//!
//! Each import is independent: one [`Ledger`] per file, no shared parser
//! state across calls. Callers importing many files may parallelize at
//! that granularity.
//!
//! # Example
//!
//! ```ignore
//! use tally_loader::import_ledger;
//!
//! let ledger = import_ledger("personal.ledger".as_ref())?;
//! println!("imported {} transactions", ledger.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};

use tally_core::Ledger;
use tally_parser::ParseError;

/// Errors that can occur during an import.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source file could not be read.
    #[error("unable to open {path}: {source}")]
    Source {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The source file read fine but failed to parse.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The file with the malformed block.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: ParseError,
    },
}

/// Import the transactions found at `path` into a fresh [`Ledger`].
pub fn import_ledger(path: &Path) -> Result<Ledger, ImportError> {
    let mut ledger = Ledger::new();
    import_ledger_into(path, &mut ledger)?;
    Ok(ledger)
}

/// Import the transactions found at `path` into an existing [`Ledger`].
///
/// Taking the ledger as a parameter lets callers register append
/// listeners before the import runs; every appended transaction is
/// delivered to them synchronously, in file order.
///
/// An unreadable source is logged and surfaced as
/// [`ImportError::Source`] with the ledger untouched; a malformed block
/// aborts the import with [`ImportError::Parse`] and appends nothing
/// (all-or-nothing, no partial-ledger mode).
pub fn import_ledger_into(path: &Path, ledger: &mut Ledger) -> Result<(), ImportError> {
    debug!(path = %path.display(), "importing ledger file");

    let contents = fs::read_to_string(path).map_err(|source| {
        error!(path = %path.display(), %source, "unable to open ledger file");
        ImportError::Source {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if contents.is_empty() {
        return Ok(());
    }

    debug!(path = %path.display(), "beginning to parse");
    let transactions = tally_parser::parse(&contents).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for transaction in transactions {
        debug!(
            date = %transaction.date,
            description = %transaction.description,
            transfers = transaction.transfers.len(),
            "imported transaction"
        );
        ledger.add_transaction(transaction);
    }

    Ok(())
}
