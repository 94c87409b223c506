//! # Stock Scanning
//!
//! [`ScanResolver`] turns a scanned barcode or typed search into a record;
//! [`ScanLedger`] moves stock in or out of a resolved record. Both report
//! failures to their caller and never retry.

mod error;
mod ledger;
mod resolver;

pub use error::*;
pub use ledger::*;
pub use resolver::*;
