mod aggregate;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{LedgerSummary, ProgressionLedger};
