//! End-to-end pipeline: extracted statement text to a [`TransactionSet`].

use ledgerlens_core::TransactionSet;

use crate::blocks::assemble_blocks;
use crate::fields::extract_transaction;

/// Parse extracted statement text into categorized, aggregated transactions.
///
/// Total by design: malformed or unrecognized input degrades to fewer (or
/// zero) transactions, never an error. Identical input always yields an
/// identical result.
pub fn parse(text: &str) -> TransactionSet {
    let lines: Vec<&str> = text.lines().collect();
    let transactions = assemble_blocks(&lines)
        .iter()
        .filter_map(|block| extract_transaction(block))
        .collect();
    TransactionSet::build(transactions)
}
