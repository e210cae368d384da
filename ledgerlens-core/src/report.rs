//! Month and category aggregation over a parsed transaction list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dates::month_key;
use crate::transaction::{Category, Transaction, round2};

/// Deposit/withdrawal totals over a whole statement, rounded once at the end
/// so per-entry rounding error cannot compound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub net_amount: f64,
}

/// Everything one parse produces: the transactions in source order plus the
/// derived groupings and totals. Rebuilt from scratch on every parse, never
/// mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSet {
    pub transactions: Vec<Transaction>,
    /// `"YYYY-MM"` (or `"unknown"`) to the transactions of that month,
    /// source order preserved within each bucket.
    pub monthly_grouped: BTreeMap<String, Vec<Transaction>>,
    /// Category to its transactions, source order preserved within each
    /// bucket.
    pub categorized: BTreeMap<Category, Vec<Transaction>>,
    pub summary: Summary,
}

impl TransactionSet {
    /// Group transactions by month and category and total the amounts.
    pub fn build(transactions: Vec<Transaction>) -> Self {
        let mut monthly_grouped: BTreeMap<String, Vec<Transaction>> = BTreeMap::new();
        let mut categorized: BTreeMap<Category, Vec<Transaction>> = BTreeMap::new();

        for txn in &transactions {
            monthly_grouped
                .entry(month_key(txn.date.as_deref()))
                .or_default()
                .push(txn.clone());
            categorized.entry(txn.category).or_default().push(txn.clone());
        }

        let total_deposits: f64 = transactions.iter().map(|t| t.deposit).sum();
        let total_withdrawals: f64 = transactions.iter().map(|t| t.withdrawal).sum();

        TransactionSet {
            transactions,
            monthly_grouped,
            categorized,
            summary: Summary {
                total_deposits: round2(total_deposits),
                total_withdrawals: round2(total_withdrawals),
                net_amount: round2(total_deposits - total_withdrawals),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for TransactionSet {
    fn default() -> Self {
        TransactionSet::build(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize;

    fn txn(date: Option<&str>, description: &str, withdrawal: f64, deposit: f64) -> Transaction {
        Transaction {
            description: description.to_string(),
            withdrawal,
            deposit,
            amount: round2(deposit - withdrawal),
            date: date.map(str::to_string),
            category: categorize(description),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(Some("08 JUL 2024"), "VISA PURCHASE COFFEE SHOP", 4.5, 0.0),
            txn(Some("09 JUL 2024"), "EFTPOS WOOLWORTHS", 52.3, 0.0),
            txn(Some("02 AUG 2024"), "SALARY DEPOSIT", 0.0, 1500.0),
            txn(None, "ATM WITHDRAWAL", 100.0, 0.0),
        ]
    }

    #[test]
    fn test_monthly_grouping_with_unknown_bucket() {
        let set = TransactionSet::build(sample());
        assert_eq!(set.monthly_grouped.len(), 3);
        assert_eq!(set.monthly_grouped["2024-07"].len(), 2);
        assert_eq!(set.monthly_grouped["2024-08"].len(), 1);
        assert_eq!(set.monthly_grouped["unknown"].len(), 1);
        // Source order within a bucket.
        assert_eq!(
            set.monthly_grouped["2024-07"][0].description,
            "VISA PURCHASE COFFEE SHOP"
        );
    }

    #[test]
    fn test_partitions_cover_all_transactions_exactly_once() {
        let set = TransactionSet::build(sample());
        let by_month: usize = set.monthly_grouped.values().map(Vec::len).sum();
        let by_category: usize = set.categorized.values().map(Vec::len).sum();
        assert_eq!(by_month, set.transactions.len());
        assert_eq!(by_category, set.transactions.len());
        for txn in &set.transactions {
            assert!(set.categorized[&txn.category].contains(txn));
        }
    }

    #[test]
    fn test_summary_totals() {
        let set = TransactionSet::build(sample());
        assert_eq!(set.summary.total_deposits, 1500.0);
        assert_eq!(set.summary.total_withdrawals, 156.8);
        assert_eq!(set.summary.net_amount, 1343.2);
        assert_eq!(
            set.summary.net_amount,
            round2(set.summary.total_deposits - set.summary.total_withdrawals)
        );
    }

    #[test]
    fn test_summary_rounds_once_at_the_end() {
        // Three thirds of a cent only round cleanly if summed before rounding.
        let txns = vec![
            txn(None, "A A", 0.333, 0.0),
            txn(None, "B B", 0.333, 0.0),
            txn(None, "C C", 0.334, 0.0),
        ];
        let set = TransactionSet::build(txns);
        assert_eq!(set.summary.total_withdrawals, 1.0);
        assert_eq!(set.summary.net_amount, -1.0);
    }

    #[test]
    fn test_empty_build() {
        let set = TransactionSet::default();
        assert!(set.is_empty());
        assert_eq!(set.summary.total_deposits, 0.0);
        assert_eq!(set.summary.total_withdrawals, 0.0);
        assert_eq!(set.summary.net_amount, 0.0);
        assert!(set.monthly_grouped.is_empty());
        assert!(set.categorized.is_empty());
    }

    #[test]
    fn test_json_shape_is_camel_case() {
        let set = TransactionSet::build(sample());
        let json = serde_json::to_value(&set).unwrap();
        assert!(json.get("monthlyGrouped").is_some());
        assert!(json.get("categorized").is_some());
        let summary = json.get("summary").unwrap();
        assert!(summary.get("totalDeposits").is_some());
        assert!(summary.get("totalWithdrawals").is_some());
        assert!(summary.get("netAmount").is_some());
    }
}
