//! CSV export of the parsed transaction list.

use std::path::Path;

use anyhow::{Context, Result};
use ledgerlens_core::TransactionSet;

pub fn write_csv(set: &TransactionSet, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([
        "date",
        "description",
        "withdrawal",
        "deposit",
        "amount",
        "category",
    ])?;

    for txn in &set.transactions {
        let withdrawal = format!("{:.2}", txn.withdrawal);
        let deposit = format!("{:.2}", txn.deposit);
        let amount = format!("{:.2}", txn.amount);
        writer.write_record([
            txn.date.as_deref().unwrap_or("unknown"),
            txn.description.as_str(),
            withdrawal.as_str(),
            deposit.as_str(),
            amount.as_str(),
            txn.category.as_str(),
        ])?;
    }

    writer.flush().context("flushing csv output")?;
    Ok(())
}
