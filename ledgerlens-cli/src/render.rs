//! Console rendering of a parsed statement.

use ledgerlens_core::TransactionSet;

fn amount_cell(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{value:.2}")
    }
}

pub fn print_report(set: &TransactionSet) {
    if set.is_empty() {
        println!("No transactions recognized.");
        return;
    }

    println!(
        "{:<12} {:<44} {:>12} {:>12}  {}",
        "DATE", "DESCRIPTION", "WITHDRAWAL", "DEPOSIT", "CATEGORY"
    );
    for txn in &set.transactions {
        println!(
            "{:<12} {:<44} {:>12} {:>12}  {}",
            txn.date.as_deref().unwrap_or("unknown"),
            txn.description,
            amount_cell(txn.withdrawal),
            amount_cell(txn.deposit),
            txn.category
        );
    }

    println!("\nBy month:");
    for (month, txns) in &set.monthly_grouped {
        let net: f64 = txns.iter().map(|t| t.amount).sum();
        println!("  {:<10} {:>3} transactions, net {:.2}", month, txns.len(), net);
    }

    println!("\nBy category:");
    for (category, txns) in &set.categorized {
        let spent: f64 = txns.iter().map(|t| t.withdrawal).sum();
        println!(
            "  {:<14} {:>3} transactions, withdrawals {:.2}",
            category.as_str(),
            txns.len(),
            spent
        );
    }

    println!(
        "\nTotal deposits:    {:.2}\nTotal withdrawals: {:.2}\nNet amount:        {:.2}",
        set.summary.total_deposits, set.summary.total_withdrawals, set.summary.net_amount
    );
}
