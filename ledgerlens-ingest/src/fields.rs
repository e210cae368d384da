//! Recovers date, description, and amounts from one transaction block.
//!
//! The extracted text keeps the statement's fixed column order (withdrawal,
//! deposit, running balance) but loses the alignment, so which column a
//! number came from has to be inferred from the "blank" placeholder the
//! extractor emits for empty cells and from the order of the surviving
//! tokens.

use std::sync::LazyLock;

use regex::Regex;

use ledgerlens_core::{Transaction, categorize, round2};

/// Currency-shaped token: optional comma thousands groups, two-decimal tail,
/// dot or comma as the decimal point.
static MONEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d{3})*[.,]\d{2}").expect("hardcoded pattern compiles"));

/// Money token with an optional currency sign, for stripping from
/// descriptions.
static MONEY_WITH_SIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$?\d+(?:,\d{3})*[.,]\d{2}").expect("hardcoded pattern compiles")
});

/// Empty-cell placeholder emitted by the upstream extractor.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bblank\b").expect("hardcoded pattern compiles"));

static EFFECTIVE_DATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^EFFECTIVE DATE").expect("hardcoded pattern compiles"));

static EFFECTIVE_DATE_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EFFECTIVE DATE.*").expect("hardcoded pattern compiles"));

/// Wording that marks an otherwise ambiguous single amount as money coming
/// in rather than going out.
static DEPOSIT_CONTEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)TRANSFER|TFER|DEPOSIT").expect("hardcoded pattern compiles"));

/// Values at or above this are reference/account numbers, not amounts.
const MAX_PLAUSIBLE_AMOUNT: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct AmountToken {
    value: f64,
    start: usize,
    end: usize,
}

/// Which ledger column(s) a line's amount tokens resolve to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineAmounts {
    /// No retained amount token on the line.
    None,
    Withdrawal(f64),
    Deposit(f64),
    Both { withdrawal: f64, deposit: f64 },
    /// Single token with no placeholder to pin it; the caller resolves it
    /// from the surrounding text.
    Ambiguous(f64),
}

/// Normalize a money token to a dot decimal point and parse it.
fn money_value(token: &str) -> Option<f64> {
    let normalized = match token.rfind([',', '.']) {
        Some(idx) => {
            let (head, tail) = token.split_at(idx);
            format!("{}.{}", head.replace(',', ""), &tail[1..])
        }
        None => token.replace(',', ""),
    };
    normalized.parse().ok()
}

/// All plausible amount tokens on a line, with their byte positions.
fn amount_tokens(line: &str) -> Vec<AmountToken> {
    MONEY
        .find_iter(line)
        .filter_map(|m| {
            let value = money_value(m.as_str())?;
            (value < MAX_PLAUSIBLE_AMOUNT).then_some(AmountToken {
                value,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

fn only_whitespace_between(line: &str, from: usize, to: usize) -> bool {
    from <= to && line[from..to].chars().all(char::is_whitespace)
}

/// Column disambiguation for a single line. The columns always come in the
/// order withdrawal, deposit, balance, so the rules are:
///
/// 1. Placeholder immediately after a token: that token sat left of the
///    empty deposit cell, so it is the withdrawal. Checked first because a
///    withdrawal row with a trailing balance reads `amount blank balance`,
///    and the balance must not be mistaken for a deposit.
/// 2. Placeholder immediately before a token (and nothing to its left): the
///    withdrawal cell was the empty one, so that token is the deposit.
/// 3. Stray placeholder with no adjacent token: fall back to the fixed
///    column order and call the first token the withdrawal.
/// 4. No placeholder, two or more tokens: withdrawal, then deposit. A third
///    trailing token is the running balance and is dropped.
/// 5. One token, no placeholder: ambiguous; resolved by the caller from
///    context keywords.
pub fn resolve_line_amounts(line: &str) -> LineAmounts {
    let tokens = amount_tokens(line);
    if tokens.is_empty() {
        return LineAmounts::None;
    }

    let placeholders: Vec<(usize, usize)> = PLACEHOLDER
        .find_iter(line)
        .map(|m| (m.start(), m.end()))
        .collect();

    for &(p_start, _) in &placeholders {
        let adjacent = tokens
            .iter()
            .rev()
            .find(|t| t.end <= p_start && only_whitespace_between(line, t.end, p_start));
        if let Some(token) = adjacent {
            return LineAmounts::Withdrawal(token.value);
        }
    }

    for &(_, p_end) in &placeholders {
        let adjacent = tokens
            .iter()
            .find(|t| p_end <= t.start && only_whitespace_between(line, p_end, t.start));
        if let Some(token) = adjacent {
            return LineAmounts::Deposit(token.value);
        }
    }

    if !placeholders.is_empty() {
        return LineAmounts::Withdrawal(tokens[0].value);
    }

    if tokens.len() >= 2 {
        return LineAmounts::Both {
            withdrawal: tokens[0].value,
            deposit: tokens[1].value,
        };
    }

    LineAmounts::Ambiguous(tokens[0].value)
}

/// Date string from the block's first line, plus the offset where the
/// anchor ends. The month is uppercased; the year is kept only if present.
fn extract_date(first_line: &str) -> Option<(String, usize)> {
    let caps = crate::lines::transaction_anchor(first_line)?;
    let whole = caps.get(0)?;
    let day = caps.get(1)?.as_str();
    let month = caps.get(2)?.as_str().to_ascii_uppercase();
    let date = match caps.get(3) {
        Some(year) => format!("{} {} {}", day, month, year.as_str()),
        None => format!("{} {}", day, month),
    };
    Some((date, whole.end()))
}

/// Map one block to a transaction, or discard it.
///
/// Every line is scanned for amounts (later lines overwrite earlier ones, so
/// the amount row of a multi-line entry wins). Lines that carry no money
/// token build up the description; effective-date annotations are excluded
/// from it. Blocks that end with no usable amount or a description shorter
/// than 2 characters yield nothing.
pub fn extract_transaction(block: &[&str]) -> Option<Transaction> {
    let first = block.first()?.trim();
    let (date, anchor_end) = extract_date(first)?;

    let mut description = first[anchor_end..].trim().to_string();
    let mut withdrawal = 0.0;
    let mut deposit = 0.0;

    apply_line_amounts(first, &description, &mut withdrawal, &mut deposit);

    for line in &block[1..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if MONEY.is_match(line) {
            apply_line_amounts(line, &description, &mut withdrawal, &mut deposit);
        } else if !EFFECTIVE_DATE_LINE.is_match(line) {
            if description.is_empty() {
                description = line.to_string();
            } else {
                description.push(' ');
                description.push_str(line);
            }
        }
    }

    let description = clean_description(&description);
    if description.chars().count() < 2 {
        return None;
    }
    if withdrawal == 0.0 && deposit == 0.0 {
        return None;
    }

    let withdrawal = round2(withdrawal);
    let deposit = round2(deposit);
    let category = categorize(&description);

    Some(Transaction {
        description,
        withdrawal,
        deposit,
        amount: round2(deposit - withdrawal),
        date: Some(date),
        category,
    })
}

/// Fold one line's resolved amounts into the running withdrawal/deposit
/// pair. Ambiguous single amounts lean on the description gathered so far.
fn apply_line_amounts(line: &str, context: &str, withdrawal: &mut f64, deposit: &mut f64) {
    match resolve_line_amounts(line) {
        LineAmounts::None => {}
        LineAmounts::Withdrawal(v) => *withdrawal = v,
        LineAmounts::Deposit(v) => *deposit = v,
        LineAmounts::Both { withdrawal: w, deposit: d } => {
            *withdrawal = w;
            *deposit = d;
        }
        LineAmounts::Ambiguous(v) => {
            if DEPOSIT_CONTEXT.is_match(context) {
                *deposit = v;
            } else {
                *withdrawal = v;
            }
        }
    }
}

/// Strip effective-date tails, amount tokens, and placeholder words, then
/// collapse whitespace.
fn clean_description(raw: &str) -> String {
    let s = EFFECTIVE_DATE_TAIL.replace(raw, "");
    let s = MONEY_WITH_SIGN.replace_all(&s, "");
    let s = PLACEHOLDER.replace_all(&s, "");
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlens_core::Category;

    #[test]
    fn test_money_value_normalizes_separators() {
        assert_eq!(money_value("4.50"), Some(4.5));
        assert_eq!(money_value("1,234.56"), Some(1234.56));
        assert_eq!(money_value("52,30"), Some(52.3));
    }

    #[test]
    fn test_placeholder_before_amount_is_deposit() {
        let txn = extract_transaction(&["08 JUL 2024 VISA PURCHASE COFFEE SHOP blank 4.50"])
            .expect("one-line deposit");
        assert_eq!(txn.description, "VISA PURCHASE COFFEE SHOP");
        assert_eq!(txn.withdrawal, 0.0);
        assert_eq!(txn.deposit, 4.5);
        assert_eq!(txn.amount, 4.5);
        assert_eq!(txn.date.as_deref(), Some("08 JUL 2024"));
        assert_eq!(txn.category, Category::Food);
    }

    #[test]
    fn test_placeholder_after_amount_is_withdrawal() {
        let txn = extract_transaction(&["15 JAN 2024 EFTPOS WOOLWORTHS 52.30 blank"])
            .expect("one-line withdrawal");
        assert_eq!(txn.withdrawal, 52.3);
        assert_eq!(txn.deposit, 0.0);
        assert_eq!(txn.amount, -52.3);
        assert_eq!(txn.category, Category::Groceries);
    }

    #[test]
    fn test_placeholder_binds_to_adjacent_token_not_balance() {
        // Withdrawal cell empty, deposit 4.50, trailing running balance.
        assert_eq!(
            resolve_line_amounts("blank 4.50 1,204.50"),
            LineAmounts::Deposit(4.5)
        );
        // Deposit cell empty, withdrawal 52.30, trailing running balance.
        assert_eq!(
            resolve_line_amounts("52.30 blank 1,152.20"),
            LineAmounts::Withdrawal(52.3)
        );
    }

    #[test]
    fn test_two_amounts_follow_fixed_column_order() {
        let txn = extract_transaction(&["03 FEB 2024 ANZ INTERNET BANKING 40.00 15.00"])
            .expect("two-amount line");
        assert_eq!(txn.withdrawal, 40.0);
        assert_eq!(txn.deposit, 15.0);
    }

    #[test]
    fn test_third_amount_is_balance_and_dropped() {
        assert_eq!(
            resolve_line_amounts("40.00 15.00 2,500.00"),
            LineAmounts::Both { withdrawal: 40.0, deposit: 15.0 }
        );
    }

    #[test]
    fn test_single_amount_defaults_to_withdrawal() {
        let txn = extract_transaction(&["09 JUL 2024 EFTPOS CORNER STORE 12.00"])
            .expect("single-amount line");
        assert_eq!(txn.withdrawal, 12.0);
        assert_eq!(txn.deposit, 0.0);
    }

    #[test]
    fn test_transfer_context_resolves_single_amount_to_deposit() {
        let txn = extract_transaction(&[
            "02 MAR 2024 TRANSFER TO SAVINGS",
            "EFFECTIVE DATE 04 MAR 2024 blank 100.00",
        ])
        .expect("transfer block");
        assert_eq!(txn.description, "TRANSFER TO SAVINGS");
        assert_eq!(txn.deposit, 100.0);
        assert_eq!(txn.withdrawal, 0.0);
        assert_eq!(txn.amount, 100.0);
        assert_eq!(txn.date.as_deref(), Some("02 MAR 2024"));
    }

    #[test]
    fn test_continuation_text_joins_description() {
        let txn = extract_transaction(&[
            "08 JUL 2024 VISA PURCHASE",
            "CARD 1234 COFFEE SHOP MELBOURNE",
            "4.50 blank",
        ])
        .expect("multi-line block");
        assert_eq!(txn.description, "VISA PURCHASE CARD 1234 COFFEE SHOP MELBOURNE");
        assert_eq!(txn.withdrawal, 4.5);
    }

    #[test]
    fn test_reference_numbers_are_not_amounts() {
        // 7-digit value with a 2-decimal tail parses above the cap.
        assert_eq!(resolve_line_amounts("REF 4111111.11"), LineAmounts::None);
        let txn = extract_transaction(&[
            "08 JUL 2024 PAYMENT RECEIPT 4111111.11",
            "blank 25.00",
        ])
        .expect("amount from second line");
        assert_eq!(txn.deposit, 25.0);
    }

    #[test]
    fn test_year_optional_in_anchor() {
        let txn = extract_transaction(&["08 JUL VISA PURCHASE COFFEE 4.50 blank"])
            .expect("yearless anchor");
        assert_eq!(txn.date.as_deref(), Some("08 JUL"));
        assert_eq!(txn.withdrawal, 4.5);
    }

    #[test]
    fn test_block_without_usable_amount_is_discarded() {
        assert!(extract_transaction(&["08 JUL 2024 VISA PURCHASE COFFEE SHOP"]).is_none());
        assert!(extract_transaction(&["08 JUL 2024 PAYMENT 4111111.11"]).is_none());
    }

    #[test]
    fn test_block_without_description_is_discarded() {
        assert!(extract_transaction(&["08 JUL 2024 4.50 blank"]).is_none());
        assert!(extract_transaction(&[]).is_none());
    }

    #[test]
    fn test_later_amount_lines_overwrite_earlier() {
        let txn = extract_transaction(&[
            "08 JUL 2024 EFTPOS REFUND STORE 10.00 blank",
            "blank 30.00",
        ])
        .expect("overwrite");
        assert_eq!(txn.withdrawal, 10.0);
        assert_eq!(txn.deposit, 30.0);
    }
}
