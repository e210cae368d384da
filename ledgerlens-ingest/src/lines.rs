//! Per-line classification: transaction anchors vs. statement noise.

use std::sync::LazyLock;

use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("hardcoded pattern compiles"))
        .collect()
}

/// Lines that can never belong to a transaction: page furniture, balance
/// summaries, column headers, boilerplate. Anchored where possible so they
/// cannot fire inside a legitimate description.
static METADATA_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?i)^TOTALS AT END OF PAGE",
        r"^\s*TOTALS\s*\$",
        r"(?i)^OPENING BALANCE",
        r"(?i)^CLOSING BALANCE",
        r"(?i)^Total\s+(Deposits|Withdrawals)",
        r"^---+",
        r"(?i)Page.*of|Break",
        r"(?i)^Account (Number|Details|Name)",
        r"(?i)^Branch Number",
        r"(?i)^Statement (Number|Period)",
        r"(?i)^Need to Get In Touch",
        r"(?i)^ANZ (Internet|ACCESS)",
        r"(?i)^Welcome|AT A GLANCE",
        r"(?i)^Enquiries|Lost/Stolen",
        r"(?i)^Australia and New Zealand",
        r"(?i)^Transaction Details",
        r"(?i)^Please retain",
        r"(?i)^Date\s+Transaction Details",
        r"(?i)Withdrawals.*Deposits",
        r"(?i)^blank\s*$",
    ])
});

/// Date anchor that opens a transaction: day-of-month plus a 3-letter month
/// abbreviation, optionally followed by a 4-digit year.
static TXN_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(\d{1,2})\s+(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|OCT|NOV|DEC)(?:\s+(\d{4}))?",
    )
    .expect("hardcoded pattern compiles")
});

static TXN_TYPE_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)VISA|EFTPOS|TRANSFER|BANKING|DEBIT|PAYMENT|PURCHASE")
        .expect("hardcoded pattern compiles")
});

static CURRENCY_SHAPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$|AUD|[0-9]+\.[0-9]{2}").expect("hardcoded pattern compiles")
});

/// True for header/summary/boilerplate lines that should never reach the
/// field extractor.
pub fn is_metadata_line(line: &str) -> bool {
    METADATA_PATTERNS.iter().any(|re| re.is_match(line))
}

/// True if the line begins with the date anchor that opens a transaction.
pub fn is_transaction_start(line: &str) -> bool {
    TXN_START.is_match(line)
}

/// Stricter check for validating a would-be transaction line in isolation:
/// the date anchor plus either a known transaction-type keyword or a
/// currency-shaped token.
pub fn looks_like_transaction(line: &str) -> bool {
    if !is_transaction_start(line) {
        return false;
    }
    TXN_TYPE_KEYWORDS.is_match(line) || CURRENCY_SHAPED.is_match(line)
}

/// The anchor match on a line, for date recovery by the field extractor.
/// Captures: day, month, optional year.
pub(crate) fn transaction_anchor(line: &str) -> Option<regex::Captures<'_>> {
    TXN_START.captures(line)
}
