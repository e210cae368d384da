//! Transaction value types shared across the workspace.

use serde::{Deserialize, Serialize};

/// Spending category assigned by keyword match. Declaration order is the
/// match priority order used by the categorizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[serde(rename = "groceries")]
    Groceries,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "rent")]
    Rent,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "entertainment")]
    Entertainment,
    #[serde(rename = "healthcare")]
    Healthcare,
    #[serde(rename = "misc")]
    Misc,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Transport => "transport",
            Category::Utilities => "utilities",
            Category::Rent => "rent",
            Category::Education => "education",
            Category::Shopping => "shopping",
            Category::Food => "food",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Misc => "misc",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry recovered from a statement.
///
/// `withdrawal` and `deposit` are non-negative; at least one is nonzero for
/// every emitted transaction. `amount` is always `deposit - withdrawal`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub description: String,
    pub withdrawal: f64,
    pub deposit: f64,
    /// Negative for withdrawals, positive for deposits.
    pub amount: f64,
    /// Original-format date string (e.g. "08 JUL 2024"), if one was matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub category: Category,
}

/// Round to 2 decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
