//! ledgerlens-core: domain types, categorization, and aggregation for parsed
//! bank statements.

pub mod categorizer;
pub mod dates;
pub mod report;
pub mod transaction;

pub use categorizer::categorize;
pub use dates::month_key;
pub use report::{Summary, TransactionSet};
pub use transaction::{Category, Transaction, round2};
