//! ledgerlens-ingest: recovers structured transactions from extracted
//! bank-statement text.
//!
//! Upstream PDF-to-text extraction flattens the statement's table layout
//! into a stream of lines, with the literal word "blank" standing in for an
//! empty withdrawal/deposit cell. The modules here undo that flattening:
//! [`lines`] classifies each line, [`blocks`] groups lines into candidate
//! transactions, [`fields`] recovers date/description/amounts from a block,
//! and [`parse`] wires the stages into one total function.

pub mod blocks;
pub mod fields;
pub mod lines;
pub mod parse;

pub use parse::parse;
