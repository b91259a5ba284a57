//! Error types for lexical analysis.
//!
//! Every error the scanner can raise is fatal for the current input. This
//! module defines:
//!
//! - Error structures carrying the line/column of detection
//! - One variant per lexical failure kind
//! - Error formatting and display functionality
//! - Short suggestions shown alongside rendered errors

pub mod errors;
