//! UI font subsetting library
//!
//! This library scans a codebase for string literals in UI-facing source and
//! markup files, derives the set of distinct characters the interface uses,
//! and produces a reduced font covering only those characters by invoking
//! the external fontTools subsetter, falling back to copying the original
//! font unchanged whenever subsetting cannot be performed.

mod data;
mod error;
mod extract;
mod literals;
mod subset;
mod types;

// Re-export error type
pub use error::SubsetError;

// Re-export extraction API
pub use extract::scan_roots;

// Re-export subsetting API
pub use subset::{Subsetter, SubsetterBuilder, check_input_font, subset_font};

// Re-export public types
pub use types::{Charset, FallbackReason, SubsetOutcome};
