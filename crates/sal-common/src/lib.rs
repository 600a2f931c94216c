//! Salience shared types: validated count tables and the unified error type.

pub mod error;
pub mod table;

pub use error::{Error, ErrorCategory, Result};
pub use table::{CountRecord, CountTable};
