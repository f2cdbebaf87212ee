//! Unitconv Core - Fundamental types
//!
//! This crate provides the core types used throughout Unitconv:
//! - `Number`: Arbitrary precision decimal numbers
//! - `UnitconvError`: Structured errors with codes and suggestions

mod number;
mod error;

pub use number::{Number, NumberError, DEFAULT_PRECISION};
pub use error::{UnitconvError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Number, NumberError, UnitconvError, Severity};
    pub use crate::error::codes;
}
