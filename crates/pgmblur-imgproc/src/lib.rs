#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// module containing the box-filter blur operations.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;
