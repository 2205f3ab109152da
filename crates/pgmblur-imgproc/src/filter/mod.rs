//! Filter operations
//!
//! This module provides the box-filter blur operations.

/// Filter kernels
pub mod kernels;

/// Box-filter passes
mod box_blur;

/// Blur pipeline operations
mod ops;
pub use ops::*;
