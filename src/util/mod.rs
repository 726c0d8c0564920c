//! Utility types and functions shared by the loaders.
//!
//! This module contains fundamental types used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - [`AssetBytes`] - Memory-mapped or buffered file contents
//! - Math type re-exports from glam

mod error;
mod file;
mod math;

pub use error::*;
pub use file::*;
pub use math::*;
