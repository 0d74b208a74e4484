//! Intermediate Representation (IR) for Duk-Weld
//!
//! This module provides the type system and metadata structures for
//! parsed declarations and the code generated from them.

pub mod symbol;
pub mod types;
pub mod unit;

pub use symbol::*;
pub use types::*;
pub use unit::*;
