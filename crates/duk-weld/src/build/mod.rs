//! Generation runs and build utilities
//!
//! This module provides:
//! - `Generator`, the state value of a single run
//! - `BindingBuilder` for use in build.rs scripts

pub mod builder;
pub mod generator;

pub use builder::{BindingBuilder, BuildOutput};
pub use generator::{generate_files, Generator};
