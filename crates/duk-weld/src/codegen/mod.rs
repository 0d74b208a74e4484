//! Code generation for Duktape bindings
//!
//! This module provides:
//! - The wrapper emitter (declaration -> wrapper definition)
//! - The registration builder and bootstrap emitter
//! - Renderers turning a finished unit into C++ source or JSON

pub mod bootstrap;
pub mod cpp;
pub mod json;
pub mod registration;
pub mod wrapper;

pub use bootstrap::emit_bootstrap;
pub use cpp::CppGenerator;
pub use json::JsonGenerator;
pub use registration::RegistrationBuilder;
pub use wrapper::WrapperEmitter;

use crate::config::WeldConfig;
use crate::diagnostics::WeldResult;
use crate::ir::GenerationUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format for a rendered unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Duktape C++ source
    #[default]
    Cpp,
    /// JSON dump of the generation unit
    Json,
}

impl OutputFormat {
    /// Render a finished unit
    pub fn render(&self, unit: &GenerationUnit, config: &WeldConfig) -> WeldResult<String> {
        match self {
            OutputFormat::Cpp => Ok(CppGenerator::new(unit, config).generate()),
            OutputFormat::Json => JsonGenerator::new(unit).generate(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cpp" | "c++" | "c" => Ok(OutputFormat::Cpp),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Cpp => f.write_str("cpp"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}
