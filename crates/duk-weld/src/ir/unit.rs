//! Generation unit metadata
//!
//! The [`GenerationUnit`] is the complete in-memory result of a run: every
//! wrapper in encounter order plus the one bootstrap routine that registers
//! them. Nothing is written anywhere until a renderer consumes it.

use crate::ir::WrapperDef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Object that bind statements currently attach to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Target {
    /// The engine's global object
    #[default]
    Global,
    /// A named object stored on the global object
    Namespace(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Global => f.write_str("global"),
            Target::Namespace(name) => f.write_str(name),
        }
    }
}

/// One registration action performed by the bootstrap routine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SetupStatement {
    /// Make the global object the active target
    ActivateGlobal,
    /// Drop the active target
    DeactivateTarget,
    /// Store a fresh object as property `name` on the (active) global object
    DefineNamespace { name: String },
    /// Make global property `name` the active target
    ActivateNamespace { name: String },
    /// Create a callable for `wrapper` taking `arity` arguments
    RegisterCallable { wrapper: String, arity: usize },
    /// Store the callable as property `name` on the active target
    BindProperty { name: String },
}

/// The generated startup routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bootstrap {
    /// Routine name (e.g., "init_wrappers")
    pub name: String,
    /// Statements in execution order
    pub statements: Vec<SetupStatement>,
}

/// Everything produced by one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationUnit {
    /// Wrapper definitions in encounter order
    pub wrappers: Vec<WrapperDef>,
    /// The startup routine, always last
    pub bootstrap: Bootstrap,
}

impl GenerationUnit {
    /// Wrapper symbols in emission order
    pub fn wrapper_symbols(&self) -> Vec<&str> {
        self.wrappers.iter().map(|w| w.symbol.as_str()).collect()
    }

    /// (target, bound name) pairs in registration order
    ///
    /// Replays the bootstrap statements to find which object each
    /// callable lands on.
    pub fn bindings(&self) -> Vec<(Target, &str)> {
        let mut targets: Vec<Target> = Vec::new();
        let mut bindings = Vec::new();

        for statement in &self.bootstrap.statements {
            match statement {
                SetupStatement::ActivateGlobal => targets.push(Target::Global),
                SetupStatement::ActivateNamespace { name } => {
                    targets.push(Target::Namespace(name.clone()))
                }
                SetupStatement::DeactivateTarget => {
                    targets.pop();
                }
                SetupStatement::BindProperty { name } => {
                    let target = targets.last().cloned().unwrap_or_default();
                    bindings.push((target, name.as_str()));
                }
                SetupStatement::DefineNamespace { .. }
                | SetupStatement::RegisterCallable { .. } => {}
            }
        }

        bindings
    }
}
