//! Symbol metadata for declarations and wrappers
//!
//! A [`Declaration`] is what the parser reads from one `DFUNC` line; a
//! [`WrapperDef`] is the adapter function generated for it.

use crate::ir::{ParamType, ReturnType};
use serde::{Deserialize, Serialize};

/// One declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    /// Parameter type
    pub ty: ParamType,
    /// Parameter name as written (not used by the generated code)
    pub name: String,
}

impl Param {
    /// Create a new parameter
    pub fn new(ty: ParamType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// A parsed function directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Return type
    pub return_type: ReturnType,
    /// Native function name
    pub name: String,
    /// Parameters in declaration order
    pub params: Vec<Param>,
}

impl Declaration {
    /// Create a declaration with no parameters
    pub fn new(return_type: ReturnType, name: impl Into<String>) -> Self {
        Self {
            return_type,
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter
    pub fn param(mut self, ty: ParamType, name: impl Into<String>) -> Self {
        self.params.push(Param::new(ty, name));
        self
    }

    /// Number of script arguments the wrapper expects
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Read of one argument from the Duktape stack into a local
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extraction {
    /// Stack slot (0-based, equals the parameter position)
    pub slot: usize,
    /// Accessor type
    pub ty: ParamType,
}

impl Extraction {
    /// Name of the local holding the value
    pub fn local(&self) -> String {
        format!("arg{}", self.slot)
    }
}

/// A generated adapter function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperDef {
    /// Wrapper symbol (e.g., "wrapper_duk_log")
    pub symbol: String,
    /// Native function called by the wrapper (e.g., "duk_log")
    pub callee: String,
    /// Name the function is bound under in script (e.g., "log")
    pub bound_name: String,
    /// Argument reads, in slot order
    pub extractions: Vec<Extraction>,
    /// Result policy
    pub returns: ReturnType,
}

impl WrapperDef {
    /// Number of script arguments
    pub fn arity(&self) -> usize {
        self.extractions.len()
    }

    /// Value returned to Duktape (number of results left on the stack)
    pub fn result_count(&self) -> u8 {
        self.returns.result_count()
    }

    /// The native call expression, e.g. `add(arg0, arg1)`
    pub fn call_expr(&self) -> String {
        let args: Vec<String> = self.extractions.iter().map(Extraction::local).collect();
        format!("{}({})", self.callee, args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_arity() {
        let decl = Declaration::new(ReturnType::Int, "add")
            .param(ParamType::Int, "a")
            .param(ParamType::Int, "b");
        assert_eq!(decl.arity(), 2);
        assert_eq!(decl.params[1].name, "b");
    }

    #[test]
    fn test_call_expr() {
        let wrapper = WrapperDef {
            symbol: "wrapper_add".to_string(),
            callee: "add".to_string(),
            bound_name: "add".to_string(),
            extractions: vec![
                Extraction { slot: 0, ty: ParamType::Int },
                Extraction { slot: 1, ty: ParamType::Int },
            ],
            returns: ReturnType::Int,
        };
        assert_eq!(wrapper.call_expr(), "add(arg0, arg1)");
        assert_eq!(wrapper.result_count(), 1);
    }

    #[test]
    fn test_call_expr_without_args() {
        let wrapper = WrapperDef {
            symbol: "wrapper_duk_clearPluginMenu".to_string(),
            callee: "duk_clearPluginMenu".to_string(),
            bound_name: "clearPluginMenu".to_string(),
            extractions: Vec::new(),
            returns: ReturnType::Void,
        };
        assert_eq!(wrapper.call_expr(), "duk_clearPluginMenu()");
        assert_eq!(wrapper.result_count(), 0);
    }
}
