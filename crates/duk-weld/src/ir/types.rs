//! Type system for Duk-Weld
//!
//! Only a closed set of native types can cross the Duktape boundary:
//!
//! | Native spelling | Position  | Tag                 | Stack operation        |
//! |-----------------|-----------|---------------------|------------------------|
//! | `int`           | parameter | [`ParamType::Int`]  | `duk_require_int`      |
//! | `const char*`   | parameter | [`ParamType::Text`] | `duk_require_string`   |
//! | `bool`          | parameter | [`ParamType::Bool`] | `duk_require_boolean`  |
//! | `int`           | return    | [`ReturnType::Int`] | `duk_push_int`         |
//! | `std::string`   | return    | [`ReturnType::Text`]| `duk_push_string` + `.c_str()` |
//! | `void`          | return    | [`ReturnType::Void`]| none                   |
//!
//! Types are read from source as a [`TypeExpr`] and resolved against this
//! table through their canonical spelling, so `const char *s` and
//! `const char* s` mean the same thing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type as written in a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TypeExpr {
    /// Whether a `const` qualifier appeared anywhere in the type
    pub is_const: bool,
    /// Base words, e.g. `["char"]`, `["std::string"]`, `["unsigned", "int"]`
    pub base: Vec<String>,
    /// Trailing `*`/`&` markers in source order
    pub indirection: String,
}

impl TypeExpr {
    /// Create a plain type from a single base word
    pub fn named(base: impl Into<String>) -> Self {
        Self {
            is_const: false,
            base: vec![base.into()],
            indirection: String::new(),
        }
    }

    /// Mark as const-qualified
    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Append a pointer marker
    pub fn pointer(mut self) -> Self {
        self.indirection.push('*');
        self
    }

    /// Canonical spelling: `const ` + base words joined by spaces + indirection
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        if self.is_const {
            out.push_str("const ");
        }
        out.push_str(&self.base.join(" "));
        out.push_str(&self.indirection);
        out
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Types accepted as wrapper parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamType {
    /// `int`
    Int,
    /// `const char*`
    Text,
    /// `bool`
    Bool,
}

impl ParamType {
    /// Resolve a written type against the supported set
    pub fn resolve(ty: &TypeExpr) -> Option<Self> {
        match ty.canonical().as_str() {
            "int" => Some(ParamType::Int),
            "const char*" => Some(ParamType::Text),
            "bool" => Some(ParamType::Bool),
            _ => None,
        }
    }

    /// Native type of the local holding the extracted argument
    pub fn c_type(&self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Text => "const char*",
            ParamType::Bool => "bool",
        }
    }

    /// Duktape accessor reading this type from a stack slot
    pub fn accessor(&self) -> &'static str {
        match self {
            ParamType::Int => "duk_require_int",
            ParamType::Text => "duk_require_string",
            ParamType::Bool => "duk_require_boolean",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// Types accepted as wrapper return values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnType {
    /// `int`
    Int,
    /// `std::string`
    Text,
    /// `void`
    Void,
}

impl ReturnType {
    /// Resolve a written type against the supported set
    pub fn resolve(ty: &TypeExpr) -> Option<Self> {
        match ty.canonical().as_str() {
            "int" => Some(ReturnType::Int),
            "std::string" => Some(ReturnType::Text),
            "void" => Some(ReturnType::Void),
            _ => None,
        }
    }

    /// Native spelling of the type
    pub fn c_type(&self) -> &'static str {
        match self {
            ReturnType::Int => "int",
            ReturnType::Text => "std::string",
            ReturnType::Void => "void",
        }
    }

    /// Duktape operation pushing the call result, if any
    pub fn push_fn(&self) -> Option<&'static str> {
        match self {
            ReturnType::Int => Some("duk_push_int"),
            ReturnType::Text => Some("duk_push_string"),
            ReturnType::Void => None,
        }
    }

    /// Conversion applied to the call result before pushing
    pub fn result_suffix(&self) -> &'static str {
        match self {
            ReturnType::Text => ".c_str()",
            _ => "",
        }
    }

    /// Number of script-visible results the wrapper reports
    pub fn result_count(&self) -> u8 {
        match self {
            ReturnType::Void => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for ReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}
