//! Duk-Weld: Binding generator for Duktape-embedded native functions
//!
//! This crate scans C/C++ sources for `DFUNC` declarations and welds each one
//! into a Duktape wrapper function, then emits a single `init_wrappers`
//! routine that registers every wrapper on the global object or on a
//! namespace object declared with `// DUKTAPE_NAMESPACE`.
//!
//! # Architecture
//!
//! - `parse`: Directive scanner, tokenizer and declaration parser
//! - `ir`: Intermediate representation for declarations and generated code
//! - `codegen`: Wrapper, registration and bootstrap emitters plus renderers
//! - `build`: Per-run generator state and build script utilities
//!
//! # Usage
//!
//! In a crate's `build.rs`:
//!
//! ```rust,ignore
//! use duk_weld::build::BindingBuilder;
//!
//! fn main() {
//!     BindingBuilder::new()
//!         .source("native/js_defs.hpp")
//!         .output("duk_wrappers.inc")
//!         .build()
//!         .expect("Failed to generate Duktape bindings");
//! }
//! ```
//!
//! Or directly:
//!
//! ```rust
//! use duk_weld::{Generator, OutputFormat, WeldConfig};
//!
//! let mut generator = Generator::new(WeldConfig::default());
//! generator
//!     .scan_source("defs.hpp", "DFUNC int add(int a, int b);")
//!     .unwrap();
//! let unit = generator.finish().unwrap();
//! let code = OutputFormat::Cpp.render(&unit, &WeldConfig::default()).unwrap();
//! assert!(code.contains("duk_push_int(ctx, add(arg0, arg1));"));
//! ```

pub mod build;
pub mod codegen;
pub mod config;
pub mod diagnostics;
pub mod ir;
pub mod parse;

// Re-export commonly used types
pub use build::{generate_files, BindingBuilder, Generator};
pub use codegen::{CppGenerator, JsonGenerator, OutputFormat, RegistrationBuilder, WrapperEmitter};
pub use config::{ErrorPolicy, WeldConfig};
pub use diagnostics::{
    Diagnostic, DiagnosticSeverity, DiagnosticsCollector, DirectiveError, SourceLocation,
    WeldError, WeldResult,
};
pub use ir::{
    Bootstrap, Declaration, Extraction, GenerationUnit, Param, ParamType, ReturnType,
    SetupStatement, Target, TypeExpr, WrapperDef,
};
