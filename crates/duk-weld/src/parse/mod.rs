//! Parsing of annotated sources
//!
//! - `scanner`: finds directive lines
//! - `token`: tokenizes a directive line
//! - `decl`: parses a function directive into a [`Declaration`](crate::ir::Declaration)

pub mod decl;
pub mod scanner;
pub mod token;

pub use decl::{parse_declaration, parse_type_expr};
pub use scanner::{classify_line, directives, parse_namespace, Directive};
pub use token::{tokenize, Token, TokenKind};
