//! IDL Parser Library
//!
//! This library provides a backtracking, character-level parser combinator engine,
//! an IDL grammar built on top of it, and an AST that serializes back to the exact
//! source text it was parsed from.

pub mod ast;
pub mod error;
pub mod json;
pub mod parser;

// Re-export commonly used types
pub use ast::{to_idl_source, Expr, IoList, ToIdlString};
pub use error::{DiagnosticError, IdlError, IdlResult, ParseError};
pub use parser::{parse_idl, parse_idl_file, IdlParser, ParseResult, Parser};
