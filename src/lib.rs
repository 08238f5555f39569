//! c2go: line-oriented C to Go migration aid.
//!
//! Rewrites C source into Go-shaped text one line at a time, without building
//! a syntax tree. Only a narrow subset is understood (function headers with
//! the return type on its own line, simple declarations, a fixed vocabulary of
//! types and literals); anything structurally outside it stops the run with a
//! [`TranslateError`] instead of producing guesses. The output is meant for
//! manual review.
//!
//! ```
//! use c2go::{translate_source, Tables, TranslateOptions};
//!
//! let src = "int\nmyFunc(int a, char *b) {\n    int x;\n}\n";
//! let out = translate_source(src, &Tables::default(), &TranslateOptions::default()).unwrap();
//! assert_eq!(
//!     out.lines,
//!     ["package gdl", "func myFunc(a int, b *string) int {", "\tvar x int", "}"]
//! );
//! ```

// Core modules
pub mod tables;
pub mod line_cleaner;
pub mod detection;
pub mod helpers;
pub mod translate;

// Driver
pub mod transpiler_state;
pub mod transpile_main;

// Ambient
pub mod config;
pub mod error_msg;

pub use config::{Config, ConfigError, InitializerPolicy};
pub use error_msg::{Diagnostic, DiagnosticKind, ErrorCode, TranslateError};
pub use tables::{LiteralTable, RuleScope, SubstitutionRule, TableError, Tables, TypeTable};
pub use transpile_main::{translate_source, TranslateOptions, Translation, Translator};

#[cfg(test)]
mod tests;
