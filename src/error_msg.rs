//! c2go Error Message System
//!
//! Two families of problems come out of a translation run:
//!
//! 1. **Fatal errors** ([`TranslateError`]) - the input falls outside the
//!    supported subset and no output is produced for it.
//! 2. **Advisories** ([`Diagnostic`]) - the line was translated, but a human
//!    should look at the result before it is compiled.
//!
//! Every fatal error carries a stable code (`C2Gxxx`) and the 1-based line of
//! the input it refers to.
//!
//! Code ranges:
//! - 001-009: Function header errors
//! - 010-019: Declaration errors

use std::fmt;

use thiserror::Error;

//=============================================================================
// ERROR CODES
//=============================================================================

/// Stable error codes for c2go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Parameter does not reduce to `type name` or `type * name`
    C2G001,
    /// Header has no `(`
    C2G002,
    /// Header has no matching `)`
    C2G003,
    /// Input ended inside a function header
    C2G004,
    /// Initialized declaration outside the supported shape
    C2G010,
    /// Declaration names cannot be expressed as one `var` line
    C2G011,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::C2G001 => "C2G001",
            ErrorCode::C2G002 => "C2G002",
            ErrorCode::C2G003 => "C2G003",
            ErrorCode::C2G004 => "C2G004",
            ErrorCode::C2G010 => "C2G010",
            ErrorCode::C2G011 => "C2G011",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//=============================================================================
// FATAL ERRORS
//=============================================================================

/// Structural error that aborts translation of the current input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("line {line}: could not parse parameter '{param}' in function header '{header}'")]
    MalformedParameter {
        line: usize,
        param: String,
        header: String,
    },

    #[error("line {line}: function header '{header}' has no parameter list")]
    MissingParameterList { line: usize, header: String },

    #[error("line {line}: function header '{header}' has no closing ')'")]
    UnbalancedParameterList { line: usize, header: String },

    #[error("line {line}: input ended before the body of function header '{header}' was opened")]
    UnterminatedHeader { line: usize, header: String },

    #[error("line {line}: unsupported initializer in '{text}' ({reason})")]
    UnsupportedInitializer {
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("line {line}: cannot rewrite declaration '{text}' ({reason})")]
    MalformedDeclaration {
        line: usize,
        text: String,
        reason: &'static str,
    },
}

impl TranslateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TranslateError::MalformedParameter { .. } => ErrorCode::C2G001,
            TranslateError::MissingParameterList { .. } => ErrorCode::C2G002,
            TranslateError::UnbalancedParameterList { .. } => ErrorCode::C2G003,
            TranslateError::UnterminatedHeader { .. } => ErrorCode::C2G004,
            TranslateError::UnsupportedInitializer { .. } => ErrorCode::C2G010,
            TranslateError::MalformedDeclaration { .. } => ErrorCode::C2G011,
        }
    }

    /// 1-based input line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            TranslateError::MalformedParameter { line, .. }
            | TranslateError::MissingParameterList { line, .. }
            | TranslateError::UnbalancedParameterList { line, .. }
            | TranslateError::UnterminatedHeader { line, .. }
            | TranslateError::UnsupportedInitializer { line, .. }
            | TranslateError::MalformedDeclaration { line, .. } => *line,
        }
    }
}

/// Render a fatal error with its code and the input it came from.
pub fn format_translate_error(err: &TranslateError, file_name: &str) -> String {
    format!("error[{}]: {}\n  --> {}:{}", err.code(), err, file_name, err.line())
}

//=============================================================================
// ADVISORIES
//=============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `if` line without a `{` terminator, likely a one-statement body
    SuspiciousConditional,
}

/// Non-fatal finding collected during translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based line in the emitted output, package line included
    pub output_line: usize,
    /// 1-based line in the input
    pub source_line: usize,
    pub text: String,
}

impl Diagnostic {
    pub fn suspicious_conditional(output_line: usize, source_line: usize, text: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::SuspiciousConditional,
            output_line,
            source_line,
            text: text.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::SuspiciousConditional => {
                write!(f, "Potentially bad 'if' on line {}", self.output_line)
            }
        }
    }
}
