//! Transpiler State Management
//!
//! Contains the `TranspilerState` struct which holds all mutable state
//! during one translation run: the header being accumulated, the output built
//! so far, and the advisories collected along the way.

use crate::error_msg::Diagnostic;

/// Function header seen so far: return type plus the raw text that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingHeader {
    /// Go return type, already resolved; empty for `void`
    pub return_type: String,
    /// Concatenated cleaned lines up to and including the one with `{`
    pub header_text: String,
    /// 1-based input line of the return type
    pub start_line: usize,
}

impl PendingHeader {
    pub fn new(return_type: &str, start_line: usize) -> Self {
        PendingHeader {
            return_type: return_type.to_string(),
            header_text: String::new(),
            start_line,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassificationState {
    #[default]
    Idle,
    AccumulatingHeader(PendingHeader),
}

/// Main state container for the translator
pub struct TranspilerState {
    pub state: ClassificationState,
    pub output: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    /// 1-based number of the last line fed in
    pub line_num: usize,
}

impl TranspilerState {
    /// Start a run whose output opens with `package <package>`.
    pub fn new(package: &str) -> Self {
        Self {
            state: ClassificationState::Idle,
            output: vec![format!("package {}", package)],
            diagnostics: Vec::new(),
            line_num: 0,
        }
    }

    /// Enter header accumulation
    pub fn begin_header(&mut self, return_type: &str) {
        log::trace!("line {}: header start, returns {:?}", self.line_num, return_type);
        self.state = ClassificationState::AccumulatingHeader(PendingHeader::new(
            return_type,
            self.line_num,
        ));
    }

    /// Leave whatever state we are in, handing back a pending header if any
    pub fn take_header(&mut self) -> Option<PendingHeader> {
        match std::mem::take(&mut self.state) {
            ClassificationState::AccumulatingHeader(header) => Some(header),
            ClassificationState::Idle => None,
        }
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, ClassificationState::AccumulatingHeader(_))
    }

    /// 1-based output line the next emitted line will occupy
    pub fn next_output_line(&self) -> usize {
        self.output.len() + 1
    }

    pub fn emit(&mut self, line: String) {
        self.output.push(line);
    }
}
