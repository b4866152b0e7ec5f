//! Error types and diagnostic reporting

use std::fmt;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic as CodespanDiagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{Buffer, ColorChoice, StandardStream};
use log::debug;
use thiserror::Error;

use super::diagnostics::DiagnosticConsumer;
use super::Span;

/// The kinds of malformed input the scanner recognizes.
///
/// None of these stop a scan: each one yields an error token plus a
/// [`Diagnostic`], and scanning resumes on the next call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("expected '&' after '&'")]
    LoneAmpersand,

    #[error("expected '|' after '|'")]
    LonePipe,

    #[error("unterminated string (newline inside literal)")]
    UnterminatedStringNewline,

    #[error("unterminated string (end of file)")]
    UnterminatedStringEof,

    #[error("numeric literal out of range")]
    NumberOutOfRange,
}

/// A positioned lexical error, as delivered on the error channel.
///
/// `line`/`column` point at the offending character, which is not always
/// the start of the error token it accompanies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(kind: LexErrorKind, line: u32, column: u32, span: Span) -> Self {
        Self {
            kind,
            line,
            column,
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error at line {}, column {}: {}",
            self.line, self.column, self.kind
        )
    }
}

/// Process-level failures around the scanner
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("File '{}' not found.", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("cannot write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected {expected}, found {found} at {line}:{column}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    #[error("{count} lexical error(s)")]
    Lexical { count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            line,
            column,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self::with_color(ColorChoice::Auto)
    }

    pub fn with_color(color: ColorChoice) -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(color),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    fn to_codespan(file_id: usize, diag: &Diagnostic) -> CodespanDiagnostic<usize> {
        CodespanDiagnostic::error()
            .with_message(diag.to_string())
            .with_labels(vec![
                Label::primary(file_id, diag.span.range()).with_message(diag.kind.to_string()),
            ])
    }

    /// Render a diagnostic without color, for logs and tests
    pub fn render(&self, file_id: usize, diag: &Diagnostic) -> String {
        let mut buffer = Buffer::no_color();
        let diagnostic = Self::to_codespan(file_id, diag);
        if term::emit(&mut buffer, &self.config, &self.files, &diagnostic).is_err() {
            return diag.to_string();
        }
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    pub fn report(&self, file_id: usize, diag: &Diagnostic) {
        let diagnostic = Self::to_codespan(file_id, diag);
        // The error channel is best-effort; a failed write must not abort a scan.
        let mut writer = self.writer.lock();
        if let Err(err) = term::emit(&mut writer, &self.config, &self.files, &diagnostic) {
            debug!("dropped diagnostic {diag}: {err}");
        }
    }

    /// Consumer that pretty-prints every diagnostic against `file_id`
    pub fn consumer(&self, file_id: usize) -> ReportingConsumer<'_> {
        ReportingConsumer {
            reporter: self,
            file_id,
        }
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ReportingConsumer<'r> {
    reporter: &'r DiagnosticReporter,
    file_id: usize,
}

impl DiagnosticConsumer for ReportingConsumer<'_> {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        self.reporter.report(self.file_id, diag);
    }

    fn flush(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(LexErrorKind::UnexpectedCharacter('@'), 3, 7, Span::new(20, 21));
        assert_eq!(
            diag.to_string(),
            "Error at line 3, column 7: unexpected character '@'"
        );
    }

    #[test]
    fn test_input_not_found_names_file() {
        let err = CompileError::InputNotFound {
            path: PathBuf::from("missing.src"),
        };
        assert_eq!(err.to_string(), "File 'missing.src' not found.");
    }

    #[test]
    fn test_render_points_at_source() {
        let mut reporter = DiagnosticReporter::with_color(ColorChoice::Never);
        let file_id = reporter.add_file("main.mc", "int x = @;\n");
        let diag = Diagnostic::new(LexErrorKind::UnexpectedCharacter('@'), 1, 9, Span::new(8, 9));

        let rendered = reporter.render(file_id, &diag);
        assert!(rendered.contains("Error at line 1, column 9: unexpected character '@'"));
        assert!(rendered.contains("main.mc:1:9"));
        assert!(rendered.contains("unexpected character '@'"));
    }
}
