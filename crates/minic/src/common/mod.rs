//! Common infrastructure shared by the scanner, the token stream and the driver

mod diagnostics;
mod error;
mod span;

pub use diagnostics::{
    console_diagnostic_consumer, DiagnosticCollector, DiagnosticConsumer, NullDiagnosticConsumer,
    StreamDiagnosticConsumer,
};
pub use error::{
    CompileError, CompileResult, Diagnostic, DiagnosticReporter, LexErrorKind, ReportingConsumer,
};
pub use span::Span;
