//! Delivery of scanner diagnostics to whoever is listening.
//!
//! The scanner never writes anywhere itself. Callers hand it a
//! [`DiagnosticConsumer`] and decide where messages go: collected in memory,
//! streamed as plain lines, pretty-printed, or dropped.

use std::io::{self, Write};

use super::Diagnostic;

/// An object that receives diagnostics as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic);
    fn flush(&mut self);
}

impl<C: DiagnosticConsumer + ?Sized> DiagnosticConsumer for &mut C {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        (**self).handle_diagnostic(diag);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

/// Keeps every diagnostic in emission order
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticConsumer for DiagnosticCollector {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        self.diagnostics.push(diag.clone());
    }

    fn flush(&mut self) {}
}

/// Drops everything
pub struct NullDiagnosticConsumer;

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: &Diagnostic) {}

    fn flush(&mut self) {}
}

/// Writes one `Error at line L, column C: message` line per diagnostic.
pub struct StreamDiagnosticConsumer<W: Write> {
    stream: io::BufWriter<W>,
}

impl<W: Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream: io::BufWriter::new(stream),
        }
    }

    pub fn into_inner(self) -> Result<W, io::IntoInnerError<io::BufWriter<W>>> {
        self.stream.into_inner()
    }
}

impl<W: Write> DiagnosticConsumer for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        // The error channel is best-effort; a closed stderr must not abort a scan.
        let _ = writeln!(self.stream, "{diag}");
    }

    fn flush(&mut self) {
        let _ = self.stream.flush();
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<io::Stderr> {
    StreamDiagnosticConsumer::new(io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{LexErrorKind, Span};

    fn sample() -> Diagnostic {
        Diagnostic::new(LexErrorKind::LonePipe, 2, 4, Span::new(10, 11))
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = DiagnosticCollector::new();
        collector.handle_diagnostic(&sample());
        collector.handle_diagnostic(&Diagnostic::new(
            LexErrorKind::LoneAmpersand,
            3,
            1,
            Span::new(12, 13),
        ));

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.diagnostics()[0].kind, LexErrorKind::LonePipe);
        assert_eq!(collector.diagnostics()[1].kind, LexErrorKind::LoneAmpersand);
    }

    #[test]
    fn test_stream_consumer_writes_lines() {
        let mut consumer = StreamDiagnosticConsumer::new(Vec::new());
        consumer.handle_diagnostic(&sample());
        consumer.flush();

        let bytes = consumer.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Error at line 2, column 4: expected '|' after '|'\n"
        );
    }

    #[test]
    fn test_consumer_through_mut_ref() {
        fn feed(mut consumer: impl DiagnosticConsumer) {
            consumer.handle_diagnostic(&sample());
            consumer.flush();
        }

        let mut collector = DiagnosticCollector::new();
        feed(&mut collector);
        assert_eq!(collector.len(), 1);
    }
}
