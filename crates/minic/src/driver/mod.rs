//! Lexing driver: file loading, scanning, rendering and output

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};

use crate::common::{
    console_diagnostic_consumer, CompileError, CompileResult, DiagnosticConsumer,
    DiagnosticReporter,
};
use crate::lexer::{Scanner, Token};

/// Options for a lexing run
#[derive(Debug, Clone, Default)]
pub struct LexConfig {
    /// Render diagnostics with source snippets instead of plain lines
    pub pretty: bool,
    /// Treat any lexical error as a failed run
    pub deny_errors: bool,
}

/// Rendered result of scanning one source text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexOutput {
    /// One rendered line per token, end-of-input included
    pub lines: Vec<String>,
    pub error_count: usize,
}

impl LexOutput {
    /// Render already-scanned tokens
    pub fn from_tokens(tokens: &[Token<'_>]) -> Self {
        Self {
            lines: tokens.iter().map(ToString::to_string).collect(),
            error_count: tokens.iter().filter(|t| t.is_error()).count(),
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Scan `source` and render every token, sending diagnostics to `diags`
pub fn lex_source<D>(source: &str, diags: &mut D) -> LexOutput
where
    D: DiagnosticConsumer + ?Sized,
{
    let tokens = Scanner::new(source).scan_tokens(diags);
    let output = LexOutput::from_tokens(&tokens);
    debug!("scanned {} tokens, {} errors", tokens.len(), output.error_count);
    output
}

/// Read a source file, mapping a missing file to [`CompileError::InputNotFound`]
pub fn read_source(path: &Path) -> CompileResult<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CompileError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => CompileError::Io(err),
    })
}

/// Write the rendered tokens to `path`, with a trailing newline
pub fn write_output(path: &Path, output: &LexOutput) -> CompileResult<()> {
    let mut text = output.render();
    text.push('\n');
    fs::write(path, text).map_err(|source| CompileError::Output {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs the `lex` command end to end
pub struct Driver {
    config: LexConfig,
}

impl Driver {
    pub fn new(config: LexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// Lex `input`, writing the listing to `output` or, without one, to `stdout`.
    /// Diagnostics go to stderr.
    pub fn run(
        &self,
        input: &Path,
        output: Option<&Path>,
        stdout: &mut impl Write,
    ) -> CompileResult<LexOutput> {
        info!("lexing {}", input.display());
        let source = read_source(input)?;

        let result = if self.config.pretty {
            let mut reporter = DiagnosticReporter::new();
            let file_id = reporter.add_file(input.display().to_string(), source.as_str());
            lex_source(&source, &mut reporter.consumer(file_id))
        } else {
            lex_source(&source, &mut console_diagnostic_consumer())
        };

        match output {
            Some(path) => {
                write_output(path, &result)?;
                info!("wrote {} tokens to {}", result.lines.len(), path.display());
            }
            None => writeln!(stdout, "{}", result.render())?,
        }

        if self.config.deny_errors && result.has_errors() {
            return Err(CompileError::Lexical {
                count: result.error_count,
            });
        }
        Ok(result)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(LexConfig::default())
    }
}
