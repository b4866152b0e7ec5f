//! MiniC - lexical scanner for a small C-like language
//!
//! Turns raw source text into the token sequence a parser consumes.
//!
//! ## Architecture
//!
//! - **Lexer** (`lexer/`): the scanner state machine, token vocabulary and a
//!   token cursor for downstream parsing
//! - **Common** (`common/`): error types, diagnostics delivery, spans
//! - **Driver** (`driver/`): file loading, rendering and output for the `lex` command

pub mod common;
pub mod driver;
pub mod lexer;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, Diagnostic, DiagnosticConsumer, LexErrorKind, Span};
pub use driver::{Driver, LexConfig, LexOutput};
pub use lexer::{tokenize, LiteralValue, Scanner, Token, TokenKind, TokenStream};
