//! Lexer module for tokenizing MiniC source code

mod scanner;
mod stream;
mod token;

pub use scanner::Scanner;
pub use stream::TokenStream;
pub use token::{LiteralValue, Token, TokenKind};

use crate::common::{Diagnostic, DiagnosticCollector};

/// Tokens and diagnostics from scanning one source text
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scan `source` completely, collecting diagnostics in memory
pub fn tokenize(source: &str) -> Lexed<'_> {
    let mut diags = DiagnosticCollector::new();
    let tokens = Scanner::new(source).scan_tokens(&mut diags);
    Lexed {
        tokens,
        diagnostics: diags.into_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LexErrorKind;

    #[test]
    fn test_tokenize_collects_tokens_and_diagnostics() {
        let lexed = tokenize("x = 1 | 2;");
        let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntLiteral,
                TokenKind::Error(LexErrorKind::LonePipe),
                TokenKind::IntLiteral,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
        assert_eq!(lexed.diagnostics.len(), 1);
        assert_eq!((lexed.diagnostics[0].line, lexed.diagnostics[0].column), (1, 7));
    }

    #[test]
    fn test_tokenize_empty_source() {
        let lexed = tokenize("");
        assert_eq!(lexed.tokens.len(), 1);
        assert!(lexed.tokens[0].is_eof());
        assert!(lexed.diagnostics.is_empty());
    }
}
