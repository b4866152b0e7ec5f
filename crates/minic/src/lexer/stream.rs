//! Cursor over a scanned token sequence, for the parser

use std::mem::discriminant;

use super::token::{Token, TokenKind};
use crate::common::{CompileError, CompileResult, Span};

/// Token cursor with arbitrary lookahead.
///
/// The underlying sequence always ends in an end-of-input token; once the
/// cursor reaches it, it stays there.
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(mut tokens: Vec<Token<'a>>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let eof = match tokens.last() {
                Some(last) => Token::new(
                    TokenKind::Eof,
                    "",
                    last.line,
                    last.column + last.lexeme.chars().count() as u32,
                    Span::point(last.span.end),
                ),
                None => Token::new(TokenKind::Eof, "", 1, 1, Span::default()),
            };
            tokens.push(eof);
        }
        Self { tokens, pos: 0 }
    }

    /// Peek at the next token without consuming it
    pub fn peek(&self) -> &Token<'a> {
        self.peek_at(0)
    }

    /// Peek at the token at offset (0 = next, 1 = after next, etc.)
    pub fn peek_at(&self, offset: usize) -> &Token<'a> {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Check if the next token has the expected kind. Error tokens match
    /// each other regardless of payload.
    pub fn check(&self, expected: TokenKind) -> bool {
        discriminant(&self.peek().kind) == discriminant(&expected)
    }

    /// Consume the next token if it matches, return true if consumed
    pub fn match_token(&mut self, expected: TokenKind) -> bool {
        if self.check(expected) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Expect a specific token kind, error if not found
    pub fn expect(&mut self, expected: TokenKind) -> CompileResult<Token<'a>> {
        if self.check(expected) {
            return Ok(self.next_token());
        }
        let found = self.peek();
        Err(CompileError::unexpected_token(
            expected.to_string(),
            found.kind.to_string(),
            found.line,
            found.column,
        ))
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub fn has_errors(&self) -> bool {
        self.tokens.iter().any(Token::is_error)
    }

    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }
}
