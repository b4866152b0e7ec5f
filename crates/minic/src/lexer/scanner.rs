//! Hand-written maximal-munch scanner
//!
//! The scanner walks the source once, left to right, with at most two
//! characters of lookahead (composite operators and the `.` after digits).
//! Whitespace and comments are consumed but never emitted. Lexical errors
//! become [`TokenKind::Error`] tokens plus a [`Diagnostic`] handed to the
//! caller's [`DiagnosticConsumer`]; scanning always resumes afterwards.

use super::token::{LiteralValue, Token, TokenKind};
use crate::common::{Diagnostic, DiagnosticConsumer, LexErrorKind, Span};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Cursor snapshot: byte offset plus 1-based line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mark {
    offset: usize,
    line: u32,
    column: u32,
}

/// Scanner for MiniC source code
pub struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of the next unread character
    pos: usize,
    line: u32,
    /// Counted in characters, not bytes
    column: u32,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner. A leading byte-order mark is skipped and does
    /// not count towards the column of the first token.
    pub fn new(source: &'a str) -> Self {
        let pos = if source.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len_utf8()
        } else {
            0
        };
        Self {
            source,
            pos,
            line: 1,
            column: 1,
        }
    }

    /// Get the source being scanned
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scan exactly one token.
    ///
    /// Once the input is exhausted every call returns an end-of-input token
    /// at the same position.
    pub fn next_token<D>(&mut self, diags: &mut D) -> Token<'a>
    where
        D: DiagnosticConsumer + ?Sized,
    {
        loop {
            let start = self.mark();
            let Some(c) = self.bump() else {
                return Token::new(TokenKind::Eof, "", self.line, self.column, Span::point(self.pos));
            };

            let kind = match c {
                ' ' | '\t' => continue,
                '\n' | '\r' => {
                    self.newline(c);
                    continue;
                }

                '/' => {
                    if self.eat('/') {
                        self.line_comment();
                        continue;
                    }
                    if self.eat('*') {
                        self.block_comment();
                        continue;
                    }
                    TokenKind::Slash
                }

                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '%' => TokenKind::Percent,

                '=' => self.composite('=', TokenKind::Eq, TokenKind::Assign),
                '!' => self.composite('=', TokenKind::Neq, TokenKind::Not),
                '<' => self.composite('=', TokenKind::Lte, TokenKind::Lt),
                '>' => self.composite('=', TokenKind::Gte, TokenKind::Gt),

                '&' => {
                    if !self.eat('&') {
                        return self.error(LexErrorKind::LoneAmpersand, start, start, diags);
                    }
                    TokenKind::And
                }
                '|' => {
                    if !self.eat('|') {
                        return self.error(LexErrorKind::LonePipe, start, start, diags);
                    }
                    TokenKind::Or
                }

                '"' => return self.string(start, diags),
                c if c.is_alphabetic() || c == '_' => return self.identifier(start),
                c if c.is_ascii_digit() => return self.number(start, diags),

                other => {
                    return self.error(LexErrorKind::UnexpectedCharacter(other), start, start, diags);
                }
            };

            return self.make_token(kind, start);
        }
    }

    /// Scan the whole input, end-of-input token included.
    pub fn scan_tokens<D>(&mut self, diags: &mut D) -> Vec<Token<'a>>
    where
        D: DiagnosticConsumer + ?Sized,
    {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token(diags);
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        diags.flush();
        tokens
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.column += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.bump();
        }
    }

    /// Finish a line terminator whose first character `c` was just consumed.
    /// `\r\n` counts as one line break.
    fn newline(&mut self, c: char) {
        if c == '\r' {
            self.eat('\n');
        }
        self.line += 1;
        self.column = 1;
    }

    fn composite(&mut self, second: char, doubled: TokenKind, single: TokenKind) -> TokenKind {
        if self.eat(second) { doubled } else { single }
    }

    fn line_comment(&mut self) {
        self.eat_while(|c| c != '\n' && c != '\r');
    }

    /// Skip to the closing `*/`. Running out of input here is not an error.
    fn block_comment(&mut self) {
        while let Some(c) = self.bump() {
            match c {
                '*' if self.eat('/') => return,
                '\n' | '\r' => self.newline(c),
                _ => {}
            }
        }
    }

    fn string<D>(&mut self, start: Mark, diags: &mut D) -> Token<'a>
    where
        D: DiagnosticConsumer + ?Sized,
    {
        loop {
            let here = self.mark();
            match self.peek() {
                None => {
                    return self.error(LexErrorKind::UnterminatedStringEof, start, here, diags);
                }
                // The line break stays unconsumed and is skipped as whitespace next call.
                Some('\n' | '\r') => {
                    return self.error(LexErrorKind::UnterminatedStringNewline, start, here, diags);
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    if let Some(escaped @ ('\n' | '\r')) = self.bump() {
                        self.newline(escaped);
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }

        let lexeme = &self.source[start.offset..self.pos];
        let value = unescape(&lexeme[1..lexeme.len() - 1]);
        self.make_token(TokenKind::StringLiteral, start)
            .with_value(LiteralValue::Str(value))
    }

    fn identifier(&mut self, start: Mark) -> Token<'a> {
        self.eat_while(|c| c.is_alphanumeric() || c == '_');

        match &self.source[start.offset..self.pos] {
            "true" => self
                .make_token(TokenKind::BoolLiteral, start)
                .with_value(LiteralValue::Bool(true)),
            "false" => self
                .make_token(TokenKind::BoolLiteral, start)
                .with_value(LiteralValue::Bool(false)),
            text => {
                let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
                self.make_token(kind, start)
            }
        }
    }

    fn number<D>(&mut self, start: Mark, diags: &mut D) -> Token<'a>
    where
        D: DiagnosticConsumer + ?Sized,
    {
        self.eat_while(|c| c.is_ascii_digit());

        let is_float =
            self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit());
        if is_float {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit());
        }

        let text = &self.source[start.offset..self.pos];
        let value = if is_float {
            text.parse::<f64>().ok().map(LiteralValue::Float)
        } else {
            text.parse::<u64>().ok().map(LiteralValue::Int)
        };

        match value {
            Some(value) => {
                let kind = if is_float {
                    TokenKind::FloatLiteral
                } else {
                    TokenKind::IntLiteral
                };
                self.make_token(kind, start).with_value(value)
            }
            None => self.error(LexErrorKind::NumberOutOfRange, start, start, diags),
        }
    }

    fn make_token(&self, kind: TokenKind, start: Mark) -> Token<'a> {
        Token::new(
            kind,
            &self.source[start.offset..self.pos],
            start.line,
            start.column,
            Span::new(start.offset, self.pos),
        )
    }

    /// Report `kind` at `at` and return an error token covering everything
    /// consumed since `start`.
    fn error<D>(&self, kind: LexErrorKind, start: Mark, at: Mark, diags: &mut D) -> Token<'a>
    where
        D: DiagnosticConsumer + ?Sized,
    {
        // An offending position past the token start covers a single character.
        let end = if at == start {
            self.pos
        } else {
            self.peek()
                .map_or(at.offset, |c| at.offset + c.len_utf8())
        };
        diags.handle_diagnostic(&Diagnostic::new(
            kind,
            at.line,
            at.column,
            Span::new(at.offset, end),
        ));
        self.make_token(TokenKind::Error(kind), start)
    }
}

/// Decode `\n`, `\t`, `\"` and `\\` in one left-to-right pass, so `\\n`
/// yields a backslash followed by `n`. Unknown escapes are kept verbatim.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
