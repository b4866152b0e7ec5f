//! Token definitions for the MiniC scanner

use std::fmt;

use crate::common::{LexErrorKind, Span};

/// Token with source location and decoded literal payload
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Verbatim source text, quotes and backslashes included
    pub lexeme: &'a str,
    pub line: u32,
    pub column: u32,
    pub span: Span,
    pub value: Option<LiteralValue>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, lexeme: &'a str, line: u32, column: u32, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            line,
            column,
            span,
            value: None,
        }
    }

    pub fn with_value(mut self, value: LiteralValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

/// `<line>:<column> <KIND> "<lexeme>"`, then ` <value>` for literals
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} \"{}\"",
            self.line,
            self.column,
            self.kind.name(),
            self.lexeme
        )?;
        if let Some(value) = &self.value {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

/// Decoded payload of a literal token
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(u64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(n) => write!(f, "{n}"),
            // Debug keeps the trailing `.0` on integral values
            LiteralValue::Float(x) => write!(f, "{x:?}"),
            LiteralValue::Bool(true) => f.write_str("True"),
            LiteralValue::Bool(false) => f.write_str("False"),
            LiteralValue::Str(s) => f.write_str(s),
        }
    }
}

/// All token kinds in MiniC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Literals ===
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteral,

    // === Identifiers & keywords ===
    Identifier,
    KwIf,
    KwElse,
    KwWhile,
    KwFor,
    KwInt,
    KwFloat,
    KwBool,
    KwReturn,
    KwVoid,
    KwStruct,
    KwFn,

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Not,
    Assign,

    // === Delimiters ===
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,

    // Special
    Eof,
    Error(LexErrorKind),
}

impl TokenKind {
    /// Keyword table lookup. `true`/`false` are literals, not keywords.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "if" => TokenKind::KwIf,
            "else" => TokenKind::KwElse,
            "while" => TokenKind::KwWhile,
            "for" => TokenKind::KwFor,
            "int" => TokenKind::KwInt,
            "float" => TokenKind::KwFloat,
            "bool" => TokenKind::KwBool,
            "return" => TokenKind::KwReturn,
            "void" => TokenKind::KwVoid,
            "struct" => TokenKind::KwStruct,
            "fn" => TokenKind::KwFn,
            _ => return None,
        };
        Some(kind)
    }

    /// Name used in the rendered token listing
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::IntLiteral => "INT_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::BoolLiteral => "BOOL_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::KwIf => "KW_IF",
            TokenKind::KwElse => "KW_ELSE",
            TokenKind::KwWhile => "KW_WHILE",
            TokenKind::KwFor => "KW_FOR",
            TokenKind::KwInt => "KW_INT",
            TokenKind::KwFloat => "KW_FLOAT",
            TokenKind::KwBool => "KW_BOOL",
            TokenKind::KwReturn => "KW_RETURN",
            TokenKind::KwVoid => "KW_VOID",
            TokenKind::KwStruct => "KW_STRUCT",
            TokenKind::KwFn => "KW_FN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::Lte => "LTE",
            TokenKind::Gt => "GT",
            TokenKind::Gte => "GTE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Eof => "EOF",
            TokenKind::Error(_) => "ERROR",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwIf
                | TokenKind::KwElse
                | TokenKind::KwWhile
                | TokenKind::KwFor
                | TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwBool
                | TokenKind::KwReturn
                | TokenKind::KwVoid
                | TokenKind::KwStruct
                | TokenKind::KwFn
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::BoolLiteral
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    /// Get the precedence of binary operators (higher = tighter binding)
    pub fn binary_precedence(&self) -> Option<u8> {
        match self {
            TokenKind::Or => Some(1),
            TokenKind::And => Some(2),
            TokenKind::Eq | TokenKind::Neq => Some(3),
            TokenKind::Lt | TokenKind::Lte | TokenKind::Gt | TokenKind::Gte => Some(4),
            TokenKind::Plus | TokenKind::Minus => Some(5),
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(6),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::BoolLiteral => write!(f, "boolean literal"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::KwIf => write!(f, "'if'"),
            TokenKind::KwElse => write!(f, "'else'"),
            TokenKind::KwWhile => write!(f, "'while'"),
            TokenKind::KwFor => write!(f, "'for'"),
            TokenKind::KwInt => write!(f, "'int'"),
            TokenKind::KwFloat => write!(f, "'float'"),
            TokenKind::KwBool => write!(f, "'bool'"),
            TokenKind::KwReturn => write!(f, "'return'"),
            TokenKind::KwVoid => write!(f, "'void'"),
            TokenKind::KwStruct => write!(f, "'struct'"),
            TokenKind::KwFn => write!(f, "'fn'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::Eq => write!(f, "'=='"),
            TokenKind::Neq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Lte => write!(f, "'<='"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::Gte => write!(f, "'>='"),
            TokenKind::And => write!(f, "'&&'"),
            TokenKind::Or => write!(f, "'||'"),
            TokenKind::Not => write!(f, "'!'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Error(kind) => write!(f, "invalid token ({kind})"),
        }
    }
}
