// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Token scanner for the code partition.
//!
//! At every position the scanner tries, in order: whitespace (skipped), numeric
//! literals, character literals, string literals, operators (longest match),
//! attributes and words. Anything else becomes a one-character
//! [`TokenCategory::Undefined`] token, so the scanner always advances.
//!
//! The scanner never looks behind its start, which makes it restartable at any
//! partition boundary.

use std::iter::FusedIterator;

use crate::buffer::Document;
use crate::syntax::language::keyword_category;
use crate::syntax::partition::Partition;

/// Syntactic category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    StatementKeyword,
    DeclarationKeyword,
    OperatorKeyword,
    Visibility,
    DeclarationModifier,
    BuiltinType,
    /// `self`, `super`, `true`, `false`, `null`, `typecast`
    BuiltinSymbol,
    Identifier,
    /// Decimal literal, with optional fraction.
    Number,
    /// `0x` literal. Hosts paint it like [`TokenCategory::Undefined`].
    HexLiteral,
    Character,
    String,
    Operator,
    /// `@name.name`
    Attribute,
    Undefined,
}

impl TokenCategory {
    /// Returns a stable tag hosts can key presentation attributes on.
    pub fn name(self) -> &'static str {
        match self {
            TokenCategory::StatementKeyword => "statement_keyword",
            TokenCategory::DeclarationKeyword => "declaration_keyword",
            TokenCategory::OperatorKeyword => "operator_keyword",
            TokenCategory::Visibility => "visibility",
            TokenCategory::DeclarationModifier => "declaration_modifier",
            TokenCategory::BuiltinType => "builtin_type",
            TokenCategory::BuiltinSymbol => "builtin_symbol",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Number => "number",
            TokenCategory::HexLiteral => "hex_literal",
            TokenCategory::Character => "character",
            TokenCategory::String => "string",
            TokenCategory::Operator => "operator",
            TokenCategory::Attribute => "attribute",
            TokenCategory::Undefined => "undefined",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenCategory::StatementKeyword
                | TokenCategory::DeclarationKeyword
                | TokenCategory::OperatorKeyword
                | TokenCategory::Visibility
                | TokenCategory::DeclarationModifier
                | TokenCategory::BuiltinType
                | TokenCategory::BuiltinSymbol
        )
    }

    /// Whether hosts render this category with the default text style.
    pub fn has_default_style(self) -> bool {
        matches!(self, TokenCategory::Undefined | TokenCategory::HexLiteral)
    }
}

/// A classified `[start, end)` byte range of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub category: TokenCategory,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(category: TokenCategory, start: usize, end: usize) -> Self {
        debug_assert!(start < end, "tokens are never empty");
        Self { category, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extracts the token text from the document text the token was scanned from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Operators and punctuation, longest first.
const OPERATORS: &[&str] = &[
    ">>=", "<<=", ">=?", "<=?", "::", "++", "+=", "--", "-=", "->", "*=", "%=", "^=", "|=", "||",
    "&=", "&&", "~=", ">=", ">?", ">>", "<=", "<?", "<<", "==", "!=", ":", "+", "-", "*", "%",
    "^", "|", "&", "~", ">", "<", "=", "!", "{", "}", "[", "]", "(", ")", ";", ",", "?", "$",
];

/// Lazily scans one code span.
#[derive(Debug, Clone)]
pub struct TokenScanner<'a> {
    text: &'a str,
    /// Document offset of `text[0]`.
    base: usize,
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    /// Scans `text`, reporting offsets relative to `base`.
    pub fn new(text: &'a str, base: usize) -> Self {
        Self { text, base, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn scan_number(&mut self, first: char) -> TokenCategory {
        self.bump();
        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.bump();
            if !self.peek().is_some_and(is_hex_digit) {
                // A `0x` prefix without digits is malformed.
                return TokenCategory::Undefined;
            }
            self.eat_while(|c| is_hex_digit(c) || c == '_');
            // So is one running into identifier characters, as in `0x1G`.
            if self.peek().is_some_and(is_identifier_part) {
                return TokenCategory::Undefined;
            }
            return TokenCategory::HexLiteral;
        }

        self.eat_while(|c| c.is_ascii_digit() || c == '_');
        if self.peek() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit() || c == '_')
        {
            self.bump();
            self.eat_while(|c| c.is_ascii_digit() || c == '_');
        }
        TokenCategory::Number
    }

    /// Scans a quoted literal. Stops after the closing quote, before a line
    /// delimiter, or at the end of the span.
    fn scan_quoted(&mut self, quote: char) {
        self.bump();
        while let Some(c) = self.peek() {
            match c {
                '\n' | '\r' => return,
                '\\' => {
                    self.bump();
                    if self.peek().is_some_and(|next| next != '\n' && next != '\r') {
                        self.bump();
                    }
                }
                _ if c == quote => {
                    self.bump();
                    return;
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    fn scan_operator(&mut self) -> bool {
        let rest = self.rest();
        match OPERATORS.iter().find(|op| rest.starts_with(*op)) {
            Some(op) => {
                self.pos += op.len();
                true
            }
            None => false,
        }
    }

    /// Keywords are matched on the leading run of letters alone, so `int32`
    /// is `int` followed by a number. Otherwise the whole identifier run is taken.
    fn scan_word(&mut self, start: usize) -> TokenCategory {
        self.eat_while(char::is_alphabetic);
        if let Some(category) = keyword_category(&self.text[start..self.pos]) {
            return category;
        }
        self.eat_while(is_identifier_part);
        TokenCategory::Identifier
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.eat_while(char::is_whitespace);
        let start = self.pos;
        let c = self.peek()?;

        let category = if c.is_ascii_digit() {
            self.scan_number(c)
        } else if c == '\'' {
            self.scan_quoted('\'');
            TokenCategory::Character
        } else if c == '"' {
            self.scan_quoted('"');
            TokenCategory::String
        } else if self.scan_operator() {
            TokenCategory::Operator
        } else if c == '@' {
            self.bump();
            self.eat_while(|c| is_identifier_part(c) || c == '.');
            TokenCategory::Attribute
        } else if is_identifier_start(c) {
            self.scan_word(start)
        } else {
            self.bump();
            TokenCategory::Undefined
        };

        Some(Token::new(category, self.base + start, self.base + self.pos))
    }
}

impl FusedIterator for TokenScanner<'_> {}

/// Tokenizes one partition of `document`. Comment partitions, and partitions
/// that do not fit the document, yield no tokens.
pub fn tokenize<'a>(document: &'a Document, partition: &Partition) -> TokenScanner<'a> {
    let text = if partition.kind.is_code() {
        document.text().get(partition.range()).unwrap_or("")
    } else {
        ""
    };
    TokenScanner::new(text, partition.start)
}

/// Tokenizes a standalone code snippet with offsets relative to its start.
pub fn tokenize_str(text: &str) -> TokenScanner<'_> {
    TokenScanner::new(text, 0)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
