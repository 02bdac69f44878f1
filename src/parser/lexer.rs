//! Lexer (tokenizer) for Hor source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser,
//! in a single left-to-right pass. Each position is classified by the first
//! matching rule:
//!
//! 1. whitespace is skipped
//! 2. a digit starts a number literal (at most one `.`)
//! 3. `"` starts a string literal (no escapes, quotes stripped)
//! 4. the two-character operator table
//! 5. the one-character operator table
//! 6. a letter or `_` starts an identifier, looked up in the keyword table
//! 7. anything else is [`LexError::UnrecognizedCharacter`]
//!
//! The two-character table is always consulted before the one-character table,
//! which is what makes `>=` a single token instead of `>` followed by `=`.
//! The stream always ends with exactly one [`TokenKind::Eof`].

use super::ast::SourceLocation;
use super::errors::LexError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// All token kinds produced by the lexer.
///
/// Kinds carry no payload; the lexeme lives in [`Token::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Grouping
    LParen,   // (
    RParen,   // )
    LBrace,   // {
    RBrace,   // }
    LBracket, // [
    RBracket, // ]

    // Arithmetic
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    StarStar,   // **
    Percent,    // %
    SlashSlash, // //

    // Logical
    AndAnd, // &&
    OrOr,   // ||
    Bang,   // !

    // Comparison
    Ge,   // >=
    Gt,   // >
    Le,   // <=
    Lt,   // <
    EqEq, // ==

    Identifier,

    // Literals
    StringLiteral,
    IntLiteral,
    FloatLiteral,
    BooleanLiteral,

    // Punctuation
    Dot,       // .
    Comma,     // ,
    Colon,     // :
    Semicolon, // ;
    Eq,        // =

    // Conditionals
    If,
    ElseIf,
    Else,
    Switch,
    Case,

    // Loops
    While,
    For,
    Foreach,

    // Declarations
    Mutable,
    Function,
    TypeName,

    // End of input
    Eof,
}

impl TokenKind {
    /// True for the kinds that carry a literal value
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BooleanLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::IntLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::BooleanLiteral => write!(f, "boolean literal"),
            TokenKind::TypeName => write!(f, "type name"),
            TokenKind::Eof => write!(f, "end of input"),
            other => match spelling(*other) {
                Some(text) => write!(f, "'{}'", text),
                None => write!(f, "{:?}", other),
            },
        }
    }
}

/// A single token. The lexeme is copied out of the source, so tokens outlive
/// the buffer they were read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact lexeme; string literals exclude their quotes, `Eof` is empty
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::StringLiteral => write!(f, "string literal \"{}\"", self.text),
            TokenKind::IntLiteral | TokenKind::FloatLiteral | TokenKind::BooleanLiteral => {
                write!(f, "{} {}", self.kind, self.text)
            }
            TokenKind::TypeName => write!(f, "type '{}'", self.text),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Two-character operators. Checked in order, before [`ONE_CHAR_OPERATORS`].
const TWO_CHAR_OPERATORS: [([char; 2], TokenKind); 7] = [
    (['>', '='], TokenKind::Ge),
    (['<', '='], TokenKind::Le),
    (['=', '='], TokenKind::EqEq),
    (['&', '&'], TokenKind::AndAnd),
    (['|', '|'], TokenKind::OrOr),
    (['*', '*'], TokenKind::StarStar),
    (['/', '/'], TokenKind::SlashSlash),
];

/// One-character punctuation and operators, checked in order.
const ONE_CHAR_OPERATORS: [(char, TokenKind); 19] = [
    ('=', TokenKind::Eq),
    (';', TokenKind::Semicolon),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('{', TokenKind::LBrace),
    ('}', TokenKind::RBrace),
    ('[', TokenKind::LBracket),
    (']', TokenKind::RBracket),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Star),
    ('/', TokenKind::Slash),
    ('%', TokenKind::Percent),
    ('!', TokenKind::Bang),
    (':', TokenKind::Colon),
    ('.', TokenKind::Dot),
    (',', TokenKind::Comma),
    ('>', TokenKind::Gt),
    ('<', TokenKind::Lt),
];

/// Reserved words. Matched against the whole identifier run, never a prefix.
const KEYWORDS: [(&str, TokenKind); 18] = [
    ("mut", TokenKind::Mutable),
    ("func", TokenKind::Function),
    ("true", TokenKind::BooleanLiteral),
    ("false", TokenKind::BooleanLiteral),
    ("int", TokenKind::TypeName),
    ("float", TokenKind::TypeName),
    ("string", TokenKind::TypeName),
    ("bool", TokenKind::TypeName),
    ("void", TokenKind::TypeName),
    ("auto", TokenKind::TypeName),
    ("if", TokenKind::If),
    ("elseif", TokenKind::ElseIf),
    ("else", TokenKind::Else),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("for", TokenKind::For),
    ("foreach", TokenKind::Foreach),
    ("while", TokenKind::While),
];

fn keyword_index() -> &'static FxHashMap<&'static str, TokenKind> {
    static INDEX: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    INDEX.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Source spelling of fixed-text kinds (operators, punctuation, keywords)
fn spelling(kind: TokenKind) -> Option<String> {
    if let Some((chars, _)) = TWO_CHAR_OPERATORS.iter().find(|(_, k)| *k == kind) {
        return Some(chars.iter().collect());
    }
    if let Some((ch, _)) = ONE_CHAR_OPERATORS.iter().find(|(_, k)| *k == kind) {
        return Some(ch.to_string());
    }
    if kind == TokenKind::BooleanLiteral || kind == TokenKind::TypeName {
        return None;
    }
    KEYWORDS
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(word, _)| word.to_string())
}

/// Lexer for Hor source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                let eof = Token::new(TokenKind::Eof, String::new(), self.current_location());
                self.emit(&mut tokens, eof)?;
                break;
            }

            let token = self.next_token()?;
            self.emit(&mut tokens, token)?;
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::Eof, String::new(), loc)),
        };

        if ch.is_ascii_digit() {
            return self.number_literal();
        }

        if ch == '"' {
            return self.string_literal();
        }

        // Two-character operators first (maximal munch)
        let next = self.peek_ahead(1);
        for (pattern, kind) in TWO_CHAR_OPERATORS.iter() {
            if ch == pattern[0] && next == Some(pattern[1]) {
                self.advance();
                self.advance();
                return Ok(Token::new(*kind, pattern.iter().collect::<String>(), loc));
            }
        }

        for (symbol, kind) in ONE_CHAR_OPERATORS.iter() {
            if ch == *symbol {
                self.advance();
                return Ok(Token::new(*kind, symbol.to_string(), loc));
            }
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            return self.identifier_or_keyword();
        }

        Err(LexError::UnrecognizedCharacter { ch, location: loc })
    }

    /// Parse numeric literal: digits with at most one '.'
    fn number_literal(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let mut num_str = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.peek() {
            if ch == '.' && !seen_dot {
                seen_dot = true;
            } else if !ch.is_ascii_digit() {
                break;
            }
            self.push_lexeme(&mut num_str, ch, loc)?;
            self.advance();
        }

        let kind = if seen_dot {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };
        Ok(Token::new(kind, num_str, loc))
    }

    /// Parse string literal; the quotes are not part of the stored text
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        self.advance(); // consume opening quote
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '"' {
                return Ok(Token::new(TokenKind::StringLiteral, string, loc));
            }
            self.push_lexeme(&mut string, ch, loc)?;
        }

        Err(LexError::UnterminatedStringLiteral { location: loc })
    }

    /// Parse identifier or keyword (letters and underscores only)
    fn identifier_or_keyword(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() || ch == '_' {
                self.push_lexeme(&mut ident, ch, loc)?;
                self.advance();
            } else {
                break;
            }
        }

        let kind = keyword_index()
            .get(ident.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        Ok(Token::new(kind, ident, loc))
    }

    /// Append one character to a lexeme under construction
    fn push_lexeme(
        &self,
        buffer: &mut String,
        ch: char,
        loc: SourceLocation,
    ) -> Result<(), LexError> {
        buffer
            .try_reserve(ch.len_utf8())
            .map_err(|_| LexError::AllocationFailure { location: loc })?;
        buffer.push(ch);
        Ok(())
    }

    fn emit(&self, tokens: &mut Vec<Token>, token: Token) -> Result<(), LexError> {
        tokens
            .try_reserve(1)
            .map_err(|_| LexError::AllocationFailure {
                location: token.location,
            })?;
        tokens.push(token);
        Ok(())
    }

    /// Skip spaces, tabs, carriage returns and newlines
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.offset, self.line, self.column)
    }
}
