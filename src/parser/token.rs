//! Hand-written tokenizer for rule text.
//!
//! Converts a single rule into a bounded, positioned token stream. Two
//! things make this lexer unusual:
//!
//! - **Context sensitivity**: `x`/`X` are grid-size separators only while
//!   the lexer is inside the parenthesised grid specification ([`LexMode`]);
//!   everywhere else they are ordinary identifier letters. `×` is always a
//!   separator.
//! - **Glyph tokens**: any character outside the reserved punctuation set
//!   becomes a single [`TokenKind::Symbol`] token. Rust `char`s are Unicode
//!   scalar values, so a non-BMP glyph (emoji, rare CJK) is never split. A
//!   backslash escape turns a reserved character into a literal glyph.
//!
//! Resource limits (input length, wall-clock budget) are enforced here and
//! reported as [`ParseError::Limit`], distinct from syntax errors.

use std::fmt;
use std::time::Instant;

use crate::error::ParseError;
use crate::limits;
use crate::parser::span::Location;

/// Kinds of token emitted by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Semicolon,
    Comma,
    Dash,
    Equals,
    /// Grid-size separator: `×`, or `x`/`X` inside the grid spec.
    Times,
    /// Integer or decimal digit run; lexically non-negative.
    Number,
    /// One Unicode scalar value used as a glyph.
    Symbol,
    /// String delimited by `"`, `'`, or backtick, escapes processed.
    QuotedString,
    /// ASCII letter/underscore run.
    Identifier,
    /// Reserved punctuation with no structural meaning; the parser
    /// rejects these precisely instead of swallowing them as glyphs.
    Unknown,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Dash => "'-'",
            TokenKind::Equals => "'='",
            TokenKind::Times => "'×'",
            TokenKind::Number => "number",
            TokenKind::Symbol => "symbol",
            TokenKind::QuotedString => "quoted string",
            TokenKind::Identifier => "identifier",
            TokenKind::Unknown => "unexpected character",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// One token with its processed text and source location.
///
/// For quoted strings `text` holds the unescaped content; for escaped
/// glyphs it holds the literal character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: Location,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

/// Lexer context. `x`/`X` read as the grid-size separator only in
/// [`LexMode::GridSpec`], entered on `(` and left on `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexMode {
    Normal,
    GridSpec,
}

/// Reserved punctuation and whitespace.
///
/// A bare occurrence of any of these is either structural or an `Unknown`
/// token; using one as a glyph requires quoting or a backslash escape. The
/// serializer quotes glyphs from this set for the same reason.
pub(crate) fn is_reserved(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | ':'
            | ';'
            | ','
            | '-'
            | '='
            | '"'
            | '\''
            | '`'
            | '\\'
            | '<'
            | '>'
            | '^'
            | '@'
            | '#'
            | '№'
            | '!'
            | '?'
            | '*'
            | '×'
            | '÷'
            | '+'
            | '_'
            | '~'
            | '/'
            | '|'
            | '&'
            | '%'
            | '$'
            | ' '
    )
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Tokenize one rule into a token stream ending in `Eof`.
///
/// Rejects input longer than [`limits::MAX_INPUT_LENGTH`] scalar values
/// before any scanning, and enforces the wall-clock budget at every loop
/// iteration.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let length = input.chars().take(limits::MAX_INPUT_LENGTH + 1).count();
    if length > limits::MAX_INPUT_LENGTH {
        return Err(ParseError::limit(
            format!(
                "input too long: over {} characters (max {})",
                limits::MAX_INPUT_LENGTH,
                limits::MAX_INPUT_LENGTH
            ),
            None,
        ));
    }

    Tokenizer::new(input).run()
}

struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
    byte: usize,
    line: u32,
    column: u32,
    mode: LexMode,
    started: Instant,
}

impl Tokenizer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            byte: 0,
            line: 1,
            column: 1,
            mode: LexMode::Normal,
            started: Instant::now(),
        }
    }

    fn check_timeout(&self) -> Result<(), ParseError> {
        if self.started.elapsed() > limits::PARSE_TIMEOUT {
            Err(ParseError::limit("parsing timeout exceeded", self.location()))
        } else {
            Ok(())
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn location(&self) -> Location {
        Location::new(self.byte, self.line, self.column)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.byte += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_skippable) {
            self.advance();
        }
    }

    /// Consume the current character as a single-character token.
    fn punct(&mut self, kind: TokenKind) -> Token {
        let location = self.location();
        let c = self.peek().unwrap_or_default();
        self.advance();
        Token::new(kind, c.to_string(), location)
    }

    fn read_number(&mut self) -> Token {
        let location = self.location();
        let mut text = String::new();

        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            text.push(c);
            self.advance();
        }

        if self.peek() == Some('.') {
            text.push('.');
            self.advance();
            while let Some(c) = self.peek().filter(char::is_ascii_digit) {
                text.push(c);
                self.advance();
            }
        }

        Token::new(TokenKind::Number, text, location)
    }

    fn read_quoted(&mut self, quote: char) -> Result<Token, ParseError> {
        let location = self.location();
        let mut text = String::new();

        self.advance(); // opening quote

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(Token::new(TokenKind::QuotedString, text, location));
                }
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some('n') => text.push('\n'),
                        Some('t') => text.push('\t'),
                        Some('r') => text.push('\r'),
                        Some(other) => text.push(other),
                        None => break,
                    }
                    self.advance();
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
                None => break,
            }
        }

        Err(ParseError::syntax(
            format!(
                "unclosed quote starting at line {}, column {}",
                location.line, location.column
            ),
            location,
        ))
    }

    fn read_identifier(&mut self) -> Token {
        let location = self.location();
        let mut text = String::new();

        while let Some(c) = self.peek().filter(|&c| is_identifier_char(c)) {
            text.push(c);
            self.advance();
        }

        Token::new(TokenKind::Identifier, text, location)
    }

    /// Read one glyph: a single scalar value, or a backslash escape that
    /// makes a reserved character usable as a glyph.
    fn read_symbol(&mut self) -> Result<Token, ParseError> {
        let location = self.location();

        if self.peek() == Some('\\') {
            self.advance();
            return match self.peek() {
                Some(escaped) => {
                    self.advance();
                    Ok(Token::new(TokenKind::Symbol, escaped.to_string(), location))
                }
                None => Err(ParseError::syntax("invalid escape at end of input", location)),
            };
        }

        match self.peek() {
            Some(c) => {
                self.advance();
                Ok(Token::new(TokenKind::Symbol, c.to_string(), location))
            }
            None => Err(ParseError::syntax("unexpected end of input", location)),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        while self.pos < self.chars.len() {
            self.check_timeout()?;
            self.skip_whitespace();

            let Some(c) = self.peek() else { break };

            match c {
                '(' => {
                    self.mode = LexMode::GridSpec;
                    tokens.push(self.punct(TokenKind::LParen));
                }
                ')' => {
                    self.mode = LexMode::Normal;
                    tokens.push(self.punct(TokenKind::RParen));
                }
                '[' => tokens.push(self.punct(TokenKind::LBracket)),
                ']' => tokens.push(self.punct(TokenKind::RBracket)),
                ':' => tokens.push(self.punct(TokenKind::Colon)),
                ';' => tokens.push(self.punct(TokenKind::Semicolon)),
                ',' => tokens.push(self.punct(TokenKind::Comma)),
                '-' => tokens.push(self.punct(TokenKind::Dash)),
                '=' => tokens.push(self.punct(TokenKind::Equals)),
                '×' => tokens.push(self.punct(TokenKind::Times)),
                'x' | 'X' if self.mode == LexMode::GridSpec => {
                    tokens.push(self.punct(TokenKind::Times));
                }
                '"' | '\'' | '`' => tokens.push(self.read_quoted(c)?),
                '\\' => tokens.push(self.read_symbol()?),
                _ if c.is_ascii_digit() => tokens.push(self.read_number()),
                _ if is_identifier_char(c) => tokens.push(self.read_identifier()),
                _ if is_reserved(c) => tokens.push(self.punct(TokenKind::Unknown)),
                _ => tokens.push(self.read_symbol()?),
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.location()));
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_basic_rule() {
        use TokenKind::*;
        assert_eq!(
            kinds("(5):F12-12"),
            vec![LParen, Number, RParen, Colon, Identifier, Number, Dash, Number, Eof]
        );
    }

    #[test]
    fn test_x_is_separator_only_in_grid_spec() {
        use TokenKind::*;
        assert_eq!(
            kinds("(8x4):x2-3"),
            vec![LParen, Number, Times, Number, RParen, Colon, Identifier, Number, Dash, Number, Eof]
        );
    }

    #[test]
    fn test_times_sign_always_separator() {
        let tokens = tokenize("(10×3):F0-29").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Times);
        assert_eq!(tokens[2].text, "×");
    }

    #[test]
    fn test_unicode_glyph_is_single_token() {
        let tokens = tokenize("(5):→2-4").unwrap();
        assert_eq!(tokens[4].kind, TokenKind::Symbol);
        assert_eq!(tokens[4].text, "→");

        // Non-BMP scalar (would be a surrogate pair in UTF-16).
        let tokens = tokenize("(5):🎉2-4").unwrap();
        assert_eq!(tokens[4].kind, TokenKind::Symbol);
        assert_eq!(tokens[4].text, "🎉");
    }

    #[test]
    fn test_escaped_reserved_char_becomes_glyph() {
        let tokens = tokenize("(5):\\;2-4").unwrap();
        assert_eq!(tokens[4].kind, TokenKind::Symbol);
        assert_eq!(tokens[4].text, ";");
    }

    #[test]
    fn test_bare_reserved_char_is_unknown() {
        let tokens = tokenize("(5):*2-4").unwrap();
        assert_eq!(tokens[4].kind, TokenKind::Unknown);
        assert_eq!(tokens[4].text, "*");
    }

    #[test]
    fn test_quoted_string_escapes() {
        let tokens = tokenize(r#""a\nb\t\"c""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::QuotedString);
        assert_eq!(tokens[0].text, "a\nb\t\"c");
    }

    #[test]
    fn test_all_three_quote_delimiters() {
        for input in [r#""hi""#, "'hi'", "`hi`"] {
            let tokens = tokenize(input).unwrap();
            assert_eq!(tokens[0].kind, TokenKind::QuotedString);
            assert_eq!(tokens[0].text, "hi");
        }
    }

    #[test]
    fn test_unclosed_quote_reports_opening_position() {
        let err = tokenize("(5):\"oops2-4").unwrap_err();
        assert!(!err.is_limit());
        assert_eq!(err.column(), Some(5));
        assert!(err.message().contains("unclosed quote"));
    }

    #[test]
    fn test_decimal_number() {
        let tokens = tokenize("0.75").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "0.75");
    }

    #[test]
    fn test_positions_track_lines_and_columns() {
        let tokens = tokenize("(5)\n:F").unwrap();
        let colon = &tokens[3];
        assert_eq!(colon.kind, TokenKind::Colon);
        assert_eq!(colon.location.line, 2);
        assert_eq!(colon.location.column, 1);
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        use TokenKind::*;
        assert_eq!(
            kinds(" ( 5 ) : F 1 - 2 "),
            vec![LParen, Number, RParen, Colon, Identifier, Number, Dash, Number, Eof]
        );
    }

    #[test]
    fn test_input_length_limit() {
        let long = "a".repeat(limits::MAX_INPUT_LENGTH + 1);
        let err = tokenize(&long).unwrap_err();
        assert!(err.is_limit());

        let ok = "a".repeat(limits::MAX_INPUT_LENGTH);
        assert!(tokenize(&ok).is_ok());
    }

    #[test]
    fn test_trailing_eof_always_emitted() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_escape_at_end_of_input() {
        let err = tokenize("(5):\\").unwrap_err();
        assert!(err.message().contains("escape"));
    }
}
