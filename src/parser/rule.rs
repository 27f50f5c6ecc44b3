//! Recursive-descent parser for a single rule.
//!
//! Consumes the token stream produced by [`super::token`] and yields a
//! [`UniCompSpec`] or a positioned [`ParseError`]. Grammar, informally:
//!
//! ```text
//! spec        := gridSpec ':' symbolList
//! gridSpec    := '(' NUMBER [SEP NUMBER] ')' | NUMBER
//! symbolList  := symbol (';' symbol)*
//! symbol      := symbolChar [params] [','] indexRange
//! symbolChar  := SYMBOL | QUOTED_STRING | IDENTIFIER
//! params      := '[' paramEntry (';' paramEntry)* ']'
//! paramEntry  := KEY '=' value
//! indexRange  := NUMBER '-' NUMBER
//! ```
//!
//! A multi-character identifier with an all-digit suffix is split: the
//! leading character becomes the glyph and the suffix is held as a pending
//! number token consumed next. This is modelled as one-token lookahead, not
//! by mutating the token stream.
//!
//! Resource guards (symbol count, parameters per symbol, wall-clock budget)
//! are enforced while parsing and reported as [`ParseError::Limit`].

use std::time::Instant;

use crate::error::ParseError;
use crate::limits;
use crate::parser::span::Location;
use crate::parser::token::{Token, TokenKind};
use crate::types::{is_valid_colour, BoxValue, ParseResult, Scale, SymbolSpec, UniCompSpec};

pub(crate) struct RuleParser {
    tokens: Vec<Token>,
    pos: usize,
    /// Synthetic number token produced by splitting an identifier glyph,
    /// consumed before the token at `pos`.
    pending: Option<Token>,
    symbols_parsed: usize,
    started: Instant,
}

impl RuleParser {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            pending: None,
            symbols_parsed: 0,
            started: Instant::now(),
        }
    }

    pub(crate) fn run(mut self) -> ParseResult {
        let grid_location = self.current().location;
        let (width, height) = self.parse_grid_spec()?;

        for (label, value) in [("width", width), ("height", height)] {
            if !(limits::MIN_GRID_SIZE..=limits::MAX_GRID_SIZE).contains(&value) {
                return Err(ParseError::limit(
                    format!(
                        "grid {} must be between {} and {}, got {}",
                        label,
                        limits::MIN_GRID_SIZE,
                        limits::MAX_GRID_SIZE,
                        value
                    ),
                    grid_location,
                ));
            }
        }

        self.expect(TokenKind::Colon)?;

        let mut spec = UniCompSpec::new(width, height);

        while self.current().kind != TokenKind::Eof {
            let symbol = self.parse_symbol(width, height)?;
            spec.symbols.push(symbol);

            if self.current().kind == TokenKind::Semicolon {
                self.advance();
            } else if self.current().kind != TokenKind::Eof {
                let token = self.current();
                return Err(ParseError::syntax(
                    format!(
                        "unexpected token {} \"{}\": expected ';' or end of input",
                        token.kind, token.text
                    ),
                    token.location,
                ));
            }
        }

        spec.raw = raw_text(&self.tokens);
        Ok(spec)
    }

    fn check_timeout(&self) -> Result<(), ParseError> {
        if self.started.elapsed() > limits::PARSE_TIMEOUT {
            Err(ParseError::limit(
                "parsing timeout exceeded",
                self.current().location,
            ))
        } else {
            Ok(())
        }
    }

    fn current(&self) -> &Token {
        self.pending.as_ref().unwrap_or(&self.tokens[self.pos])
    }

    /// The token after the current one, honouring a pending split token.
    fn peek_next(&self) -> &Token {
        if self.pending.is_some() {
            &self.tokens[self.pos]
        } else {
            self.tokens.get(self.pos + 1).unwrap_or(&self.tokens[self.pos])
        }
    }

    fn advance(&mut self) {
        if self.pending.take().is_some() {
            return;
        }
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.current().clone();
        if token.kind != kind {
            return Err(ParseError::syntax(
                format!("expected {} but got {} \"{}\"", kind, token.kind, token.text),
                token.location,
            ));
        }
        self.advance();
        Ok(token)
    }

    /// `(W)` or `(W×H)` or a bare number; one number means a square grid.
    fn parse_grid_spec(&mut self) -> Result<(usize, usize), ParseError> {
        if self.current().kind == TokenKind::LParen {
            self.advance();
            let first = self.expect(TokenKind::Number)?;
            let width = parse_cell_index(&first)?;

            let height = if self.current().kind == TokenKind::Times {
                self.advance();
                let second = self.expect(TokenKind::Number)?;
                parse_cell_index(&second)?
            } else {
                width
            };

            self.expect(TokenKind::RParen)?;
            Ok((width, height))
        } else {
            let token = self.expect(TokenKind::Number)?;
            let size = parse_cell_index(&token)?;
            Ok((size, size))
        }
    }

    fn parse_symbol(&mut self, width: usize, height: usize) -> Result<SymbolSpec, ParseError> {
        self.check_timeout()?;
        if self.symbols_parsed >= limits::MAX_SYMBOLS {
            return Err(ParseError::limit(
                format!("too many symbols: max {}", limits::MAX_SYMBOLS),
                self.current().location,
            ));
        }
        self.symbols_parsed += 1;

        let glyph = self.parse_symbol_char()?;
        let mut symbol = SymbolSpec::new(glyph, 0, 0);
        self.parse_params(&mut symbol)?;

        if self.current().kind == TokenKind::Comma {
            self.advance();
        }

        let range_location = self.current().location;
        let (start, end) = self.parse_index_range()?;

        let max_index = width * height - 1;
        if start > max_index || end > max_index {
            return Err(ParseError::syntax(
                format!(
                    "index out of bounds: valid range for {}×{} grid is 0-{}",
                    width, height, max_index
                ),
                range_location,
            ));
        }

        symbol.start = start;
        symbol.end = end;
        Ok(symbol)
    }

    /// The glyph of a symbol: a symbol token, a quoted string, or an
    /// identifier. An identifier like `F5` splits into glyph `F` plus a
    /// pending number token `5`; an identifier with a non-digit tail (`AB`)
    /// is one multi-character literal glyph.
    fn parse_symbol_char(&mut self) -> Result<String, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Symbol | TokenKind::QuotedString => {
                self.advance();
                Ok(token.text)
            }
            TokenKind::Identifier => {
                self.advance();
                let mut chars = token.text.chars();
                let first = chars.next().unwrap_or_default();
                let rest = chars.as_str();

                if rest.is_empty() {
                    return Ok(first.to_string());
                }
                if rest.chars().all(|c| c.is_ascii_digit()) {
                    let mut location = token.location;
                    location.offset += first.len_utf8();
                    location.column += 1;
                    self.pending = Some(Token {
                        kind: TokenKind::Number,
                        text: rest.to_string(),
                        location,
                    });
                    Ok(first.to_string())
                } else {
                    Ok(token.text)
                }
            }
            _ => Err(ParseError::syntax(
                format!("expected symbol but got {} \"{}\"", token.kind, token.text),
                token.location,
            )),
        }
    }

    fn parse_params(&mut self, symbol: &mut SymbolSpec) -> Result<(), ParseError> {
        if self.current().kind != TokenKind::LBracket {
            return Ok(());
        }
        self.advance();

        let mut entries = 0;
        while !matches!(self.current().kind, TokenKind::RBracket | TokenKind::Eof) {
            if entries >= limits::MAX_PARAMS_PER_SYMBOL {
                return Err(ParseError::limit(
                    format!("too many parameters: max {}", limits::MAX_PARAMS_PER_SYMBOL),
                    self.current().location,
                ));
            }
            entries += 1;

            let key = self.current().clone();
            if key.kind != TokenKind::Identifier {
                return Err(ParseError::syntax(
                    format!("expected parameter key but got {} \"{}\"", key.kind, key.text),
                    key.location,
                ));
            }
            self.advance();

            self.expect(TokenKind::Equals)?;
            let (value, value_location) = self.read_param_value()?;
            apply_param(symbol, &key.text, &value, value_location)?;

            if self.current().kind == TokenKind::Semicolon {
                self.advance();
            }
        }

        self.expect(TokenKind::RBracket)?;
        Ok(())
    }

    /// One parameter value: a number (optionally dash-negated), symbol,
    /// quoted string, or identifier. A bare numeric value followed by
    /// `,` and another number is read as a two-valued pair, which is how
    /// the serializer emits non-uniform scale.
    fn read_param_value(&mut self) -> Result<(String, Location), ParseError> {
        let token = self.current().clone();
        let location = token.location;

        let numeric = matches!(token.kind, TokenKind::Number | TokenKind::Dash);
        let mut value = match token.kind {
            TokenKind::Number | TokenKind::Dash => self.read_numeric(),
            TokenKind::Symbol | TokenKind::QuotedString | TokenKind::Identifier => {
                self.advance();
                token.text
            }
            _ => {
                return Err(ParseError::syntax(
                    format!(
                        "expected parameter value but got {} \"{}\"",
                        token.kind, token.text
                    ),
                    location,
                ))
            }
        };

        if numeric
            && self.current().kind == TokenKind::Comma
            && matches!(self.peek_next().kind, TokenKind::Number | TokenKind::Dash)
        {
            self.advance();
            let second = self.read_numeric();
            value.push(',');
            value.push_str(&second);
        }

        Ok((value, location))
    }

    /// Read a number with an optional leading dash. Current token must be
    /// `Dash` or `Number`.
    fn read_numeric(&mut self) -> String {
        if self.current().kind == TokenKind::Dash {
            self.advance();
            if self.current().kind == TokenKind::Number {
                let text = self.current().text.clone();
                self.advance();
                format!("-{}", text)
            } else {
                "-".to_string()
            }
        } else {
            let text = self.current().text.clone();
            self.advance();
            text
        }
    }

    fn parse_index_range(&mut self) -> Result<(usize, usize), ParseError> {
        let start_token = self.expect(TokenKind::Number)?;
        let start = parse_cell_index(&start_token)?;

        let dash = self.current().clone();
        if dash.kind != TokenKind::Dash {
            return Err(ParseError::syntax(
                format!(
                    "expected '-' after index but got {} \"{}\"",
                    dash.kind, dash.text
                ),
                dash.location,
            ));
        }
        self.advance();

        let end_token = self.current().clone();
        if end_token.kind != TokenKind::Number {
            return Err(ParseError::syntax(
                format!(
                    "expected number after '-' but got {} \"{}\": invalid index range",
                    end_token.kind, end_token.text
                ),
                end_token.location,
            ));
        }
        self.advance();
        let end = parse_cell_index(&end_token)?;

        Ok((start, end))
    }
}

/// Dispatch one `key=value` entry onto the symbol. Keys are
/// case-insensitive and aliased; unrecognized keys are ignored for
/// forward compatibility.
fn apply_param(
    symbol: &mut SymbolSpec,
    key: &str,
    value: &str,
    location: Location,
) -> Result<(), ParseError> {
    match key.to_ascii_lowercase().as_str() {
        "c" | "color" => {
            if !is_valid_colour(value) {
                return Err(ParseError::syntax(
                    format!("invalid color: \"{}\"", value),
                    location,
                ));
            }
            symbol.color = Some(value.to_string());
        }
        "a" | "alpha" | "opacity" => {
            let opacity = parse_float("opacity", value, location)?;
            if !(0.0..=1.0).contains(&opacity) {
                return Err(ParseError::syntax(
                    format!("invalid opacity: \"{}\" (must be 0-1)", value),
                    location,
                ));
            }
            symbol.opacity = Some(opacity);
        }
        "r" | "rotate" => {
            let rotate = parse_float("rotation", value, location)?;
            symbol.rotate = Some(normalize_rotation(rotate));
        }
        "f" | "flip" => {
            symbol.flip = Some(value.parse().map_err(|_| {
                ParseError::syntax(
                    format!("invalid flip: \"{}\" (must be h, v, or hv)", value),
                    location,
                )
            })?);
        }
        "font" | "fontfamily" => symbol.font_family = Some(value.to_string()),
        "n" | "name" => symbol.name = Some(value.to_string()),
        "id" => symbol.id = Some(value.to_string()),
        "class" | "classname" => symbol.class_name = Some(value.to_string()),
        "s" | "scale" => {
            symbol.scale = Some(Scale::parse(value).ok_or_else(|| {
                ParseError::syntax(
                    format!(
                        "invalid scale: \"{}\" (must be one or two positive numbers)",
                        value
                    ),
                    location,
                )
            })?);
        }
        "t" | "transition" => {
            let transition = parse_float("transition", value, location)?;
            if transition < 0.0 {
                return Err(ParseError::syntax(
                    format!("invalid transition: \"{}\" (must be >= 0)", value),
                    location,
                ));
            }
            symbol.transition = Some(transition);
        }
        "m" | "margin" => symbol.margin = Some(BoxValue::parse(value)),
        "p" | "position" => symbol.position = Some(BoxValue::parse(value)),
        _ => {}
    }
    Ok(())
}

fn parse_float(what: &str, value: &str, location: Location) -> Result<f32, ParseError> {
    value.parse().map_err(|_| {
        ParseError::syntax(
            format!("invalid {}: \"{}\" (must be a number)", what, value),
            location,
        )
    })
}

/// Normalize a rotation into `[0, 360)`.
fn normalize_rotation(degrees: f32) -> f32 {
    ((degrees % 360.0) + 360.0) % 360.0
}

fn parse_cell_index(token: &Token) -> Result<usize, ParseError> {
    token.text.parse().map_err(|_| {
        ParseError::syntax(
            format!("expected integer but got \"{}\"", token.text),
            token.location,
        )
    })
}

/// Rebuild canonical source text from the consumed token stream. Quoted
/// strings are re-quoted and reserved or digit glyphs re-escaped so the
/// result parses back to the same spec; insignificant whitespace is gone.
fn raw_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::Eof => {}
            TokenKind::QuotedString => out.push_str(&crate::serialize::quote(&token.text)),
            TokenKind::Symbol => {
                let needs_escape = token
                    .text
                    .chars()
                    .next()
                    .is_some_and(|c| crate::parser::token::is_reserved(c) || c.is_ascii_digit());
                if needs_escape {
                    out.push('\\');
                }
                out.push_str(&token.text);
            }
            _ => out.push_str(&token.text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_square_grid() {
        let spec = parse("(5):F12-12").unwrap();
        assert_eq!(spec.grid_width, 5);
        assert_eq!(spec.grid_height, 5);
        assert_eq!(spec.symbols.len(), 1);
        assert_eq!(spec.symbols[0].glyph, "F");
        assert_eq!(spec.symbols[0].start, 12);
        assert_eq!(spec.symbols[0].end, 12);
    }

    #[test]
    fn test_rectangular_grid() {
        let spec = parse("(10×3):F15-17").unwrap();
        assert_eq!(spec.grid_width, 10);
        assert_eq!(spec.grid_height, 3);
    }

    #[test]
    fn test_lowercase_x_separator() {
        let spec = parse("(8x4):A15-17").unwrap();
        assert_eq!(spec.grid_width, 8);
        assert_eq!(spec.grid_height, 4);
    }

    #[test]
    fn test_bare_number_grid() {
        let spec = parse("6:F2-3").unwrap();
        assert_eq!(spec.grid_width, 6);
        assert_eq!(spec.grid_height, 6);
    }

    #[test]
    fn test_index_bounds_for_rectangular_grid() {
        assert!(parse("(10×3):F0-29").is_ok());

        let err = parse("(10×3):F0-30").unwrap_err();
        assert!(!err.is_limit());
        assert!(err.message().contains("0-29"));
    }

    #[test]
    fn test_reversed_corners_accepted() {
        let spec = parse("(5):F12-2").unwrap();
        assert_eq!(spec.symbols[0].start, 12);
        assert_eq!(spec.symbols[0].end, 2);
    }

    #[test]
    fn test_quoted_digit_glyph() {
        let spec = parse("(6):\"2\"4-4").unwrap();
        assert_eq!(spec.symbols[0].glyph, "2");
    }

    #[test]
    fn test_multiple_symbols_preserve_layer_order() {
        let spec = parse("(5):F12-12;→2-4").unwrap();
        assert_eq!(spec.symbols.len(), 2);
        assert_eq!(spec.symbols[0].glyph, "F");
        assert_eq!(spec.symbols[1].glyph, "→");
    }

    #[test]
    fn test_multi_letter_identifier_glyph() {
        let spec = parse("(5):AB2-3").unwrap();
        assert_eq!(spec.symbols[0].glyph, "AB");
    }

    #[test]
    fn test_color_param() {
        let spec = parse("(5):F[c=red]12-12").unwrap();
        assert_eq!(spec.symbols[0].color.as_deref(), Some("red"));
    }

    #[test]
    fn test_hex_color_param() {
        let spec = parse("(5):F[c=\"#FF0000\"]12-12").unwrap();
        assert_eq!(spec.symbols[0].color.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn test_unquoted_hex_color_rejected() {
        // Hex values must be quoted: a bare # is reserved punctuation.
        let err = parse("(5):F[c=#FF0000]12-12").unwrap_err();
        assert!(err.message().contains("expected parameter value"));
    }

    #[test]
    fn test_fully_styled_symbol() {
        let spec = parse("(20×10):\"→\"[c=\"#FF5733\";a=0.8;f=hv;s=1.5,2;font=monospace]12-48")
            .unwrap();
        let sym = &spec.symbols[0];
        assert_eq!(sym.glyph, "→");
        assert_eq!(sym.color.as_deref(), Some("#FF5733"));
        assert_eq!(sym.opacity, Some(0.8));
        assert_eq!(sym.font_family.as_deref(), Some("monospace"));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = parse("(5):F[c=blurple]12-12").unwrap_err();
        assert!(err.message().contains("invalid color"));
    }

    #[test]
    fn test_opacity_range() {
        let spec = parse("(5):F[a=0.5]1-2").unwrap();
        assert_eq!(spec.symbols[0].opacity, Some(0.5));

        assert!(parse("(5):F[a=1.5]1-2").is_err());
        assert!(parse("(5):F[a=-0.1]1-2").is_err());
    }

    #[test]
    fn test_rotation_normalized() {
        let spec = parse("(6):→[r=90]14-14").unwrap();
        assert_eq!(spec.symbols[0].rotate, Some(90.0));

        let spec = parse("(5):F[r=-30]1-2").unwrap();
        assert_eq!(spec.symbols[0].rotate, Some(330.0));

        let spec = parse("(5):F[r=720]1-2").unwrap();
        assert_eq!(spec.symbols[0].rotate, Some(0.0));
    }

    #[test]
    fn test_flip_values() {
        use crate::types::Flip;
        let spec = parse("(5):F[f=hv]1-2").unwrap();
        assert_eq!(spec.symbols[0].flip, Some(Flip::Both));

        assert!(parse("(5):F[f=d]1-2").is_err());
    }

    #[test]
    fn test_scale_uniform_and_pair() {
        let spec = parse("(5):F[s=1.5]1-2").unwrap();
        assert_eq!(spec.symbols[0].scale, Some(Scale { x: 1.5, y: 1.5 }));

        // Bare two-valued form, as the serializer emits it.
        let spec = parse("(5):F[s=1.5,2]1-2").unwrap();
        assert_eq!(spec.symbols[0].scale, Some(Scale { x: 1.5, y: 2.0 }));

        assert!(parse("(5):F[s=0]1-2").is_err());
    }

    #[test]
    fn test_margin_box_value() {
        let spec = parse("(5):F[m=\"1t 2r\"]1-2").unwrap();
        let margin = spec.symbols[0].margin.unwrap();
        assert_eq!(margin.top, 1.0);
        assert_eq!(margin.right, 2.0);
        assert_eq!(margin.bottom, 0.0);
    }

    #[test]
    fn test_transition_param() {
        let spec = parse("(5):F[t=0.3]1-2").unwrap();
        assert_eq!(spec.symbols[0].transition, Some(0.3));

        assert!(parse("(5):F[t=-1]1-2").is_err());
    }

    #[test]
    fn test_string_params() {
        let spec = parse("(5):F[n=\"hero\";id=a;class=\"big\";font=\"Fira Code\"]1-2").unwrap();
        let sym = &spec.symbols[0];
        assert_eq!(sym.name.as_deref(), Some("hero"));
        assert_eq!(sym.id.as_deref(), Some("a"));
        assert_eq!(sym.class_name.as_deref(), Some("big"));
        assert_eq!(sym.font_family.as_deref(), Some("Fira Code"));
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let spec = parse("(5):F[zz=1;c=red]1-2").unwrap();
        assert_eq!(spec.symbols[0].color.as_deref(), Some("red"));
    }

    #[test]
    fn test_param_keys_case_insensitive() {
        let spec = parse("(5):F[COLOR=red;Rotate=90]1-2").unwrap();
        assert_eq!(spec.symbols[0].color.as_deref(), Some("red"));
        assert_eq!(spec.symbols[0].rotate, Some(90.0));
    }

    #[test]
    fn test_optional_comma_before_range() {
        let spec = parse("(5):F[c=red],1-2").unwrap();
        assert_eq!(spec.symbols[0].start, 1);
    }

    #[test]
    fn test_grid_size_out_of_range_is_limit_error() {
        for input in ["(1):F0-0", "(101):F0-0", "(5×150):F0-0"] {
            let err = parse(input).unwrap_err();
            assert!(err.is_limit(), "{} should hit the grid limit", input);
        }
    }

    #[test]
    fn test_symbol_count_limit() {
        let mut rule = String::from("(100):");
        let symbols: Vec<&str> = std::iter::repeat("A0-0").take(1001).collect();
        rule.push_str(&symbols.join(";"));

        let err = parse(&rule).unwrap_err();
        assert!(err.is_limit());
        assert!(err.message().contains("too many symbols"));

        let mut ok = String::from("(100):");
        let symbols: Vec<&str> = std::iter::repeat("A0-0").take(1000).collect();
        ok.push_str(&symbols.join(";"));
        assert!(parse(&ok).is_ok());
    }

    #[test]
    fn test_param_count_limit() {
        // 11 entries; unrecognized keys still count against the cap.
        let entries: Vec<String> = (b'a'..=b'k').map(|c| format!("q{}=1", c as char)).collect();
        let rule = format!("(5):F[{}]1-2", entries.join(";"));
        let err = parse(&rule).unwrap_err();
        assert!(err.is_limit());
        assert!(err.message().contains("too many parameters"));
    }

    #[test]
    fn test_missing_dash_in_range() {
        let err = parse("(5):F1 2").unwrap_err();
        assert!(err.message().contains("expected '-' after index"));
    }

    #[test]
    fn test_trailing_junk_rejected() {
        let err = parse("(5):F1-2 3").unwrap_err();
        assert!(err.message().contains("expected ';' or end of input"));
    }

    #[test]
    fn test_error_carries_position() {
        let err = parse("(5):F1-x").unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.column(), Some(8));
    }

    #[test]
    fn test_raw_is_canonicalized() {
        let spec = parse("( 5 ) : F 12 - 12").unwrap();
        assert_eq!(spec.raw, "(5):F12-12");
    }

    #[test]
    fn test_raw_requotes_strings_and_escapes() {
        let spec = parse("(6):'2'4-4").unwrap();
        assert_eq!(spec.raw, "(6):\"2\"4-4");
        assert!(parse(&spec.raw).is_ok());

        let spec = parse("(5):\\;2-4").unwrap();
        assert_eq!(spec.raw, "(5):\\;2-4");
        assert!(parse(&spec.raw).is_ok());
    }

    #[test]
    fn test_empty_symbol_list() {
        let spec = parse("(5):").unwrap();
        assert!(spec.symbols.is_empty());
    }

    #[test]
    fn test_decimal_grid_size_rejected() {
        let err = parse("(5.5):F1-2").unwrap_err();
        assert!(err.message().contains("expected integer"));
    }

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(normalize_rotation(-30.0), 330.0);
        assert_eq!(normalize_rotation(720.0), 0.0);
        assert_eq!(normalize_rotation(0.0), 0.0);
        assert_eq!(normalize_rotation(359.5), 359.5);
    }
}
