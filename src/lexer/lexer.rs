/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     lexer.rs
 * Purpose:  Streaming lexical analysis with single-token lookahead and the
 *           skip operations the parser's panic-mode recovery relies on.
 *
 * Author:   Sam Wilcox
 * Email:    sam@fx-lang.com
 * Github:   https://github.com/samwilcox/fx
 *
 * License:
 * This file is part of the FX macro language project.
 *
 * FX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::sync::atomic::Ordering;

use crate::error::FxError;
use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::DEBUG_LEXER;
use crate::span::Place;

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    file: String,
    pending: Option<Token>,
    trace: bool,
}

impl Lexer {
    /// Creates a lexer over in-memory source text. The debug-trace flag is
    /// read once here and never consulted again mid-scan.
    pub fn new(source: &str, file: impl Into<String>) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            file: file.into(),
            pending: None,
            trace: DEBUG_LEXER.load(Ordering::Relaxed),
        }
    }

    pub fn filename(&self) -> &str {
        &self.file
    }

    /// The line the parser should report diagnostics at: the lookahead
    /// token's line when one is buffered, else the scan cursor's.
    pub fn line(&self) -> usize {
        match &self.pending {
            Some(t) => t.place.line,
            None => self.line,
        }
    }

    /// Returns the next token without consuming it. Stable across repeated
    /// calls until `lex`.
    pub fn peek(&mut self) -> Result<Token, FxError> {
        if let Some(t) = &self.pending {
            return Ok(t.clone());
        }
        let t = self.scan_token()?;
        self.pending = Some(t.clone());
        Ok(t)
    }

    /// Consumes and returns the next token.
    pub fn lex(&mut self) -> Result<Token, FxError> {
        let t = match self.pending.take() {
            Some(t) => t,
            None => self.scan_token()?,
        };
        if self.trace {
            eprintln!("lex: {:?} \"{}\"", t.kind, t.lexeme);
        }
        Ok(t)
    }

    /// Discards tokens until the lookahead is one of `stop`, which is left
    /// unconsumed. A terminating EOF is consumed.
    pub fn skip_until(&mut self, stop: &[TokenKind]) -> Result<(), FxError> {
        loop {
            let t = self.peek()?;
            if stop.contains(&t.kind) {
                return Ok(());
            }
            self.lex()?;
            if t.kind == TokenKind::Eof {
                return Ok(());
            }
        }
    }

    /// Discards tokens until the lookahead is `stop`, then consumes it.
    /// Stops (consuming) at EOF as well.
    pub fn skip_until_and_lex(&mut self, stop: TokenKind) -> Result<(), FxError> {
        loop {
            let t = self.peek()?;
            self.lex()?;
            if t.kind == stop || t.kind == TokenKind::Eof {
                return Ok(());
            }
        }
    }

    // ------------------------------------------------------------
    // SCANNING
    // ------------------------------------------------------------

    fn scan_token(&mut self) -> Result<Token, FxError> {
        self.skip_blanks();

        let place = Place::new(self.file.clone(), self.line);
        let ch = match self.advance() {
            Some(c) => c,
            None => return Ok(Token::eof(place)),
        };

        match ch {
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.word(ch, place)),
            '0'..='9' => self.number(ch, place),

            '(' => Ok(Token::new(TokenKind::LPar, "(", 0, place)),
            ')' => Ok(Token::new(TokenKind::RPar, ")", 0, place)),
            '{' => Ok(Token::new(TokenKind::LCurl, "{", 0, place)),
            '}' => Ok(Token::new(TokenKind::RCurl, "}", 0, place)),
            ',' => Ok(Token::new(TokenKind::Comma, ",", 0, place)),
            ';' => Ok(Token::new(TokenKind::Semicolon, ";", 0, place)),

            '+' => Ok(Token::new(TokenKind::Plus, "+", 0, place)),
            '-' => Ok(Token::new(TokenKind::Minus, "-", 0, place)),
            '/' => Ok(Token::new(TokenKind::Divide, "/", 0, place)),
            '%' => Ok(Token::new(TokenKind::Rem, "%", 0, place)),
            '|' => Ok(Token::new(TokenKind::Or, "|", 0, place)),
            '&' => Ok(Token::new(TokenKind::And, "&", 0, place)),
            '!' => Ok(Token::new(TokenKind::Not, "!", 0, place)),
            '^' => Ok(Token::new(TokenKind::Xor, "^", 0, place)),

            '*' => {
                if self.match_char('*') {
                    Ok(Token::new(TokenKind::Pow, "**", 0, place))
                } else {
                    Ok(Token::new(TokenKind::Times, "*", 0, place))
                }
            }

            '>' => {
                if self.match_char('=') {
                    Ok(Token::new(TokenKind::Gte, ">=", 0, place))
                } else {
                    Ok(Token::new(TokenKind::Gt, ">", 0, place))
                }
            }

            '<' => {
                if self.match_char('=') {
                    Ok(Token::new(TokenKind::Lte, "<=", 0, place))
                } else {
                    Ok(Token::new(TokenKind::Lt, "<", 0, place))
                }
            }

            '=' => Ok(Token::new(TokenKind::Assign, "=", 0, place)),

            ':' => {
                if self.match_char('=') {
                    Ok(Token::new(TokenKind::Decl, ":=", 0, place))
                } else {
                    Err(FxError::lex("unexpected ':'", place)
                        .with_help("iter control variables are declared with ':='"))
                }
            }

            other => Err(FxError::lex(
                format!("unexpected character '{}'", other),
                place,
            )),
        }
    }

    /// Identifier, keyword, `func`, or bool literal.
    fn word(&mut self, first: char, place: Place) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first);
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                lexeme.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }

        match lexeme.as_str() {
            "func" => Token::new(TokenKind::Func, lexeme, 0, place),
            "True" => Token::new(TokenKind::BoolLit, lexeme, 1, place),
            "False" => Token::new(TokenKind::BoolLit, lexeme, 0, place),
            w if is_keyword(w) => Token::new(TokenKind::Key, lexeme, 0, place),
            _ => Token::new(TokenKind::Id, lexeme, 0, place),
        }
    }

    /// Decimal or `0x` hexadecimal integer literal.
    fn number(&mut self, first: char, place: Place) -> Result<Token, FxError> {
        let mut lexeme = String::new();
        lexeme.push(first);

        let hex = first == '0' && matches!(self.peek_char(), Some('x') | Some('X'));
        if hex {
            lexeme.push(self.advance().expect("hex marker was peeked"));
            let mut digits = String::new();
            while let Some(c) = self.peek_char() {
                if c.is_ascii_hexdigit() {
                    digits.push(c);
                    self.pos += 1;
                } else {
                    break;
                }
            }
            if digits.is_empty() {
                return Err(FxError::lex("hex literal without digits", place));
            }
            lexeme.push_str(&digits);
            let value = i64::from_str_radix(&digits, 16)
                .map_err(|_| FxError::lex(format!("integer literal {} out of range", lexeme), place.clone()))?;
            return Ok(Token::new(TokenKind::IntLit, lexeme, value, place));
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                lexeme.push(c);
                self.pos += 1;
            } else {
                break;
            }
        }
        let value = lexeme
            .parse::<i64>()
            .map_err(|_| FxError::lex(format!("integer literal {} out of range", lexeme), place.clone()))?;
        Ok(Token::new(TokenKind::IntLit, lexeme, value, place))
    }

    /// Skips whitespace and `//` line comments, tracking line numbers.
    fn skip_blanks(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ') | Some('\t') | Some('\r') => {
                    self.pos += 1;
                }
                Some('\n') => {
                    self.pos += 1;
                    self.line += 1;
                }
                Some('/') if self.peek_char_at(1) == Some('/') => {
                    while let Some(c) = self.peek_char() {
                        if c == '\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return,
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if let Some(ch) = c {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
            }
        }
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }
}
