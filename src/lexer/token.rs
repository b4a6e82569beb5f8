/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     token.rs
 * Purpose:  The lexical token types shared by the lexer and the parser.
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

use std::fmt;

use crate::span::Place;

/// The category of a lexical token.
///
/// Each kind directly drives statement classification, the Pratt
/// expression parser's binding powers, and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A user-defined name (variable, function, or type name).
    Id,

    /// An integer literal: `42` or `0x2a`.
    IntLit,

    /// A bool literal: `True` or `False`.
    BoolLit,

    /// A reserved word other than `func`: `iter`, `if`, `else`.
    Key,

    /// The `func` reserved word, which opens every macro definition.
    Func,

    /// End-of-file marker; produced forever once the source is exhausted.
    Eof,

    // Punctuation
    LPar,
    RPar,
    LCurl,
    RCurl,
    Comma,
    Semicolon,

    /// `=` in an assignment statement.
    Assign,

    /// `:=` declaring an iter control variable.
    Decl,

    // Operators
    Plus,
    Minus,
    Times,
    Divide,
    Rem,
    Pow,
    Gt,
    Gte,
    Lt,
    Lte,
    Or,
    And,
    Not,
    Xor,
}

/// A single classified unit of source code.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Numeric payload: the parsed value of `IntLit`, 1/0 for `BoolLit`,
    /// 0 for everything else.
    pub value: i64,

    /// Where the token appeared.
    pub place: Place,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, value: i64, place: Place) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            value,
            place,
        }
    }

    pub fn eof(place: Place) -> Self {
        Self::new(TokenKind::Eof, "EOF", 0, place)
    }
}

impl fmt::Display for Token {
    /// Prints only the lexeme. Error messages care about what the user
    /// wrote, not the token's internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
