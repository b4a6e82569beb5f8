/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
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

use crate::error::FxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::{Parser, MAX_ERRORS};
use crate::span::Place;

impl Parser {
    /// The position diagnostics should report right now.
    pub(crate) fn here(&self) -> Place {
        Place::new(self.lexer.filename(), self.lexer.line())
    }

    /// Consumes the lookahead when it has the wanted kind.
    ///
    /// Returns the token and whether it matched; a non-matching token is
    /// left unconsumed so the caller can resynchronize. A non-matching EOF
    /// is the unrecoverable parse failure.
    pub(crate) fn match_tok(&mut self, kind: TokenKind) -> Result<(Token, bool), FxError> {
        let t = self.lexer.peek()?;
        if t.kind != kind {
            if t.kind == TokenKind::Eof {
                return Err(FxError::unexpected_eof(t.place));
            }
            return Ok((t, false));
        }
        let t = self.lexer.lex()?;
        Ok((t, true))
    }

    /// Records one syntax diagnostic at the current position. The
    /// `MAX_ERRORS`th error ends the parse with the unrecoverable limit
    /// failure.
    pub(crate) fn errorf(&mut self, message: impl AsRef<str>) -> Result<(), FxError> {
        let place = self.here();
        self.diag.syntax_error(&place, message);
        if self.diag.count() >= MAX_ERRORS {
            return Err(FxError::too_many_errors(place));
        }
        Ok(())
    }

    /// Enters a grammar production: prints the tag when tracing and deepens
    /// the indent. Every `push_trace` is paired with a `pop_trace`.
    pub(crate) fn push_trace(&mut self, tag: impl AsRef<str>) {
        if self.trace {
            eprintln!("{}{}", "\t".repeat(self.depth), tag.as_ref());
        }
        self.depth += 1;
    }

    pub(crate) fn pop_trace(&mut self) {
        self.depth -= 1;
    }

    /// Prints a trace line (matched terminal, Pratt step) at the current
    /// depth without changing it.
    pub(crate) fn dprintf(&self, message: impl AsRef<str>) {
        if self.trace {
            eprintln!("{}{}", "\t".repeat(self.depth), message.as_ref());
        }
    }
}
