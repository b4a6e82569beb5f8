/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     parser/expressions.rs
 * Purpose:  The Pratt operator-precedence expression sub-parser, driven by
 *           right binding powers attached to token kinds.
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

use crate::ast::Expr;
use crate::error::FxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

/// Binding power of tokens outside the precedence table. Statement rules
/// call `expr(DEF_RBP - 1)` so that any operator, however weak, extends
/// the expression.
pub(crate) const DEF_RBP: i32 = 0;

/// The precedence table. Higher binds tighter.
fn bind_pow(kind: TokenKind) -> i32 {
    match kind {
        TokenKind::RPar => 1,
        TokenKind::Or | TokenKind::And | TokenKind::Xor => 10,
        TokenKind::Not => 20,
        TokenKind::Lt | TokenKind::Gt | TokenKind::Lte | TokenKind::Gte => 30,
        TokenKind::Plus | TokenKind::Minus => 40,
        TokenKind::Times | TokenKind::Divide | TokenKind::Rem => 50,
        TokenKind::Pow => 60,
        TokenKind::LPar => 70,
        _ => DEF_RBP,
    }
}

fn is_right_assoc(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Pow)
}

/// Operators allowed in prefix position.
fn is_unary(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus | TokenKind::Minus | TokenKind::LPar | TokenKind::Not | TokenKind::Xor
    )
}

/// Hard fences: these end an expression and are left unconsumed so the
/// enclosing statement rule can match them.
fn is_terminator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Eof | TokenKind::RPar | TokenKind::Comma | TokenKind::Semicolon
    )
}

impl Parser {
    /// Parses one expression with the given right binding power.
    ///
    /// Returns `None` when the lookahead is already a terminator (the
    /// empty expression) or when a malformation was recorded before any
    /// tree could be built; malformations mid-tree yield the best-effort
    /// partial tree after recording their diagnostic.
    pub(crate) fn expr(&mut self, rbp: i32) -> Result<Option<Expr>, FxError> {
        self.push_trace(format!("Expr: {}", rbp));
        let result = self.expr_tail(rbp);
        self.pop_trace();
        result
    }

    fn expr_tail(&mut self, rbp: i32) -> Result<Option<Expr>, FxError> {
        let tok = self.lexer.peek()?;
        if is_terminator(tok.kind) {
            return Ok(None);
        }

        self.lexer.lex()?;
        self.dprintf(format!("expr: nud: {}", tok));
        let mut left = match self.nud(tok)? {
            Some(e) => e,
            None => return Ok(None),
        };

        loop {
            let t = self.lexer.peek()?;
            if is_terminator(t.kind) {
                return Ok(Some(left));
            }
            if bind_pow(t.kind) <= rbp {
                self.dprintf(format!(
                    "not enough binding: {} <= {}, {}",
                    bind_pow(t.kind),
                    rbp,
                    t
                ));
                return Ok(Some(left));
            }

            self.lexer.lex()?;
            self.dprintf(format!("expr: led: {}", t));
            left = self.led(left, t)?;
        }
    }

    /// Null denotation: no left context. Leaves, prefix operators, and
    /// parenthesized sub-expressions.
    fn nud(&mut self, tok: Token) -> Result<Option<Expr>, FxError> {
        if tok.kind == TokenKind::LPar {
            let inner = self.expr(DEF_RBP)?;
            let (_, is_closed) = self.match_tok(TokenKind::RPar)?;
            if !is_closed {
                self.errorf("unmatched parenthesis")?;
            }
            return Ok(inner);
        }

        let rbp = bind_pow(tok.kind);
        if rbp == DEF_RBP {
            return Ok(Some(Expr::leaf(tok)));
        }

        if !is_unary(tok.kind) {
            self.errorf(format!("{} is not unary", tok))?;
            return Ok(None);
        }
        match self.expr(rbp)? {
            Some(right) => Ok(Some(Expr::unary(tok, right))),
            None => {
                self.errorf("unary operator without operand")?;
                Ok(None)
            }
        }
    }

    /// Left denotation: infix operators. Right-associative operators parse
    /// their right operand one power weaker.
    fn led(&mut self, left: Expr, tok: Token) -> Result<Expr, FxError> {
        let mut rbp = bind_pow(tok.kind);
        if is_right_assoc(tok.kind) {
            rbp -= 1;
        }
        self.dprintf(format!("led: {}, {}", rbp, tok));

        let right = self.expr(rbp)?;
        if right.is_none() {
            self.errorf(format!("missing operand for {}", tok))?;
        }
        Ok(Expr::binary(tok, left, right))
    }
}
