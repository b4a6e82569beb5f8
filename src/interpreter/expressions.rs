/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     interpreter/expressions.rs
 * Purpose:  Expression evaluation over the token tree. All arithmetic is
 *           signed 64-bit with wrap-on-overflow.
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
use crate::interpreter::Interp;
use crate::lexer::token::{Token, TokenKind};

impl Interp<'_> {
    /// Evaluates an expression tree to a 64-bit integer.
    ///
    /// Missing children of unary operators evaluate as 0; the comparison
    /// and logical families yield 1 or 0.
    pub(crate) fn eval_expr(&mut self, e: &Expr) -> Result<i64, FxError> {
        match e.tok.kind {
            TokenKind::IntLit | TokenKind::BoolLit => Ok(e.tok.value),

            TokenKind::Id => {
                let sym = self.envs.get_sym(&e.tok.lexeme).ok_or_else(|| {
                    FxError::reference(
                        format!("symbol {} not defined", e.tok.lexeme),
                        Some(e.tok.place.clone()),
                    )
                })?;
                let value = sym.borrow().int_value();
                value.ok_or_else(|| {
                    FxError::type_error(
                        format!("variable {} has no integer value", e.tok.lexeme),
                        Some(e.tok.place.clone()),
                    )
                })
            }

            _ => {
                let l = match &e.left {
                    Some(sub) => self.eval_expr(sub)?,
                    None => 0,
                };
                let r = match &e.right {
                    Some(sub) => self.eval_expr(sub)?,
                    None => 0,
                };
                apply_op(&e.tok, l, r)
            }
        }
    }
}

fn apply_op(tok: &Token, l: i64, r: i64) -> Result<i64, FxError> {
    match tok.kind {
        TokenKind::Plus => Ok(l.wrapping_add(r)),
        TokenKind::Minus => Ok(l.wrapping_sub(r)),
        TokenKind::Times => Ok(l.wrapping_mul(r)),

        TokenKind::Divide => {
            if r == 0 {
                return Err(FxError::runtime(
                    "division by zero",
                    Some(tok.place.clone()),
                ));
            }
            Ok(l.wrapping_div(r))
        }

        TokenKind::Rem => {
            if r == 0 {
                return Err(FxError::runtime(
                    "remainder by zero",
                    Some(tok.place.clone()),
                ));
            }
            Ok(l.wrapping_rem(r))
        }

        TokenKind::Pow => Ok(ipow(l, r)),

        TokenKind::Gt => Ok((l > r) as i64),
        TokenKind::Lt => Ok((l < r) as i64),
        TokenKind::Gte => Ok((l >= r) as i64),
        TokenKind::Lte => Ok((l <= r) as i64),

        TokenKind::Or => Ok((l != 0 || r != 0) as i64),
        TokenKind::And => Ok((l != 0 && r != 0) as i64),
        TokenKind::Xor => Ok(((l != 0) != (r != 0)) as i64),
        TokenKind::Not => Ok((r == 0) as i64),

        _ => Err(FxError::runtime(
            format!("cannot evaluate {}", tok),
            Some(tok.place.clone()),
        )),
    }
}

/// Integer power with wrap-on-overflow. A negative exponent truncates
/// toward zero, so only magnitude-one bases survive it.
fn ipow(base: i64, exp: i64) -> i64 {
    if exp < 0 {
        return match base {
            1 => 1,
            -1 => {
                if exp % 2 == 0 {
                    1
                } else {
                    -1
                }
            }
            _ => 0,
        };
    }
    let exp = u32::try_from(exp).unwrap_or(u32::MAX);
    base.wrapping_pow(exp)
}

#[cfg(test)]
mod tests {
    use super::ipow;

    #[test]
    fn ipow_basics() {
        assert_eq!(ipow(2, 10), 1024);
        assert_eq!(ipow(3, 0), 1);
        assert_eq!(ipow(0, 0), 1);
        assert_eq!(ipow(-2, 3), -8);
    }

    #[test]
    fn ipow_negative_exponents_truncate() {
        assert_eq!(ipow(2, -1), 0);
        assert_eq!(ipow(1, -5), 1);
        assert_eq!(ipow(-1, -2), 1);
        assert_eq!(ipow(-1, -3), -1);
    }
}
