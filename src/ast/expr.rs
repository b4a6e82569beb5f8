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

use crate::lexer::token::Token;

/// An expression: a binary tree of tokens.
///
/// Leaves carry `Id` / `IntLit` / `BoolLit` tokens. Interior nodes carry an
/// operator token; unary operators have no left child.
#[derive(Debug, Clone)]
pub struct Expr {
    pub tok: Token,
    pub left: Option<Box<Expr>>,
    pub right: Option<Box<Expr>>,
}

impl Expr {
    pub fn leaf(tok: Token) -> Self {
        Self {
            tok,
            left: None,
            right: None,
        }
    }

    pub fn unary(tok: Token, right: Expr) -> Self {
        Self {
            tok,
            left: None,
            right: Some(Box::new(right)),
        }
    }

    pub fn binary(tok: Token, left: Expr, right: Option<Expr>) -> Self {
        Self {
            tok,
            left: Some(Box::new(left)),
            right: right.map(Box::new),
        }
    }
}
