/*
 * ============================================================================
 * FX - Shapes from Code!
 * ============================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Program structure: macros, bodies, and the statement union.
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
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use crate::ast::Expr;
use crate::environment::SymRef;

/// A whole source file: the ordered list of Func-kind symbols the parser
/// registered. Each symbol's content is the `Func` AST behind it.
#[derive(Debug, Default)]
pub struct Prog {
    pub funcs: Vec<SymRef>,
}

impl Prog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_func(&mut self, f: SymRef) {
        self.funcs.push(f);
    }
}

/// One macro definition: a head (name + formals) and a body.
#[derive(Debug, Default)]
pub struct Func {
    pub head: Head,
    pub body: Body,
}

impl Func {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A macro's name and its ordered formal parameters (Var-kind symbols with
/// a declared type).
#[derive(Debug, Default)]
pub struct Head {
    pub id: String,
    pub params: Vec<SymRef>,
}

impl Head {
    pub fn add_param(&mut self, param: SymRef) {
        self.params.push(param);
    }
}

/// An ordered run of statements.
#[derive(Debug, Default)]
pub struct Body {
    pub stms: Vec<Stmt>,
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stm(&mut self, stm: Stmt) {
        self.stms.push(stm);
    }
}

/// All executable FX statements. Exactly one variant per statement; the
/// interpreter dispatches by exhaustive match.
#[derive(Debug)]
pub enum Stmt {
    /// A call of a built-in primitive or a user macro.
    Call(Call),

    /// A counted loop.
    Iter(Iter),

    /// A brace-delimited nested body.
    Block(Body),

    /// A local declaration. Runs as a no-op; its work happens at hoist time.
    Decl(SymRef),

    /// An assignment to a declared variable.
    Assign(Assign),

    /// A conditional with optional else branch.
    If(NodeIf),
}

/// A call site: the callee symbol and the argument expressions.
#[derive(Debug)]
pub struct Call {
    pub target: SymRef,
    pub args: Vec<Expr>,
}

/// `iter (i := start, end, step) { body }`; `end` is exclusive.
///
/// Recovery from syntax errors can leave slots empty; that only happens
/// with a non-zero diagnostic count, which also keeps the interpreter from
/// running.
#[derive(Debug)]
pub struct Iter {
    pub control: Option<SymRef>,
    pub start: Option<Expr>,
    pub end: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Body,
}

/// `target = value;`
#[derive(Debug)]
pub struct Assign {
    pub target: SymRef,
    pub value: Option<Expr>,
}

/// `if (cond) { body } else { body_else }`
#[derive(Debug)]
pub struct NodeIf {
    pub cond: Option<Expr>,
    pub body: Body,
    pub body_else: Option<Body>,
}
