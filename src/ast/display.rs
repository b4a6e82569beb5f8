/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     ast/display.rs
 * Purpose:  The depth-indented AST dump printed after an error-free parse.
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
use std::rc::Rc;

use crate::ast::{Assign, Body, Call, Expr, Func, Head, Iter, NodeIf, Prog, Stmt};
use crate::environment::SymRef;

// One line per node: tab indent, opaque address for identity, node kind,
// kind-specific payload. Expression subtrees print recursively.

fn tabs(depth: usize) -> String {
    "\t".repeat(depth)
}

impl fmt::Display for Prog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:p} PROG", tabs(0), self)?;
        for fsym in &self.funcs {
            write!(f, "\n")?;
            write_sym(f, fsym, 1)?;
            if let Some(func) = fsym.borrow().func() {
                write!(f, "\n")?;
                write_func(f, &func, 2)?;
            }
        }
        Ok(())
    }
}

fn write_sym(f: &mut fmt::Formatter<'_>, sym: &SymRef, depth: usize) -> fmt::Result {
    let s = sym.borrow();
    write!(
        f,
        "{}{:p} SYM({}) \"{}\" type={}",
        tabs(depth),
        Rc::as_ptr(sym),
        s.kind().name(),
        s.name(),
        s.sym_type()
    )
}

fn write_func(f: &mut fmt::Formatter<'_>, func: &Func, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} FUNC\n", tabs(depth), func)?;
    write_head(f, &func.head, depth + 1)?;
    write!(f, "\n")?;
    write_body(f, &func.body, depth + 1)
}

fn write_head(f: &mut fmt::Formatter<'_>, head: &Head, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} HEAD({})", tabs(depth), head, head.id)?;
    for param in &head.params {
        write!(f, "\n")?;
        write_sym(f, param, depth + 1)?;
    }
    Ok(())
}

fn write_body(f: &mut fmt::Formatter<'_>, body: &Body, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} BODY", tabs(depth), body)?;
    for stm in &body.stms {
        write!(f, "\n")?;
        write_stmt(f, stm, depth + 1)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stm: &Stmt, depth: usize) -> fmt::Result {
    match stm {
        Stmt::Call(call) => write_call(f, call, depth),
        Stmt::Iter(iter) => write_iter(f, iter, depth),
        Stmt::Block(body) => write_body(f, body, depth),
        Stmt::Decl(sym) => write_sym(f, sym, depth),
        Stmt::Assign(asign) => write_assign(f, asign, depth),
        Stmt::If(node_if) => write_if(f, node_if, depth),
    }
}

fn write_call(f: &mut fmt::Formatter<'_>, call: &Call, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} CALL", tabs(depth), call)?;
    write!(f, "\n")?;
    write_sym(f, &call.target, depth + 1)?;
    for arg in &call.args {
        write!(f, "\n")?;
        write_expr(f, arg, depth + 1)?;
    }
    Ok(())
}

fn write_iter(f: &mut fmt::Formatter<'_>, iter: &Iter, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} ITER", tabs(depth), iter)?;
    write!(f, "\n")?;
    match &iter.control {
        Some(sym) => write_sym(f, sym, depth + 1)?,
        None => write!(f, "{}(no control variable)", tabs(depth + 1))?,
    }
    for bound in [&iter.start, &iter.end, &iter.step] {
        write!(f, "\n")?;
        write_opt_expr(f, bound.as_ref(), depth + 1)?;
    }
    write!(f, "\n")?;
    write_body(f, &iter.body, depth + 1)
}

fn write_assign(f: &mut fmt::Formatter<'_>, asign: &Assign, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} ASSIGN", tabs(depth), asign)?;
    write!(f, "\n")?;
    write_sym(f, &asign.target, depth + 1)?;
    write!(f, "\n")?;
    write_opt_expr(f, asign.value.as_ref(), depth + 1)
}

fn write_if(f: &mut fmt::Formatter<'_>, node_if: &NodeIf, depth: usize) -> fmt::Result {
    write!(f, "{}{:p} IF", tabs(depth), node_if)?;
    write!(f, "\n")?;
    write_opt_expr(f, node_if.cond.as_ref(), depth + 1)?;
    write!(f, "\n")?;
    write_body(f, &node_if.body, depth + 1)?;
    if let Some(body_else) = &node_if.body_else {
        write!(f, "\n{}{:p} ELSE\n", tabs(depth), node_if)?;
        write_body(f, body_else, depth + 1)?;
    }
    Ok(())
}

fn write_opt_expr(f: &mut fmt::Formatter<'_>, expr: Option<&Expr>, depth: usize) -> fmt::Result {
    match expr {
        Some(e) => write_expr(f, e, depth),
        None => write!(f, "{}(missing expression)", tabs(depth)),
    }
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    write!(
        f,
        "{}{:p} EXPR[{:?}]({})",
        tabs(depth),
        expr,
        expr.tok.kind,
        expr.tok.value
    )?;
    if let Some(left) = &expr.left {
        write!(f, "\n")?;
        write_expr(f, left, depth + 1)?;
    }
    if let Some(right) = &expr.right {
        write!(f, "\n")?;
        write_expr(f, right, depth + 1)?;
    }
    Ok(())
}
