/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     ast/json.rs
 * Purpose:  Machine-readable AST dump for tooling (`fx --json`).
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

use serde_json::{Map, Value as JsonValue};

use crate::ast::{Body, Expr, Func, Prog, Stmt};
use crate::environment::SymRef;

/// Renders the parsed program as a JSON tree mirroring the AST structure.
pub fn prog_json(prog: &Prog) -> JsonValue {
    let mut map = Map::new();
    map.insert("node".into(), JsonValue::String("prog".into()));
    let funcs: Vec<JsonValue> = prog
        .funcs
        .iter()
        .map(|fsym| {
            let mut m = Map::new();
            m.insert("sym".into(), sym_json(fsym));
            if let Some(func) = fsym.borrow().func() {
                m.insert("func".into(), func_json(&func));
            }
            JsonValue::Object(m)
        })
        .collect();
    map.insert("funcs".into(), JsonValue::Array(funcs));
    JsonValue::Object(map)
}

fn sym_json(sym: &SymRef) -> JsonValue {
    let s = sym.borrow();
    let mut m = Map::new();
    m.insert("name".into(), JsonValue::String(s.name().to_string()));
    m.insert("kind".into(), JsonValue::String(s.kind().name().to_string()));
    m.insert("type".into(), JsonValue::String(s.sym_type().name().to_string()));
    JsonValue::Object(m)
}

fn func_json(func: &Func) -> JsonValue {
    let mut head = Map::new();
    head.insert("id".into(), JsonValue::String(func.head.id.clone()));
    head.insert(
        "params".into(),
        JsonValue::Array(func.head.params.iter().map(sym_json).collect()),
    );

    let mut m = Map::new();
    m.insert("head".into(), JsonValue::Object(head));
    m.insert("body".into(), body_json(&func.body));
    JsonValue::Object(m)
}

fn body_json(body: &Body) -> JsonValue {
    JsonValue::Array(body.stms.iter().map(stmt_json).collect())
}

fn stmt_json(stm: &Stmt) -> JsonValue {
    let mut m = Map::new();
    match stm {
        Stmt::Call(call) => {
            m.insert("stmt".into(), JsonValue::String("call".into()));
            m.insert("target".into(), sym_json(&call.target));
            m.insert(
                "args".into(),
                JsonValue::Array(call.args.iter().map(expr_json).collect()),
            );
        }
        Stmt::Iter(iter) => {
            m.insert("stmt".into(), JsonValue::String("iter".into()));
            if let Some(control) = &iter.control {
                m.insert("control".into(), sym_json(control));
            }
            m.insert("start".into(), opt_expr_json(iter.start.as_ref()));
            m.insert("end".into(), opt_expr_json(iter.end.as_ref()));
            m.insert("step".into(), opt_expr_json(iter.step.as_ref()));
            m.insert("body".into(), body_json(&iter.body));
        }
        Stmt::Block(body) => {
            m.insert("stmt".into(), JsonValue::String("block".into()));
            m.insert("body".into(), body_json(body));
        }
        Stmt::Decl(sym) => {
            m.insert("stmt".into(), JsonValue::String("decl".into()));
            m.insert("sym".into(), sym_json(sym));
        }
        Stmt::Assign(asign) => {
            m.insert("stmt".into(), JsonValue::String("assign".into()));
            m.insert("target".into(), sym_json(&asign.target));
            m.insert("value".into(), opt_expr_json(asign.value.as_ref()));
        }
        Stmt::If(node_if) => {
            m.insert("stmt".into(), JsonValue::String("if".into()));
            m.insert("cond".into(), opt_expr_json(node_if.cond.as_ref()));
            m.insert("then".into(), body_json(&node_if.body));
            if let Some(body_else) = &node_if.body_else {
                m.insert("else".into(), body_json(body_else));
            }
        }
    }
    JsonValue::Object(m)
}

fn opt_expr_json(expr: Option<&Expr>) -> JsonValue {
    match expr {
        Some(e) => expr_json(e),
        None => JsonValue::Null,
    }
}

fn expr_json(expr: &Expr) -> JsonValue {
    let mut m = Map::new();
    m.insert("token".into(), JsonValue::String(expr.tok.lexeme.clone()));
    m.insert("kind".into(), JsonValue::String(format!("{:?}", expr.tok.kind)));
    m.insert("value".into(), JsonValue::from(expr.tok.value));
    if let Some(left) = &expr.left {
        m.insert("left".into(), expr_json(left));
    }
    if let Some(right) = &expr.right {
        m.insert("right".into(), expr_json(right));
    }
    JsonValue::Object(m)
}
