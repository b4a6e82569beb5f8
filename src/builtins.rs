/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     builtins.rs
 * Purpose:  Pre-registers the built-in types and drawing primitives into
 *           the global scope frame before any user code parses.
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

use std::rc::Rc;

use crate::ast::Func;
use crate::environment::{StkEnv, SymContent, SymKind};
use crate::error::FxError;
use crate::lexer::token::TokenKind;
use crate::span::Place;
use crate::types::TypeId;

pub struct Builtin {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

/// The drawing primitives. Their calls are sinks: the interpreter prints
/// the resolved arguments instead of descending into a body.
pub const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "circle",
        params: &["x", "y", "r", "color"],
    },
    Builtin {
        name: "rect",
        params: &["x", "y", "angle", "color"],
    },
];

/// Seeds the current (global) frame with the type registry and the
/// built-in primitives. Called once, right after the parser opens the
/// global frame.
pub fn install(envs: &mut StkEnv) -> Result<(), FxError> {
    def_types(envs)?;
    def_builtins(envs)?;
    Ok(())
}

fn def_types(envs: &mut StkEnv) -> Result<(), FxError> {
    for tp in TypeId::ALL {
        let sym = envs.new_sym(tp.name(), SymKind::Type)?;
        let mut s = sym.borrow_mut();
        s.add_tok_kind(TokenKind::Id);
        s.add_place(Place::new("builtin", 0));
        s.set_content(SymContent::Type(tp));
    }
    Ok(())
}

fn def_builtins(envs: &mut StkEnv) -> Result<(), FxError> {
    for builtin in BUILTINS {
        let mut f = Func::new();
        f.head.id = builtin.name.to_string();

        // Parameter symbols live in a scratch frame so they never collide
        // with user names in the global frame.
        envs.push_env();
        for (i, param) in builtin.params.iter().enumerate() {
            let v_sym = envs.new_sym(param, SymKind::Var)?;
            {
                let mut v = v_sym.borrow_mut();
                v.add_tok_kind(TokenKind::Key);
                v.add_place(Place::new("builtin", i));
            }
            f.head.add_param(v_sym);
        }
        envs.pop_env();

        let f_sym = envs.new_sym(builtin.name, SymKind::Func)?;
        let mut s = f_sym.borrow_mut();
        s.add_tok_kind(TokenKind::Func);
        s.add_place(Place::new("builtin", 0));
        s.set_content(SymContent::Func(Rc::new(f)));
    }
    Ok(())
}
