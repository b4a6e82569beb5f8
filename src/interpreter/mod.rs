/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * Interpreter Entry & Runtime Bootstrap
 * -------------------------------------
 * This module is the runtime entrypoint for FX. It walks the parsed
 * program against the scope stack the parser built: every non-`main`
 * macro is re-registered in the current frame so later invocations can
 * find it, and `main` itself is executed on the spot.
 *
 * All actual evaluation logic is delegated to the submodules:
 *
 *  - statements.rs  → Statement execution and declaration hoisting
 *  - calls.rs       → Built-in sinks and user macro invocation
 *  - expressions.rs → Expression evaluation (signed 64-bit, wrapping)
 *
 * --------------------------------------------------------------------------
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

pub mod calls;
pub mod expressions;
pub mod statements;

use std::io::Write;
use std::sync::atomic::Ordering;

use crate::ast::Prog;
use crate::environment::{StkEnv, SymContent, SymKind};
use crate::error::FxError;
use crate::parser::DEBUG_PARSER;

/// The tree-walking evaluator. Borrows the scope stack the parser built
/// and the sink primitive calls print to.
pub struct Interp<'a> {
    pub(crate) envs: &'a mut StkEnv,
    pub(crate) out: &'a mut dyn Write,
    pub(crate) trace: bool,
}

impl<'a> Interp<'a> {
    pub fn new(envs: &'a mut StkEnv, out: &'a mut dyn Write) -> Self {
        Self {
            envs,
            out,
            trace: DEBUG_PARSER.load(Ordering::Relaxed),
        }
    }

    /// Executes the program: registers every macro, runs `main` when it is
    /// reached. A program without `main` parses, registers, and prints
    /// nothing.
    pub fn run(&mut self, prog: &Prog) -> Result<(), FxError> {
        self.dprintf("Prog");

        for f_sym in &prog.funcs {
            let (name, func) = {
                let s = f_sym.borrow();
                (s.name().to_string(), s.func())
            };
            let func = func.ok_or_else(|| {
                FxError::type_error(format!("{} has no macro body", name), None)
            })?;

            if name == "main" {
                self.exec_func(&func)?;
            } else {
                let sym = self.envs.new_sym_with_shadowing(&name, SymKind::Func);
                sym.borrow_mut().set_content(SymContent::Func(func));
            }
        }

        Ok(())
    }

    pub(crate) fn dprintf(&self, message: impl AsRef<str>) {
        if self.trace {
            eprintln!("{}", message.as_ref());
        }
    }
}

/// Convenience wrapper over `Interp`.
pub fn run(prog: &Prog, envs: &mut StkEnv, out: &mut dyn Write) -> Result<(), FxError> {
    Interp::new(envs, out).run(prog)
}
