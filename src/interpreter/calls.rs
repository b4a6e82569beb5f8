/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     interpreter/calls.rs
 * Purpose:  Call dispatch: built-in primitives print their resolved
 *           arguments; user macros get a fresh frame with shadow-bound
 *           parameters.
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

use crate::ast::{Call, Func};
use crate::environment::{SymContent, SymKind};
use crate::error::FxError;
use crate::interpreter::Interp;

impl Interp<'_> {
    /// A callee that resolves to a Func-kind symbol in the global frame is
    /// a built-in: the call is a sink that prints the primitive name and
    /// its evaluated arguments. Anything else is a user macro invocation.
    pub(crate) fn exec_call(&mut self, call: &Call) -> Result<(), FxError> {
        self.dprintf("Call");

        let name = call.target.borrow().name().to_string();

        if let Some(b_sym) = self.envs.get_global(&name) {
            if b_sym.borrow().kind() == SymKind::Func {
                let f = b_sym.borrow().func().ok_or_else(|| {
                    FxError::type_error(format!("builtin {} has no definition", name), None)
                })?;
                return self.builtin_sink(&name, &f, call);
            }
        }

        self.user_call(&name, call)
    }

    /// Evaluates each argument in order and prints one line:
    /// `<name> <a0> <a1> … ` followed by a newline.
    fn builtin_sink(&mut self, name: &str, f: &Rc<Func>, call: &Call) -> Result<(), FxError> {
        self.check_arity(name, f.head.params.len(), call.args.len())?;

        let mut args = String::new();
        for arg in &call.args {
            let value = self.eval_expr(arg)?;
            args.push_str(&format!("{} ", value));
        }

        writeln!(self.out, "{} {}", f.head.id, args)
            .map_err(|err| FxError::io(format!("write to output failed: {}", err)))?;
        Ok(())
    }

    /// Arguments are evaluated in the caller's environment, strictly
    /// before the callee's frame exists.
    fn user_call(&mut self, name: &str, call: &Call) -> Result<(), FxError> {
        let f_sym = self.envs.get_sym(name).ok_or_else(|| {
            FxError::reference(format!("function {} not defined", name), None)
        })?;
        let f = f_sym
            .borrow()
            .func()
            .ok_or_else(|| FxError::type_error(format!("{} is not callable", name), None))?;

        self.check_arity(name, f.head.params.len(), call.args.len())?;

        let mut values = Vec::with_capacity(call.args.len());
        for arg in &call.args {
            values.push(self.eval_expr(arg)?);
        }

        self.envs.push_env();
        for (param, value) in f.head.params.iter().zip(values) {
            let (p_name, p_type) = {
                let p = param.borrow();
                (p.name().to_string(), p.sym_type())
            };
            let sym = self.envs.new_sym_with_shadowing(&p_name, SymKind::Var);
            let mut s = sym.borrow_mut();
            s.set_type(p_type);
            s.set_content(SymContent::Int(value));
        }
        let result = self.exec_func(&f);
        self.envs.pop_env();
        result
    }

    fn check_arity(&self, name: &str, want: usize, got: usize) -> Result<(), FxError> {
        if want != got {
            return Err(FxError::runtime(
                format!(
                    "wrong number of arguments for {}: expected {}, got {}",
                    name, want, got
                ),
                None,
            ));
        }
        Ok(())
    }
}
