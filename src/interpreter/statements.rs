/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     interpreter/statements.rs
 * Purpose:  Statement execution: bodies with declaration hoisting, counted
 *           loops, conditionals, and assignments.
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

use crate::ast::{Assign, Body, Expr, Func, Iter, NodeIf, Stmt};
use crate::environment::{SymContent, SymKind};
use crate::error::FxError;
use crate::interpreter::Interp;
use crate::types::TypeId;

impl Interp<'_> {
    /// Runs one macro: fresh frame, hoist its body's declarations, execute,
    /// pop.
    pub(crate) fn exec_func(&mut self, f: &Func) -> Result<(), FxError> {
        self.dprintf("Func");

        self.envs.push_env();
        let result = self.exec_body(&f.body);
        self.envs.pop_env();
        result
    }

    /// Executes a body that is beginning: its own top-level declarations
    /// are hoisted into the current frame first, so an assignment may
    /// textually precede its declaration.
    pub(crate) fn exec_body(&mut self, body: &Body) -> Result<(), FxError> {
        self.dprintf("Body");
        self.hoist_decls(body)?;
        self.run_stmts(body)
    }

    /// Shadow-binds a Var symbol for every top-level declaration of
    /// `body`. Declarations inside nested bodies are bound when those
    /// bodies begin executing.
    fn hoist_decls(&mut self, body: &Body) -> Result<(), FxError> {
        for stm in &body.stms {
            if let Stmt::Decl(decl) = stm {
                let (name, ty) = {
                    let d = decl.borrow();
                    (d.name().to_string(), d.sym_type())
                };
                self.dprintf(format!("pushing var {}", name));
                let sym = self.envs.new_sym_with_shadowing(&name, SymKind::Var);
                sym.borrow_mut().set_type(ty);
            }
        }
        Ok(())
    }

    fn run_stmts(&mut self, body: &Body) -> Result<(), FxError> {
        for stm in &body.stms {
            self.exec_stmt(stm)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, stm: &Stmt) -> Result<(), FxError> {
        self.dprintf("Statement");

        match stm {
            Stmt::Call(call) => self.exec_call(call),
            Stmt::Iter(iter) => self.exec_iter(iter),
            Stmt::Block(body) => self.exec_body(body),
            // A declaration did its work at hoist time.
            Stmt::Decl(_) => Ok(()),
            Stmt::Assign(asign) => self.exec_assign(asign),
            Stmt::If(node_if) => self.exec_if(node_if),
        }
    }

    /// `iter (i := start, end, step) { body }`: fresh frame, hoist the
    /// body's declarations once so locals persist across iterations, bind
    /// the control variable, then count. `end` is exclusive; a zero step
    /// loops forever by design of the language, not of this function.
    fn exec_iter(&mut self, iter: &Iter) -> Result<(), FxError> {
        self.dprintf("Iter");

        self.envs.push_env();
        let result = self.iter_tail(iter);
        self.envs.pop_env();
        result
    }

    fn iter_tail(&mut self, iter: &Iter) -> Result<(), FxError> {
        self.hoist_decls(&iter.body)?;

        let decl = iter
            .control
            .as_ref()
            .ok_or_else(|| FxError::runtime("iter without control variable", None))?;
        let name = decl.borrow().name().to_string();
        let control = self.envs.new_sym_with_shadowing(&name, SymKind::Var);
        control.borrow_mut().set_type(TypeId::Int);

        let start = self.eval_required(iter.start.as_ref(), "iter start")?;
        let end = self.eval_required(iter.end.as_ref(), "iter end")?;
        let step = self.eval_required(iter.step.as_ref(), "iter step")?;

        let mut i = start;
        while i < end {
            control.borrow_mut().set_content(SymContent::Int(i));
            self.run_stmts(&iter.body)?;
            i = i.wrapping_add(step);
        }

        Ok(())
    }

    /// Evaluate the right-hand side, then overwrite the target's content.
    /// The target is looked up by name so the assignment lands on whatever
    /// binding is innermost at execution time.
    fn exec_assign(&mut self, asign: &Assign) -> Result<(), FxError> {
        self.dprintf("Assign");

        let value = self.eval_required(asign.value.as_ref(), "assignment value")?;

        let (name, place) = {
            let t = asign.target.borrow();
            (t.name().to_string(), t.places().first().cloned())
        };
        let sym = self
            .envs
            .get_sym(&name)
            .ok_or_else(|| FxError::reference(format!("symbol {} not defined", name), place))?;
        sym.borrow_mut().set_content(SymContent::Int(value));

        Ok(())
    }

    fn exec_if(&mut self, node_if: &NodeIf) -> Result<(), FxError> {
        self.dprintf("If");

        let cond = self.eval_required(node_if.cond.as_ref(), "if condition")?;
        if cond != 0 {
            self.exec_body(&node_if.body)
        } else if let Some(body_else) = &node_if.body_else {
            self.exec_body(body_else)
        } else {
            Ok(())
        }
    }

    /// An expression slot the grammar requires. Empty slots only survive
    /// parses with recorded errors, which never reach the interpreter; a
    /// hole here is still an error, not a panic.
    pub(crate) fn eval_required(
        &mut self,
        expr: Option<&Expr>,
        what: &str,
    ) -> Result<i64, FxError> {
        let expr = expr
            .ok_or_else(|| FxError::runtime(format!("missing expression ({})", what), None))?;
        self.eval_expr(expr)
    }
}
