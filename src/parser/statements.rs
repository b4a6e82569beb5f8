/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     parser/statements.rs
 * Purpose:  The LL(1) statement grammar: programs, macro definitions,
 *           bodies, calls, counted loops, and conditionals, with
 *           panic-mode recovery at every required terminal.
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

use crate::ast::{Assign, Body, Call, Expr, Func, Head, Iter, NodeIf, Prog, Stmt};
use crate::environment::{SymContent, SymKind, SymRef};
use crate::error::FxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::expressions::DEF_RBP;
use crate::parser::parser::Parser;
use crate::types::TypeId;

impl Parser {
    // ------------------------------------------------------------
    // <PROG> ::= ('func' <FUNC>)* 'EOF'
    // ------------------------------------------------------------
    pub(crate) fn prog(&mut self) -> Result<Prog, FxError> {
        self.push_trace("Prog");
        let result = self.prog_tail();
        self.pop_trace();
        result
    }

    fn prog_tail(&mut self) -> Result<Prog, FxError> {
        let mut prog = Prog::new();

        loop {
            let t = self.lexer.peek()?;
            match t.kind {
                TokenKind::Func => {
                    self.lexer.lex()?;
                    self.dprintf("\"func\"");

                    let f = self.func()?;
                    let place = self.here();
                    match self.envs.new_sym(&f.head.id, SymKind::Func) {
                        Ok(f_sym) => {
                            {
                                let mut s = f_sym.borrow_mut();
                                s.add_tok_kind(TokenKind::Func);
                                s.add_place(place);
                                s.set_content(SymContent::Func(Rc::new(f)));
                            }
                            prog.add_func(f_sym);
                        }
                        Err(err) => self.errorf(err.message)?,
                    }
                }
                TokenKind::Eof => {
                    self.lexer.lex()?;
                    self.dprintf("\"EOF\"");
                    break;
                }
                _ => {
                    self.errorf(format!("expected func or EOF, found {}", t))?;
                    break;
                }
            }
        }

        Ok(prog)
    }

    // ------------------------------------------------------------
    // <FUNC> ::= <HEAD> '{' <BODY> '}'
    // ------------------------------------------------------------
    fn func(&mut self) -> Result<Func, FxError> {
        self.push_trace("Func");
        self.envs.push_env();
        let result = self.func_tail();
        self.envs.pop_env();
        self.pop_trace();
        result
    }

    fn func_tail(&mut self) -> Result<Func, FxError> {
        let mut f = Func::new();

        self.head(&mut f.head)?;

        let (t, is_lcurl) = self.match_tok(TokenKind::LCurl)?;
        if !is_lcurl {
            self.errorf("macro bad definition")?;
            self.lexer
                .skip_until(&[TokenKind::LCurl, TokenKind::RCurl])?;
        } else {
            self.dprintf(t.to_string());
        }

        self.body(&mut f.body)?;

        let (t, is_rcurl) = self.match_tok(TokenKind::RCurl)?;
        if !is_rcurl {
            self.errorf("macro bad definition")?;
            self.lexer.skip_until_and_lex(TokenKind::RCurl)?;
        } else {
            self.dprintf(t.to_string());
        }

        Ok(f)
    }

    // ------------------------------------------------------------
    // <HEAD> ::= id '(' <FORMAL_PRMS> ')'
    // ------------------------------------------------------------
    fn head(&mut self, head: &mut Head) -> Result<(), FxError> {
        self.push_trace("Head");
        let result = self.head_tail(head);
        self.pop_trace();
        result
    }

    fn head_tail(&mut self, head: &mut Head) -> Result<(), FxError> {
        let (t, is_id) = self.match_tok(TokenKind::Id)?;
        if !is_id {
            self.errorf("macro bad definition")?;
            self.lexer
                .skip_until(&[TokenKind::LPar, TokenKind::RPar, TokenKind::Comma])?;
        } else {
            self.dprintf(format!("ID {}", t));
            head.id = t.lexeme;
        }

        let (t, is_lpar) = self.match_tok(TokenKind::LPar)?;
        if !is_lpar {
            self.errorf("macro bad definition")?;
            self.lexer
                .skip_until(&[TokenKind::RPar, TokenKind::Comma])?;
        } else {
            self.dprintf(t.to_string());
        }

        self.formal_prms(head)?;

        let (t, is_rpar) = self.match_tok(TokenKind::RPar)?;
        if !is_rpar {
            self.errorf("macro bad definition")?;
            self.lexer.skip_until_and_lex(TokenKind::RPar)?;
        } else {
            self.dprintf(t.to_string());
        }

        Ok(())
    }

    // ------------------------------------------------------------
    // <FORMAL_PRMS> ::= type_id id <PRMS> | <Empty>
    // <PRMS>        ::= ',' type_id id <PRMS> | <Empty>
    // ------------------------------------------------------------
    fn formal_prms(&mut self, head: &mut Head) -> Result<(), FxError> {
        self.push_trace("FormalPrms");
        let result = self.formal_prms_tail(head);
        self.pop_trace();
        result
    }

    fn formal_prms_tail(&mut self, head: &mut Head) -> Result<(), FxError> {
        let (tok_type, is_type_id) = self.match_tok(TokenKind::Id)?;
        if !is_type_id {
            return Ok(());
        }
        self.dprintf(format!("TypeID {}", tok_type));

        self.formal_param(head, &tok_type)?;
        self.prms(head)
    }

    fn prms(&mut self, head: &mut Head) -> Result<(), FxError> {
        loop {
            self.push_trace("Prms");
            let round = self.prms_tail(head);
            self.pop_trace();
            if !round? {
                return Ok(());
            }
        }
    }

    fn prms_tail(&mut self, head: &mut Head) -> Result<bool, FxError> {
        let (t, is_comma) = self.match_tok(TokenKind::Comma)?;
        if !is_comma {
            return Ok(false);
        }
        self.dprintf(t.to_string());

        let (tok_type, is_type_id) = self.match_tok(TokenKind::Id)?;
        if !is_type_id {
            self.errorf("macro bad definition")?;
            self.lexer
                .skip_until(&[TokenKind::RPar, TokenKind::Comma])?;
            return Ok(true);
        }
        self.dprintf(format!("TypeID {}", tok_type));

        self.formal_param(head, &tok_type)?;
        Ok(true)
    }

    /// Resolves one formal parameter: type name, then parameter name,
    /// recorded as a Var symbol in the macro's frame. A missing or
    /// non-type type name still declares the parameter with type undef.
    fn formal_param(&mut self, head: &mut Head, tok_type: &Token) -> Result<(), FxError> {
        let t_sym = match self.envs.get_sym(&tok_type.lexeme) {
            None => {
                self.errorf(format!("type {} not found", tok_type.lexeme))?;
                None
            }
            Some(sym) if sym.borrow().kind() != SymKind::Type => {
                self.errorf(format!("expecting type, found {}", tok_type.lexeme))?;
                None
            }
            Some(sym) => Some(sym),
        };

        let (tok_id, is_id) = self.match_tok(TokenKind::Id)?;
        if !is_id {
            self.errorf("macro bad definition")?;
            self.lexer
                .skip_until(&[TokenKind::RPar, TokenKind::Comma])?;
            return Ok(());
        }
        self.dprintf(format!("ID {}", tok_id));

        let place = self.here();
        match self.envs.new_sym(&tok_id.lexeme, SymKind::Var) {
            Ok(v_sym) => {
                {
                    let mut v = v_sym.borrow_mut();
                    v.add_tok_kind(tok_type.kind);
                    v.add_place(place);
                    if let Some(t_sym) = &t_sym {
                        if let Some(tp) = t_sym.borrow().type_ref() {
                            v.set_type(tp);
                        }
                    }
                }
                head.add_param(v_sym);
            }
            Err(err) => self.errorf(err.message)?,
        }

        Ok(())
    }

    // ------------------------------------------------------------
    // <BODY> ::= id '(' <CALL> <BODY> |
    //            'iter' <ITER> <BODY> |
    //            'if' <IF> <BODY> |
    //            type_id id ';' <BODY> |
    //            var_id '=' <EXPR> ';' <BODY> |
    //            '{' <BODY> '}' <BODY> |
    //            <Empty>
    // ------------------------------------------------------------
    pub(crate) fn body(&mut self, body: &mut Body) -> Result<(), FxError> {
        self.push_trace("Body");
        self.envs.push_env();
        let result = self.body_tail(body);
        self.envs.pop_env();
        self.pop_trace();
        result
    }

    fn body_tail(&mut self, body: &mut Body) -> Result<(), FxError> {
        loop {
            let t = self.lexer.peek()?;
            match t.kind {
                TokenKind::Id => {
                    let tok_id = self.lexer.lex()?;
                    self.dprintf(format!("ID {}", tok_id));

                    // The symbol's kind disambiguates the statement: a
                    // func begins a call, a type a declaration, a var an
                    // assignment.
                    let Some(sym) = self.envs.get_sym(&tok_id.lexeme) else {
                        self.errorf(format!("symbol {} not found", tok_id.lexeme))?;
                        self.lexer
                            .skip_until(&[TokenKind::Semicolon, TokenKind::RCurl])?;
                        if self.lexer.peek()?.kind == TokenKind::Semicolon {
                            self.lexer.lex()?;
                        }
                        continue;
                    };

                    let kind = sym.borrow().kind();
                    let stm = match kind {
                        SymKind::Func => self.call_stmt(sym)?,
                        SymKind::Type => self.decl_stmt(&sym)?,
                        SymKind::Var => self.assign_stmt(sym)?,
                    };
                    if let Some(stm) = stm {
                        body.add_stm(stm);
                    }
                }
                TokenKind::Key => {
                    let t = self.lexer.lex()?;
                    match t.lexeme.as_str() {
                        "iter" => {
                            self.dprintf(format!("Key {}", t));
                            if let Some(stm) = self.iter_stmt()? {
                                body.add_stm(stm);
                            }
                        }
                        "if" => {
                            self.dprintf(format!("Key {}", t));
                            if let Some(stm) = self.if_stmt()? {
                                body.add_stm(stm);
                            }
                        }
                        _ => {
                            self.errorf("keyword unexpected")?;
                            self.lexer.skip_until(&[
                                TokenKind::LPar,
                                TokenKind::RPar,
                                TokenKind::Comma,
                            ])?;
                        }
                    }
                }
                TokenKind::LCurl => {
                    let t = self.lexer.lex()?;
                    self.dprintf(t.to_string());

                    let mut inner = Body::new();
                    self.body(&mut inner)?;

                    let (t, is_rcurl) = self.match_tok(TokenKind::RCurl)?;
                    if !is_rcurl {
                        self.errorf("bad statement")?;
                        self.lexer.skip_until_and_lex(TokenKind::RCurl)?;
                        body.add_stm(Stmt::Block(inner));
                        return Ok(());
                    }
                    self.dprintf(t.to_string());
                    body.add_stm(Stmt::Block(inner));
                }
                _ => return Ok(()),
            }
        }
    }

    // ------------------------------------------------------------
    // <CALL> ::= ')' ';' | <ARGS_LIST> ')' ';'
    // ------------------------------------------------------------
    fn call_stmt(&mut self, target: SymRef) -> Result<Option<Stmt>, FxError> {
        let (t, is_lpar) = self.match_tok(TokenKind::LPar)?;
        if !is_lpar {
            self.errorf("bad statement")?;
            self.lexer.skip_until(&[
                TokenKind::RPar,
                TokenKind::Comma,
                TokenKind::Semicolon,
            ])?;
        } else {
            self.dprintf(t.to_string());
        }

        let mut call = Call {
            target,
            args: Vec::new(),
        };
        self.call(&mut call)?;

        Ok(Some(Stmt::Call(call)))
    }

    fn call(&mut self, call: &mut Call) -> Result<(), FxError> {
        self.push_trace("Call");
        let result = self.call_tail(call);
        self.pop_trace();
        result
    }

    fn call_tail(&mut self, call: &mut Call) -> Result<(), FxError> {
        let (t, is_rpar) = self.match_tok(TokenKind::RPar)?;
        if !is_rpar {
            self.args_list(call)?;

            let (t, is_rpar) = self.match_tok(TokenKind::RPar)?;
            if !is_rpar {
                self.errorf("bad statement")?;
                self.lexer.skip_until(&[TokenKind::Semicolon])?;
            } else {
                self.dprintf(t.to_string());
            }
        } else {
            self.dprintf(t.to_string());
        }

        let (t, is_semicolon) = self.match_tok(TokenKind::Semicolon)?;
        if !is_semicolon {
            self.errorf("bad statement")?;
            self.lexer.skip_until_and_lex(TokenKind::Semicolon)?;
            return Ok(());
        }
        self.dprintf(t.to_string());

        Ok(())
    }

    // ------------------------------------------------------------
    // <ARGS_LIST> ::= <EXPR> <ARGS>
    // <ARGS>      ::= ',' <EXPR> <ARGS> | <Empty>
    // ------------------------------------------------------------
    fn args_list(&mut self, call: &mut Call) -> Result<(), FxError> {
        self.push_trace("ArgsList");
        let result = self.args_list_tail(call);
        self.pop_trace();
        result
    }

    fn args_list_tail(&mut self, call: &mut Call) -> Result<(), FxError> {
        if let Some(arg) = self.require_expr("call argument")? {
            call.args.push(arg);
        }
        self.args(call)
    }

    fn args(&mut self, call: &mut Call) -> Result<(), FxError> {
        loop {
            self.push_trace("Args");
            let round = self.args_tail(call);
            self.pop_trace();
            if !round? {
                return Ok(());
            }
        }
    }

    fn args_tail(&mut self, call: &mut Call) -> Result<bool, FxError> {
        let (t, is_comma) = self.match_tok(TokenKind::Comma)?;
        if !is_comma {
            return Ok(false);
        }
        self.dprintf(t.to_string());

        if let Some(arg) = self.require_expr("call argument")? {
            call.args.push(arg);
        }
        Ok(true)
    }

    // ------------------------------------------------------------
    // type_id id ';'
    // ------------------------------------------------------------
    fn decl_stmt(&mut self, type_sym: &SymRef) -> Result<Option<Stmt>, FxError> {
        let (tok_id, is_id) = self.match_tok(TokenKind::Id)?;
        let mut decl_sym = None;

        if !is_id {
            self.errorf("bad statement")?;
            self.lexer.skip_until(&[TokenKind::Semicolon])?;
        } else {
            self.dprintf(format!("ID {}", tok_id));

            let place = self.here();
            match self.envs.new_sym(&tok_id.lexeme, SymKind::Var) {
                Ok(v_sym) => {
                    {
                        let mut v = v_sym.borrow_mut();
                        if let Some(tp) = type_sym.borrow().type_ref() {
                            v.set_type(tp);
                        }
                        v.add_place(place);
                    }
                    decl_sym = Some(v_sym);
                }
                Err(err) => self.errorf(err.message)?,
            }
        }

        let (t, is_semicolon) = self.match_tok(TokenKind::Semicolon)?;
        if !is_semicolon {
            self.errorf("bad statement")?;
            self.lexer.skip_until_and_lex(TokenKind::Semicolon)?;
        } else {
            self.dprintf(t.to_string());
        }

        Ok(decl_sym.map(Stmt::Decl))
    }

    // ------------------------------------------------------------
    // var_id '=' <EXPR> ';'
    // ------------------------------------------------------------
    fn assign_stmt(&mut self, target: SymRef) -> Result<Option<Stmt>, FxError> {
        let (t, is_equal) = self.match_tok(TokenKind::Assign)?;
        if !is_equal {
            self.errorf("bad statement")?;
            self.lexer.skip_until(&[TokenKind::Semicolon])?;
        } else {
            self.dprintf(t.to_string());
        }

        let value = self.require_expr("assignment value")?;

        let (t, is_semicolon) = self.match_tok(TokenKind::Semicolon)?;
        if !is_semicolon {
            self.errorf("bad statement")?;
            self.lexer.skip_until_and_lex(TokenKind::Semicolon)?;
        } else {
            self.dprintf(t.to_string());
        }

        Ok(Some(Stmt::Assign(Assign { target, value })))
    }

    // ------------------------------------------------------------
    // <ITER> ::= '(' id ':=' <EXPR> ',' <EXPR> ',' <EXPR> ')' '{' <BODY> '}'
    // ------------------------------------------------------------
    fn iter_stmt(&mut self) -> Result<Option<Stmt>, FxError> {
        self.push_trace("Iter");
        self.envs.push_env();
        let result = self.iter_tail();
        self.envs.pop_env();
        self.pop_trace();
        result
    }

    fn iter_tail(&mut self) -> Result<Option<Stmt>, FxError> {
        const SYNC: &[TokenKind] = &[
            TokenKind::LCurl,
            TokenKind::RCurl,
            TokenKind::RPar,
            TokenKind::Comma,
        ];

        let (t, is_lpar) = self.match_tok(TokenKind::LPar)?;
        if !is_lpar {
            self.errorf("iter (bad statement)")?;
            self.lexer.skip_until(SYNC)?;
        } else {
            self.dprintf(t.to_string());
        }

        let (t, is_id) = self.match_tok(TokenKind::Id)?;
        let mut control = None;
        if !is_id {
            self.errorf("iter (bad statement)")?;
            self.lexer.skip_until(SYNC)?;
        } else {
            self.dprintf(format!("ID {}", t));

            let place = self.here();
            match self.envs.new_sym(&t.lexeme, SymKind::Var) {
                Ok(v_sym) => {
                    {
                        let mut v = v_sym.borrow_mut();
                        v.add_tok_kind(t.kind);
                        v.add_place(place);
                        v.set_type(TypeId::Int);
                    }
                    control = Some(v_sym);
                }
                Err(err) => self.errorf(err.message)?,
            }
        }

        let (t, is_decl) = self.match_tok(TokenKind::Decl)?;
        if !is_decl {
            self.errorf("iter (bad statement)")?;
            self.lexer.skip_until(SYNC)?;
        } else {
            self.dprintf(t.to_string());
        }

        let start = self.require_expr("iter start")?;

        let (t, is_comma) = self.match_tok(TokenKind::Comma)?;
        if !is_comma {
            self.errorf("iter (bad statement)")?;
            self.lexer.skip_until(SYNC)?;
        } else {
            self.dprintf(t.to_string());
        }

        let end = self.require_expr("iter end")?;

        let (t, is_comma) = self.match_tok(TokenKind::Comma)?;
        if !is_comma {
            self.errorf("iter (bad statement)")?;
            self.lexer
                .skip_until(&[TokenKind::LCurl, TokenKind::RCurl, TokenKind::RPar])?;
        } else {
            self.dprintf(t.to_string());
        }

        let step = self.require_expr("iter step")?;

        let (t, is_rpar) = self.match_tok(TokenKind::RPar)?;
        if !is_rpar {
            self.errorf("iter (bad statement)")?;
            self.lexer
                .skip_until(&[TokenKind::LCurl, TokenKind::RCurl])?;
        } else {
            self.dprintf(t.to_string());
        }

        let (t, is_lcurl) = self.match_tok(TokenKind::LCurl)?;
        if !is_lcurl {
            self.errorf("iter (bad statement)")?;
            self.lexer.skip_until(&[TokenKind::RCurl])?;
        } else {
            self.dprintf(t.to_string());
        }

        let mut iter_body = Body::new();
        self.body(&mut iter_body)?;

        let (t, is_rcurl) = self.match_tok(TokenKind::RCurl)?;
        if !is_rcurl {
            self.errorf("iter (bad statement)")?;
            self.lexer.skip_until_and_lex(TokenKind::RCurl)?;
        } else {
            self.dprintf(t.to_string());
        }

        Ok(Some(Stmt::Iter(Iter {
            control,
            start,
            end,
            step,
            body: iter_body,
        })))
    }

    // ------------------------------------------------------------
    // <IF>   ::= '(' <EXPR> ')' '{' <BODY> '}' <ELSE>
    // <ELSE> ::= 'else' '{' <BODY> '}' | <Empty>
    // ------------------------------------------------------------
    fn if_stmt(&mut self) -> Result<Option<Stmt>, FxError> {
        self.push_trace("If");
        let result = self.if_tail();
        self.pop_trace();
        result
    }

    fn if_tail(&mut self) -> Result<Option<Stmt>, FxError> {
        let (t, is_lpar) = self.match_tok(TokenKind::LPar)?;
        if !is_lpar {
            self.errorf("if (bad statement)")?;
            self.lexer
                .skip_until(&[TokenKind::LCurl, TokenKind::RCurl, TokenKind::RPar])?;
        } else {
            self.dprintf(t.to_string());
        }

        let cond = self.require_expr("if condition")?;

        let (t, is_rpar) = self.match_tok(TokenKind::RPar)?;
        if !is_rpar {
            self.errorf("if (bad statement)")?;
            self.lexer
                .skip_until(&[TokenKind::LCurl, TokenKind::RCurl])?;
        } else {
            self.dprintf(t.to_string());
        }

        let (t, is_lcurl) = self.match_tok(TokenKind::LCurl)?;
        if !is_lcurl {
            self.errorf("if (bad statement)")?;
            self.lexer.skip_until(&[TokenKind::RCurl])?;
        } else {
            self.dprintf(t.to_string());
        }

        let mut then_body = Body::new();
        self.body(&mut then_body)?;

        let (t, is_rcurl) = self.match_tok(TokenKind::RCurl)?;
        if !is_rcurl {
            self.errorf("if (bad statement)")?;
            self.lexer.skip_until_and_lex(TokenKind::RCurl)?;
        } else {
            self.dprintf(t.to_string());
        }

        let body_else = self.else_part()?;

        Ok(Some(Stmt::If(NodeIf {
            cond,
            body: then_body,
            body_else,
        })))
    }

    fn else_part(&mut self) -> Result<Option<Body>, FxError> {
        self.push_trace("Else");
        let result = self.else_tail();
        self.pop_trace();
        result
    }

    fn else_tail(&mut self) -> Result<Option<Body>, FxError> {
        let t = self.lexer.peek()?;
        if t.kind != TokenKind::Key || t.lexeme != "else" {
            return Ok(None);
        }
        self.lexer.lex()?;
        self.dprintf(format!("Key {}", t));

        let (t, is_lcurl) = self.match_tok(TokenKind::LCurl)?;
        if !is_lcurl {
            self.errorf("if (bad statement)")?;
            self.lexer.skip_until(&[TokenKind::RCurl])?;
        } else {
            self.dprintf(t.to_string());
        }

        let mut body_else = Body::new();
        self.body(&mut body_else)?;

        let (t, is_rcurl) = self.match_tok(TokenKind::RCurl)?;
        if !is_rcurl {
            self.errorf("if (bad statement)")?;
            self.lexer.skip_until_and_lex(TokenKind::RCurl)?;
        } else {
            self.dprintf(t.to_string());
        }

        Ok(Some(body_else))
    }

    /// Parses a statement-level expression; an empty result where the
    /// grammar requires one is a recorded diagnostic.
    fn require_expr(&mut self, what: &str) -> Result<Option<Expr>, FxError> {
        let e = self.expr(DEF_RBP - 1)?;
        if e.is_none() {
            self.errorf(format!("expected expression ({})", what))?;
        }
        Ok(e)
    }
}
