/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     environment.rs
 * Purpose:  Kind-tagged symbols and the stack of lexical scope frames
 *           shared by the parser and the interpreter.
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

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::ast::Func;
use crate::error::FxError;
use crate::lexer::token::TokenKind;
use crate::span::Place;
use crate::types::TypeId;

/// Shared handle to a symbol. The AST keeps non-owning references through
/// these; the interpreter rewrites content in place.
pub type SymRef = Rc<RefCell<Sym>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymKind {
    Var,
    Func,
    Type,
}

impl SymKind {
    pub fn name(self) -> &'static str {
        match self {
            SymKind::Var => "var",
            SymKind::Func => "func",
            SymKind::Type => "type",
        }
    }
}

/// What a symbol holds. The kind tag stays authoritative; content is just
/// the payload that kind implies.
#[derive(Debug, Clone)]
pub enum SymContent {
    Empty,
    Int(i64),
    Func(Rc<Func>),
    Type(TypeId),
}

#[derive(Debug)]
pub struct Sym {
    name: String,
    kind: SymKind,
    sym_type: TypeId,
    tok_kind: Option<TokenKind>,
    places: Vec<Place>,
    content: SymContent,
}

impl Sym {
    fn new(name: impl Into<String>, kind: SymKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sym_type: TypeId::Undef,
            tok_kind: None,
            places: Vec::new(),
            content: SymContent::Empty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SymKind {
        self.kind
    }

    /// Declared type; `Undef` until a declaration resolves one.
    pub fn sym_type(&self) -> TypeId {
        self.sym_type
    }

    pub fn set_type(&mut self, ty: TypeId) {
        self.sym_type = ty;
    }

    /// The token kind that produced this symbol, when the parser recorded one.
    pub fn tok_kind(&self) -> Option<TokenKind> {
        self.tok_kind
    }

    pub fn add_tok_kind(&mut self, kind: TokenKind) {
        self.tok_kind = Some(kind);
    }

    /// Declaration / reference sites, oldest first.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn add_place(&mut self, place: Place) {
        self.places.push(place);
    }

    pub fn content(&self) -> &SymContent {
        &self.content
    }

    pub fn set_content(&mut self, content: SymContent) {
        self.content = content;
    }

    /// The integer value of an evaluated variable, if that is what we hold.
    pub fn int_value(&self) -> Option<i64> {
        match self.content {
            SymContent::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The function AST behind a Func-kind symbol.
    pub fn func(&self) -> Option<Rc<Func>> {
        match &self.content {
            SymContent::Func(f) => Some(Rc::clone(f)),
            _ => None,
        }
    }

    /// The type behind a Type-kind symbol.
    pub fn type_ref(&self) -> Option<TypeId> {
        match self.content {
            SymContent::Type(t) => Some(t),
            _ => None,
        }
    }
}

/// The scope stack: an ordered pile of name → symbol frames.
///
/// Lookup walks from the innermost frame outwards. The strict insert is the
/// parser's duplicate-declaration detector; the shadowing insert is the
/// interpreter's binding primitive (parameters, loop controls, hoisted
/// locals).
#[derive(Debug, Default)]
pub struct StkEnv {
    frames: Vec<HashMap<String, SymRef>>,
}

impl StkEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new innermost frame.
    pub fn push_env(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Closes the innermost frame.
    ///
    /// # Panics
    /// Popping the last remaining frame is a bug in the caller, never a
    /// recoverable condition, and panics.
    pub fn pop_env(&mut self) {
        if self.frames.len() <= 1 {
            panic!("scope stack underflow: attempt to pop the global frame");
        }
        self.frames.pop();
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Creates `name` in the innermost frame; duplicate names in that frame
    /// are an error.
    pub fn new_sym(&mut self, name: &str, kind: SymKind) -> Result<SymRef, FxError> {
        let top = self
            .frames
            .last_mut()
            .expect("scope stack has no frames");
        if top.contains_key(name) {
            return Err(FxError::duplicate(name));
        }
        let sym = Rc::new(RefCell::new(Sym::new(name, kind)));
        top.insert(name.to_string(), Rc::clone(&sym));
        Ok(sym)
    }

    /// Creates `name` in the innermost frame, overwriting a same-name entry
    /// there. Entries in outer frames are untouched (they are shadowed).
    pub fn new_sym_with_shadowing(&mut self, name: &str, kind: SymKind) -> SymRef {
        let top = self
            .frames
            .last_mut()
            .expect("scope stack has no frames");
        let sym = Rc::new(RefCell::new(Sym::new(name, kind)));
        top.insert(name.to_string(), Rc::clone(&sym));
        sym
    }

    /// Finds `name`, innermost frame first.
    pub fn get_sym(&self, name: &str) -> Option<SymRef> {
        for frame in self.frames.iter().rev() {
            if let Some(sym) = frame.get(name) {
                return Some(Rc::clone(sym));
            }
        }
        None
    }

    /// Finds `name` in the outermost (global) frame only. This is how call
    /// evaluation decides whether a callee is a built-in.
    pub fn get_global(&self, name: &str) -> Option<SymRef> {
        self.frames
            .first()
            .and_then(|frame| frame.get(name))
            .map(Rc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_frames_inner_first() {
        let mut envs = StkEnv::new();
        envs.push_env();
        let outer = envs.new_sym("x", SymKind::Var).unwrap();
        outer.borrow_mut().set_content(SymContent::Int(1));

        envs.push_env();
        let inner = envs.new_sym("x", SymKind::Var).unwrap();
        inner.borrow_mut().set_content(SymContent::Int(2));

        assert_eq!(envs.get_sym("x").unwrap().borrow().int_value(), Some(2));
        envs.pop_env();
        assert_eq!(envs.get_sym("x").unwrap().borrow().int_value(), Some(1));
    }

    #[test]
    fn strict_insert_rejects_duplicates_in_one_frame() {
        let mut envs = StkEnv::new();
        envs.push_env();
        envs.new_sym("k", SymKind::Var).unwrap();
        let err = envs.new_sym("k", SymKind::Var).unwrap_err();
        assert_eq!(err.code, "E_DUPLICATE");

        // A fresh frame may reuse the name.
        envs.push_env();
        assert!(envs.new_sym("k", SymKind::Var).is_ok());
    }

    #[test]
    fn shadowing_insert_overwrites_top_frame_only() {
        let mut envs = StkEnv::new();
        envs.push_env();
        let first = envs.new_sym("k", SymKind::Var).unwrap();
        first.borrow_mut().set_content(SymContent::Int(7));

        let second = envs.new_sym_with_shadowing("k", SymKind::Var);
        assert_eq!(second.borrow().int_value(), None);
        assert_eq!(envs.get_sym("k").unwrap().borrow().int_value(), None);
    }

    #[test]
    fn global_lookup_ignores_inner_frames() {
        let mut envs = StkEnv::new();
        envs.push_env();
        envs.new_sym("circle", SymKind::Func).unwrap();
        envs.push_env();
        envs.new_sym("local", SymKind::Var).unwrap();

        assert!(envs.get_global("circle").is_some());
        assert!(envs.get_global("local").is_none());
    }

    #[test]
    #[should_panic(expected = "scope stack underflow")]
    fn popping_the_global_frame_panics() {
        let mut envs = StkEnv::new();
        envs.push_env();
        envs.pop_env();
    }

    #[test]
    fn push_and_pop_balance() {
        let mut envs = StkEnv::new();
        envs.push_env();
        let base = envs.depth();
        envs.push_env();
        envs.push_env();
        envs.pop_env();
        envs.pop_env();
        assert_eq!(envs.depth(), base);
    }
}
