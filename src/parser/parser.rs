/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver used to transform the token stream into the FX
 * abstract syntax tree while populating the scoped symbol environment.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (func, iter, if, calls, …)
 * - `expressions.rs`  → Pratt operator-precedence expression grammar
 * - `helpers.rs`      → Token matching, diagnostics, and trace utilities
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

use std::sync::atomic::Ordering;

use crate::ast::Prog;
use crate::builtins;
use crate::diagnostics::Diagnostics;
use crate::environment::StkEnv;
use crate::error::FxError;
use crate::lexer::Lexer;
use crate::parser::DEBUG_PARSER;

/// The parse aborts once this many syntax errors have been recorded.
pub(crate) const MAX_ERRORS: usize = 5;

/// The core FX recursive-descent parser.
///
/// Owns the streaming lexer, the scope stack, and the diagnostics sink.
/// Construction opens the global frame (seeded with the built-in types and
/// primitives) and the program frame that will hold user macro symbols;
/// neither is ever popped. Every frame pushed while parsing is popped by
/// the production that pushed it.
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) envs: StkEnv,
    pub(crate) diag: Diagnostics,
    pub(crate) depth: usize,
    pub(crate) trace: bool,
}

impl Parser {
    /// Builds a parser over `lexer`, seeding the global frame.
    ///
    /// The parser trace flag is read once here; flipping it afterwards has
    /// no effect on this instance.
    pub fn new(lexer: Lexer) -> Result<Self, FxError> {
        let mut parser = Self {
            lexer,
            envs: StkEnv::new(),
            diag: Diagnostics::new(),
            depth: 0,
            trace: DEBUG_PARSER.load(Ordering::Relaxed),
        };

        parser.envs.push_env();
        builtins::install(&mut parser.envs)?;
        parser.envs.push_env();

        Ok(parser)
    }

    /// Parses the whole token stream into a `Prog`.
    ///
    /// Syntax errors are recorded in the diagnostics sink and recovered
    /// from; the returned error is reserved for the unrecoverable cases
    /// (lexical fault, unexpected EOF inside a match, the five-error
    /// ceiling). Callers must check `err_count()` before trusting the
    /// tree.
    pub fn parse(&mut self) -> Result<Prog, FxError> {
        self.push_trace("Parse");
        let result = self.prog();
        self.pop_trace();
        result
    }

    /// Number of syntax errors recorded so far.
    pub fn err_count(&self) -> usize {
        self.diag.count()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    pub fn envs(&self) -> &StkEnv {
        &self.envs
    }

    /// The scope stack, handed to the interpreter after a clean parse.
    pub fn envs_mut(&mut self) -> &mut StkEnv {
        &mut self.envs
    }

    /// Current trace recursion depth. Zero whenever no production is on
    /// the stack.
    pub fn trace_depth(&self) -> usize {
        self.depth
    }
}
