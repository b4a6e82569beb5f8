/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * FX is a tiny procedural macro language: programs are `func` macros whose
 * bodies call drawing primitives (`circle`, `rect`), loop with counted
 * `iter`s, branch with `if`/`else`, and compute over signed 64-bit integer
 * expressions. The front-end parses a token stream into an annotated AST
 * while populating a scoped symbol environment; on an error-free parse the
 * AST is dumped and a tree-walking evaluator runs `main`, printing each
 * resolved primitive call.
 *
 * Pipeline:
 *   Source → Lexer → Tokens → Parser (AST + symbols) → Interpreter
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

pub mod ast;
pub mod builtins;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod types;

use std::io::Write;

use crate::error::FxError;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Lexes and parses `source`, then, when no syntax error was recorded,
/// interprets it, writing primitive calls to `out`.
///
/// Returns the number of recorded syntax errors; unrecoverable faults
/// (lexical errors, unexpected EOF, the five-error ceiling, runtime
/// failures) come back as `Err`.
///
/// ```
/// let mut out = Vec::new();
/// let errors = fx::interpret("func main(){ circle(1, 2, 3, 4); }", "demo.fx", &mut out).unwrap();
/// assert_eq!(errors, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "circle 1 2 3 4 \n");
/// ```
pub fn interpret(source: &str, file: &str, out: &mut dyn Write) -> Result<usize, FxError> {
    let lexer = Lexer::new(source, file);
    let mut parser = Parser::new(lexer)?;
    let prog = parser.parse()?;

    let errors = parser.err_count();
    if errors == 0 {
        interpreter::run(&prog, parser.envs_mut(), out)?;
    }
    Ok(errors)
}
