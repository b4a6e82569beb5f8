/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the FX abstract syntax tree.
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

/// Expression trees.
pub mod expr;

/// Program structure and the statement union.
pub mod stmt;

/// Depth-indented textual dump.
pub mod display;

/// JSON dump for tooling.
pub mod json;

pub use expr::Expr;
pub use stmt::{Assign, Body, Call, Func, Head, Iter, NodeIf, Prog, Stmt};
