/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the FX recursive-descent parser.
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

use std::sync::atomic::AtomicBool;

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes `Parser::new` and `Parser::parse`
pub mod parser;

/// Statement-level parsing:
/// - prog / func / head / formal parameters
/// - bodies, calls, iter, if/else, declarations, assignments
pub mod statements;

/// Expression-level parsing:
/// - the Pratt precedence climber (Nud / Led / binding powers)
pub mod expressions;

/// Shared parser helpers:
/// - token matching
/// - diagnostics recording
/// - debug trace bookkeeping
pub mod helpers;

pub use parser::Parser;

/// Process-wide parser trace flag. Set before parsing begins; each
/// `Parser` reads it once at construction.
pub static DEBUG_PARSER: AtomicBool = AtomicBool::new(false);
