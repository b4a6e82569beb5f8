/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for FX lexical analysis.
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

/// Token kinds and the token value.
pub mod token;

/// Reserved-word classification.
pub mod keywords;

/// The scanner itself.
pub mod lexer;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

/// Process-wide lexer trace flag. Set before lexing begins; each `Lexer`
/// reads it once at construction.
pub static DEBUG_LEXER: AtomicBool = AtomicBool::new(false);
