/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
 *
 * File:     types.rs
 * Purpose:  The fixed registry of built-in FX types.
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

use std::fmt;

/// The four built-in FX types, identified by small integer ids.
///
/// There is no user-defined type syntax; these are seeded into the global
/// scope frame before parsing and resolved by name in declarations and
/// formal parameter lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeId {
    Undef = 0,
    Int = 1,
    Bool = 2,
    Coord = 3,
}

impl TypeId {
    pub const ALL: [TypeId; 4] = [TypeId::Undef, TypeId::Int, TypeId::Bool, TypeId::Coord];

    /// The textual name used in source code and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TypeId::Undef => "undef",
            TypeId::Int => "int",
            TypeId::Bool => "bool",
            TypeId::Coord => "Coord",
        }
    }

    pub fn id(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
