/*
 * ==========================================================================
 * FX - Shapes from Code!
 * ==========================================================================
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

/// A source position: file name plus 1-based line number.
///
/// Carried by every token, recorded on every symbol declaration site,
/// and attached to errors so diagnostics can say where things happened.
/// Built-in symbols use the pseudo-file `"builtin"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub file: String,
    pub line: usize,
}

impl Place {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
