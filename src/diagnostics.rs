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

use crate::span::Place;

/// Collects the parser's syntax diagnostics.
///
/// Every recorded error is printed to stderr immediately, in the canonical
/// `<file>:<line>: syntax error: <message>` form, and kept in order so
/// callers (and tests) can inspect what was reported after the fact.
#[derive(Debug, Default)]
pub struct Diagnostics {
    emitted: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one syntax error at `place`.
    pub fn syntax_error(&mut self, place: &Place, message: impl AsRef<str>) {
        let line = format!("{}: syntax error: {}", place, message.as_ref());
        eprintln!("{}", line);
        self.emitted.push(line);
    }

    /// Number of errors recorded so far.
    pub fn count(&self) -> usize {
        self.emitted.len()
    }

    /// The recorded diagnostic lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.emitted
    }
}
