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

/// Reserved words that lex as `TokenKind::Key`.
///
/// `func` is not here: it opens every macro definition and gets its own
/// token kind. `True` / `False` lex as bool literals.
pub fn is_keyword(word: &str) -> bool {
    matches!(word, "iter" | "if" | "else")
}
