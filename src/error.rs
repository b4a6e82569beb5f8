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

use crate::span::Place;

#[derive(Debug, Clone)]
pub struct FxError {
    /// Stable error code (E_IO, E_LEX, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Source location, when one is known
    pub place: Option<Place>,

    /// Optional note / help text
    pub help: Option<String>,
}

impl FxError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, place: Option<Place>) -> Self {
        Self {
            code,
            message: message.into(),
            place,
            help: None,
        }
    }

    /// I/O error (file loading, output sink)
    pub fn io(message: impl Into<String>) -> Self {
        Self::new("E_IO", message, None)
    }

    /// Lexical error (unknown character, bad literal)
    pub fn lex(message: impl Into<String>, place: Place) -> Self {
        Self::new("E_LEX", message, Some(place))
    }

    /// Unexpected end of input while matching a required token
    pub fn unexpected_eof(place: Place) -> Self {
        Self::new("E_EOF", "unexpected EOF", Some(place))
    }

    /// The parser hit its syntax-error ceiling
    pub fn too_many_errors(place: Place) -> Self {
        Self::new("E_LIMIT", "too many errors", Some(place))
    }

    /// Duplicate name in a single scope frame
    pub fn duplicate(name: &str) -> Self {
        Self::new("E_DUPLICATE", format!("symbol {} already defined", name), None)
    }

    /// Runtime error (during evaluation)
    pub fn runtime(message: impl Into<String>, place: Option<Place>) -> Self {
        Self::new("E_RUNTIME", message, place)
    }

    /// Type error (content of the wrong shape)
    pub fn type_error(message: impl Into<String>, place: Option<Place>) -> Self {
        Self::new("E_TYPE", message, place)
    }

    /// Reference error (undefined symbol)
    pub fn reference(message: impl Into<String>, place: Option<Place>) -> Self {
        Self::new("E_REFERENCE", message, place)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for FxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.place {
            Some(place) => write!(f, "{}: error[{}]: {}", place, self.code, self.message)?,
            None => write!(f, "error[{}]: {}", self.code, self.message)?,
        }
        if let Some(help) = &self.help {
            write!(f, "\nhelp: {}", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for FxError {}
