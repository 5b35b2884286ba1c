// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for optsift.

use thiserror::Error;

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;

/// Errors produced while sifting an argument vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiftError {
    /// A value-taking option matched the final token, so no value follows it.
    /// The argument vector is left untouched when this is returned.
    #[error("option '{0}' requires a value")]
    MissingValue(String),
}

impl SiftError {
    /// The option name the error is about.
    pub fn option(&self) -> &str {
        match self {
            SiftError::MissingValue(name) => name,
        }
    }
}
