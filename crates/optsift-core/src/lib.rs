// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # optsift-core
//!
//! Exact-match option sifting for argument vectors.
//!
//! ## Overview
//!
//! This crate does one thing: it scans a mutable argument vector for a named
//! option token, removes the first match in place (together with its value
//! token, if one was requested), and hands the result back to the caller.
//! Names are compared byte-for-byte against whole tokens. There is no
//! `--name=value` splitting, no short-option clustering, no prefix or
//! case-folded matching, and no help-text machinery; callers that want a full
//! argument framework want a different crate.
//!
//! The intended shape of use is a loop over the option names a program knows,
//! after which whatever is left in the vector is positional.
//!
//! ## Quick Start
//!
//! ```rust
//! use optsift_core::{take_flag, take_value};
//!
//! let mut argv = vec!["prog", "-v", "-o", "out.txt", "file"];
//!
//! let verbose = take_flag(&mut argv, "-v");
//! let output = take_value(&mut argv, "-o")?;
//!
//! assert!(verbose);
//! assert_eq!(output, Some("out.txt"));
//! assert_eq!(argv, ["prog", "file"]);
//! # Ok::<(), optsift_core::SiftError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod sift;

// Re-exports for convenience
pub use error::{Result, SiftError};
pub use sift::{take_all_values, take_flag, take_value};
