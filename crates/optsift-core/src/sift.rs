// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that sifts option tokens out of an argument vector.
//!
//! All three operations share the same core behavior: scan the vector front
//! to back for the first token that equals `name` byte-for-byte, remove the
//! matched entries in place, and leave every other token in its original
//! relative order. Tokens before the match are never inspected again and
//! never move. Only the value-taking form can fail, and only in one way: the
//! matched name is the final token, so no value follows it. A failed call
//! leaves the vector exactly as it was.
//!
//! The functions are generic over the token type so that real argument lists
//! (`Vec<String>`) and literal test fixtures (`Vec<&str>`) both work. The
//! captured value is moved out of the vector, never cloned.

use crate::error::{Result, SiftError};

/// Removes the first token equal to `name` from `args`.
///
/// Returns `true` if a token was removed. Tokens after the match shift left
/// by one; the vector length shrinks by one. When `name` does not occur,
/// `args` is untouched and the call returns `false` — an absent flag is not
/// an error. A flag as the final token is a perfectly ordinary match: only
/// value-taking options look at the token after the name.
///
/// Each call consumes at most one occurrence. Call again to take the next
/// one.
///
/// # Examples
///
/// ```rust
/// use optsift_core::take_flag;
///
/// let mut argv = vec!["prog", "-v", "file"];
/// assert!(take_flag(&mut argv, "-v"));
/// assert!(!take_flag(&mut argv, "-v"));
/// assert_eq!(argv, ["prog", "file"]);
/// ```
pub fn take_flag<T: AsRef<str>>(args: &mut Vec<T>, name: &str) -> bool {
    match args.iter().position(|token| token.as_ref() == name) {
        Some(i) => {
            args.remove(i);
            true
        }
        None => false,
    }
}

/// Removes the first token equal to `name` together with the token that
/// follows it, and returns the follower as the option's value.
///
/// Returns `Ok(Some(value))` on a match, `Ok(None)` when `name` does not
/// occur (the vector is untouched), and [`SiftError::MissingValue`] when the
/// match is the final token so nothing follows it — in that case too the
/// vector is untouched. On a match, tokens after the removed pair shift left
/// by two and the vector length shrinks by two.
///
/// The follower is taken verbatim, even when it looks like another option
/// token; the scanner has no opinion about what a value may look like.
///
/// # Examples
///
/// ```rust
/// use optsift_core::take_value;
///
/// let mut argv = vec!["prog", "-o", "out.txt", "file"];
/// assert_eq!(take_value(&mut argv, "-o")?, Some("out.txt"));
/// assert_eq!(argv, ["prog", "file"]);
/// # Ok::<(), optsift_core::SiftError>(())
/// ```
pub fn take_value<T: AsRef<str>>(args: &mut Vec<T>, name: &str) -> Result<Option<T>> {
    let Some(i) = args.iter().position(|token| token.as_ref() == name) else {
        return Ok(None);
    };

    if i + 1 == args.len() {
        return Err(SiftError::MissingValue(name.to_string()));
    }

    // Take the value first so the name's index stays valid.
    let value = args.remove(i + 1);
    args.remove(i);
    Ok(Some(value))
}

/// Repeatedly applies [`take_value`] until `name` no longer occurs, and
/// returns the captured values in left-to-right order.
///
/// If a trailing bare occurrence triggers [`SiftError::MissingValue`], the
/// pairs sifted before it stay removed; values captured up to that point are
/// dropped with the error.
pub fn take_all_values<T: AsRef<str>>(args: &mut Vec<T>, name: &str) -> Result<Vec<T>> {
    let mut values = Vec::new();
    while let Some(value) = take_value(args, name)? {
        values.push(value);
    }
    Ok(values)
}
