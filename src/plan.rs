// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The sift plan: which names to take out of the target list, and how.
//!
//! The driver's own argument walk lives here so it can be tested without a
//! terminal. It is a plain left-to-right loop: spec options (`--flag`,
//! `--option`) each consume the NAME that follows them, `--` ends the spec
//! list, and the first token the walk does not recognize starts the target
//! list. Sifting literal `--flag`/`--option` tokens out of a target list
//! therefore requires the `--` separator.

use optsift_core::{take_all_values, take_flag};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// One request to sift a name out of the target list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Spec {
    /// Take every occurrence of the name as a flag.
    Flag(String),
    /// Take every occurrence of the name together with its value.
    Value(String),
}

/// Errors in the driver's own invocation, before any sifting happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A spec option was given without the NAME that must follow it.
    #[error("'{0}' requires a NAME")]
    MissingName(String),

    /// A token in option position that the driver does not know.
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// A parsed invocation: the specs to apply, in order, and the target list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiftPlan {
    /// Sift requests in the order they were given.
    pub specs: Vec<Spec>,
    /// Print only the leftover line.
    pub quiet: bool,
    /// The tokens to sift.
    pub tokens: Vec<String>,
}

impl SiftPlan {
    /// Walk the driver's own arguments (program name already stripped).
    pub fn parse(args: Vec<String>) -> Result<Self, PlanError> {
        let mut specs = Vec::new();
        let mut quiet = false;
        let mut tokens = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--" => {
                    tokens.extend(args.by_ref());
                    break;
                }
                "-q" | "--quiet" => quiet = true,
                "-f" | "--flag" => {
                    let Some(name) = args.next() else {
                        return Err(PlanError::MissingName(arg));
                    };
                    specs.push(Spec::Flag(name));
                }
                "-o" | "--option" => {
                    let Some(name) = args.next() else {
                        return Err(PlanError::MissingName(arg));
                    };
                    specs.push(Spec::Value(name));
                }
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(PlanError::UnknownOption(arg));
                }
                _ => {
                    // First target token; the rest of the line follows it.
                    tokens.push(arg);
                    tokens.extend(args.by_ref());
                    break;
                }
            }
        }

        Ok(Self {
            specs,
            quiet,
            tokens,
        })
    }

    /// Apply every spec to the target list and collect the report.
    ///
    /// Specs run in the order given; each one is sifted until the name no
    /// longer occurs, so duplicates in the target list produce one report
    /// line per occurrence.
    pub fn run(mut self) -> optsift_core::Result<Report> {
        let mut lines = Vec::new();

        for spec in &self.specs {
            match spec {
                Spec::Flag(name) => {
                    while take_flag(&mut self.tokens, name) {
                        debug!("sifted flag {}", name);
                        lines.push(ReportLine::Flag(name.clone()));
                    }
                }
                Spec::Value(name) => {
                    for value in take_all_values(&mut self.tokens, name)? {
                        debug!("sifted option {} = {}", name, value);
                        lines.push(ReportLine::Value(name.clone(), value));
                    }
                }
            }
        }

        Ok(Report {
            lines,
            rest: self.tokens,
        })
    }
}

/// What a run produced: one line per sifted occurrence, plus the leftovers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// One entry per occurrence taken, in sift order.
    pub lines: Vec<ReportLine>,
    /// The target tokens that survived every spec.
    pub rest: Vec<String>,
}

/// A single sifted occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    /// A flag was taken: printed as the bare name.
    Flag(String),
    /// An option was taken: printed as `NAME VALUE`.
    Value(String, String),
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Flag(name) => write!(f, "{}", name),
            ReportLine::Value(name, value) => write!(f, "{} {}", name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optsift_core::SiftError;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_specs_then_separator() {
        let plan = SiftPlan::parse(args(&["-f", "-v", "-o", "-o", "--", "prog", "file"])).unwrap();
        assert_eq!(
            plan.specs,
            [
                Spec::Flag("-v".to_string()),
                Spec::Value("-o".to_string()),
            ]
        );
        assert!(!plan.quiet);
        assert_eq!(plan.tokens, ["prog", "file"]);
    }

    #[test]
    fn test_parse_target_list_starts_at_first_plain_token() {
        let plan = SiftPlan::parse(args(&["-f", "-v", "prog", "-x", "file"])).unwrap();
        assert_eq!(plan.specs, [Spec::Flag("-v".to_string())]);
        // Everything from the first plain token on is target, dashes and all.
        assert_eq!(plan.tokens, ["prog", "-x", "file"]);
    }

    #[test]
    fn test_parse_quiet_and_long_forms() {
        let plan = SiftPlan::parse(args(&["--quiet", "--flag", "-v", "--option", "-o", "--"]))
            .unwrap();
        assert!(plan.quiet);
        assert_eq!(plan.specs.len(), 2);
        assert!(plan.tokens.is_empty());
    }

    #[test]
    fn test_parse_spec_missing_name() {
        let err = SiftPlan::parse(args(&["-f"])).unwrap_err();
        assert_eq!(err, PlanError::MissingName("-f".to_string()));
        assert_eq!(err.to_string(), "'-f' requires a NAME");
    }

    #[test]
    fn test_parse_unknown_option() {
        let err = SiftPlan::parse(args(&["-z", "--"])).unwrap_err();
        assert_eq!(err, PlanError::UnknownOption("-z".to_string()));
    }

    #[test]
    fn test_parse_lone_dash_is_a_target_token() {
        let plan = SiftPlan::parse(args(&["-", "a"])).unwrap();
        assert!(plan.specs.is_empty());
        assert_eq!(plan.tokens, ["-", "a"]);
    }

    #[test]
    fn test_run_reports_each_occurrence_in_spec_order() {
        let plan = SiftPlan::parse(args(&[
            "-f", "-v", "-o", "-o", "--", "prog", "-v", "-o", "out.txt", "-v", "file",
        ]))
        .unwrap();

        let report = plan.run().unwrap();

        assert_eq!(
            report.lines,
            [
                ReportLine::Flag("-v".to_string()),
                ReportLine::Flag("-v".to_string()),
                ReportLine::Value("-o".to_string(), "out.txt".to_string()),
            ]
        );
        assert_eq!(report.rest, ["prog", "file"]);
    }

    #[test]
    fn test_run_missing_value_propagates() {
        let plan = SiftPlan::parse(args(&["-o", "-o", "--", "prog", "-o"])).unwrap();
        assert_eq!(
            plan.run(),
            Err(SiftError::MissingValue("-o".to_string()))
        );
    }

    #[test]
    fn test_run_without_specs_passes_tokens_through() {
        let plan = SiftPlan::parse(args(&["--", "a", "b"])).unwrap();
        let report = plan.run().unwrap();
        assert!(report.lines.is_empty());
        assert_eq!(report.rest, ["a", "b"]);
    }

    #[test]
    fn test_report_line_display() {
        assert_eq!(ReportLine::Flag("-v".to_string()).to_string(), "-v");
        assert_eq!(
            ReportLine::Value("-o".to_string(), "out.txt".to_string()).to_string(),
            "-o out.txt"
        );
    }
}
