// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument validation specs
//!
//! All of these are rejected by clap before any client is built, so they
//! need no credentials.

use crate::prelude::*;

#[test]
fn show_requires_a_job_id() {
    jt().args(&["show"]).fails().stderr_has("JOB_ID");
}

#[test]
fn logs_requires_a_job_id() {
    jt().args(&["logs"]).fails().stderr_has("JOB_ID");
}

#[test]
fn unknown_subcommand_is_rejected() {
    jt().args(&["explain", "job-123"]).fails().stderr_has("Usage:");
}

#[test]
fn show_rejects_a_bad_since_duration() {
    jt().args(&["show", "job-123", "--since", "15x"])
        .fails()
        .stderr_has("invalid duration");
}

#[test]
fn logs_rejects_a_bad_since_duration() {
    jt().args(&["logs", "job-123", "--since", "nope"])
        .fails()
        .stderr_has("invalid duration");
}

#[test]
fn show_rejects_a_non_numeric_line_count() {
    jt().args(&["show", "job-123", "--log-lines", "many"]).fails().stderr_has("--log-lines");
}
