// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn jt_no_args_shows_usage() {
    jt().fails().stderr_has("Usage:");
}

#[test]
fn jt_help_shows_subcommands() {
    jt().args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("show")
        .stdout_has("logs");
}

#[test]
fn jt_show_help_shows_flags() {
    jt().args(&["show", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--json")
        .stdout_has("--log-group")
        .stdout_has("--no-logs")
        .stdout_has("--since");
}

#[test]
fn jt_logs_help_shows_flags() {
    jt().args(&["logs", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--follow")
        .stdout_has("--from-start")
        .stdout_has("--limit");
}

#[test]
fn jt_version_shows_version() {
    jt().args(&["--version"]).passes().stdout_has("0.2");
}
