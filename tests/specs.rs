// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace integration specs over the built `jt` binary.
//!
//! Everything here exercises the argument surface only: these specs must
//! pass without AWS credentials, so they stop at the point where a command
//! would issue its first network call.


mod cli {
    mod args;
    mod help;
}
