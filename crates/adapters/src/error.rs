// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors from cloud client operations.
///
/// Expected negative lookups (wrong-cluster guesses, empty describes) are
/// not errors; they come back as `Ok` values on the individual traits.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("request failed: {0}")]
    Request(String),
}
