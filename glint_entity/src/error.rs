// Copyright 2026 the Glint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use thiserror::Error;

/// Errors raised while interpreting entity configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A kind name did not match any [`EntityKind`](crate::EntityKind).
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),
}
