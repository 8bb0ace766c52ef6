// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status line.

use std::fmt;

/// The one-line status shown under the editing surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing to report.
    #[default]
    Ready,
    /// An asset is being decoded in the background.
    Loading(String),
    /// The last operation failed. Existing regions stay usable.
    Error(String),
}

impl Status {
    /// True while a background decode is running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Loading(what) => write!(f, "loading {what}…"),
            Self::Error(message) => f.write_str(message),
        }
    }
}
