// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor errors.

use trimline_assets::AssetError;
use trimline_region::ConfigurationError;

/// Errors surfaced by the [`Editor`](crate::Editor).
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A region, grid or setting was configured with impossible geometry.
    #[error(transparent)]
    Config(#[from] ConfigurationError),
    /// An asset could not be loaded.
    #[error(transparent)]
    Asset(#[from] AssetError),
}
