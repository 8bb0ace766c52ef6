// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asset loading errors.

use std::path::PathBuf;

/// Errors raised while loading or decoding an asset.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The asset file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The bytes are not a WAV file hound can decode.
    #[error("invalid wav: {0}")]
    Wav(#[from] hound::Error),
    /// The bytes are not an image the image crate can decode.
    #[error("invalid image: {0}")]
    Image(#[from] image::ImageError),
    /// The asset could not be downloaded.
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// What went wrong.
        message: String,
    },
    /// The audio has fewer samples than the waveform has bars.
    #[error("{samples} samples cannot fill {bars} bars")]
    TooShort {
        /// Samples in the first channel.
        samples: usize,
        /// Bars requested.
        bars: usize,
    },
    /// The asset has no pixels or no samples.
    #[error("asset is empty")]
    Empty,
    /// The loader's worker thread is gone.
    #[error("asset worker stopped")]
    WorkerGone,
}
