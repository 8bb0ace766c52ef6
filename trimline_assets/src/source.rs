// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where asset bytes come from and what they decode into.

use std::path::PathBuf;

use tracing::info;

use crate::error::AssetError;
use crate::sprite::{Bitmap, decode_sprite};
use crate::waveform::{WaveformOptions, waveform_bitmap};

/// Where an asset's bytes come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetSource {
    /// Bytes already in memory, for example from a file picker.
    Bytes(Vec<u8>),
    /// A file on disk.
    Path(PathBuf),
    /// An http(s) URL.
    #[cfg(feature = "fetch")]
    Url(String),
}

impl AssetSource {
    /// Short human readable name, used in status messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bytes(bytes) => format!("{} bytes", bytes.len()),
            Self::Path(path) => path.display().to_string(),
            #[cfg(feature = "fetch")]
            Self::Url(url) => url.clone(),
        }
    }

    fn read(&self) -> Result<Vec<u8>, AssetError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::Path(path) => std::fs::read(path).map_err(|source| AssetError::Io {
                path: path.clone(),
                source,
            }),
            #[cfg(feature = "fetch")]
            Self::Url(url) => fetch(url),
        }
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<Vec<u8>, AssetError> {
    let fail = |err: ureq::Error| AssetError::Fetch {
        url: url.to_owned(),
        message: err.to_string(),
    };
    let mut body = ureq::get(url).call().map_err(fail)?.into_body();
    body.read_to_vec().map_err(fail)
}

/// How to turn an asset's bytes into a bitmap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssetKind {
    /// Decode audio and draw its waveform.
    Waveform(WaveformOptions),
    /// Decode an image.
    Sprite,
}

/// Read and decode one asset. Blocks on I/O; see [`Loader`](crate::Loader) for the
/// background version.
pub fn load(source: &AssetSource, kind: &AssetKind) -> Result<Bitmap, AssetError> {
    let bytes = source.read()?;
    let bitmap = match kind {
        AssetKind::Waveform(options) => waveform_bitmap(&bytes, options)?,
        AssetKind::Sprite => decode_sprite(&bytes)?,
    };
    info!(
        source = %source.describe(),
        width = bitmap.asset().width(),
        height = bitmap.asset().height(),
        "asset loaded"
    );
    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let source = AssetSource::Path(PathBuf::from("/nonexistent/trimline/asset.wav"));
        let err = load(&source, &AssetKind::Sprite).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }), "{err}");
        assert!(err.to_string().contains("asset.wav"));
    }

    #[test]
    fn describe_names_the_source() {
        assert_eq!(AssetSource::Bytes(vec![0; 4]).describe(), "4 bytes");
        assert_eq!(
            AssetSource::Path(PathBuf::from("kick.wav")).describe(),
            "kick.wav"
        );
    }
}
