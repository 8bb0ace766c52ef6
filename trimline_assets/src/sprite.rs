// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoded sprite images.

use std::fmt;

use image::RgbaImage;
use trimline_region::Asset;

use crate::error::AssetError;

/// Decoded pixels plus the geometry the region engine needs.
#[derive(Clone)]
pub struct Bitmap {
    pixels: RgbaImage,
    asset: Asset,
}

impl Bitmap {
    /// Wrap decoded pixels. Fails with [`AssetError::Empty`] if either dimension is zero.
    pub fn new(pixels: RgbaImage) -> Result<Self, AssetError> {
        let asset = Asset::new(f64::from(pixels.width()), f64::from(pixels.height()))
            .map_err(|_| AssetError::Empty)?;
        Ok(Self { pixels, asset })
    }

    /// Natural size of the bitmap.
    #[must_use]
    pub fn asset(&self) -> Asset {
        self.asset
    }

    /// The pixels.
    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Take the pixels.
    #[must_use]
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.pixels.width())
            .field("height", &self.pixels.height())
            .finish_non_exhaustive()
    }
}

/// Decode any image format the image crate supports.
pub fn decode_sprite(bytes: &[u8]) -> Result<Bitmap, AssetError> {
    let pixels = image::load_from_memory(bytes)?.to_rgba8();
    Bitmap::new(pixels)
}
