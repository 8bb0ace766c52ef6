// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WAV decoding and bar rendering.

use std::io::Cursor;

use hound::SampleFormat;
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::error::AssetError;
use crate::sprite::Bitmap;

const BAR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// How a waveform bitmap is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WaveformOptions {
    /// Number of one pixel wide bars, which is also the bitmap width.
    pub bars: usize,
    /// Bitmap height in pixels.
    pub height: u32,
}

impl Default for WaveformOptions {
    fn default() -> Self {
        Self {
            bars: 500,
            height: 200,
        }
    }
}

/// Decode the first channel of a WAV file into samples in `[-1, 1]`.
pub fn decode_wav(bytes: &[u8]) -> Result<Vec<f32>, AssetError> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));
    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .step_by(channels)
            .collect::<Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let scale = (1_i64 << spec.bits_per_sample.saturating_sub(1)).max(1) as f32;
            reader
                .samples::<i32>()
                .step_by(channels)
                .map(|s| s.map(|value| value as f32 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };
    debug!(
        samples = samples.len(),
        channels = spec.channels,
        rate = spec.sample_rate,
        "wav decoded"
    );
    Ok(samples)
}

/// Reduce `samples` to `bars` levels in `[-1, 1]`.
///
/// Bar `i` takes the sample at `i * floor(len / bars)`; the levels are then divided by
/// their peak magnitude. Silence yields all zeros.
pub fn summarize(samples: &[f32], bars: usize) -> Result<Vec<f32>, AssetError> {
    if bars == 0 || samples.is_empty() {
        return Err(AssetError::Empty);
    }
    if samples.len() < bars {
        return Err(AssetError::TooShort {
            samples: samples.len(),
            bars,
        });
    }
    let block = samples.len() / bars;
    let picked: Vec<f32> = (0..bars).map(|i| samples[i * block]).collect();
    let peak = picked
        .iter()
        .filter(|v| v.is_finite())
        .fold(0.0_f32, |peak, v| peak.max(v.abs()));
    if peak == 0.0 {
        return Ok(vec![0.0; bars]);
    }
    Ok(picked
        .into_iter()
        .map(|v| if v.is_finite() { v / peak } else { 0.0 })
        .collect())
}

/// Draw one bar per level, centred on the horizontal mid line.
///
/// A level `v` gives a bar `(v + 1) * height / 2` pixels tall, so `-1` draws nothing and
/// `1` fills the column.
#[expect(
    clippy::cast_possible_truncation,
    reason = "bar counts and pixel rows fit comfortably in u32"
)]
#[must_use]
pub fn render_bars(levels: &[f32], height: u32) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(levels.len() as u32, height, BACKGROUND);
    let h = f64::from(height);
    for (x, level) in levels.iter().enumerate() {
        let level = f64::from(level.clamp(-1.0, 1.0));
        let bar = (level + 1.0) * h / 2.0;
        let top = ((h - bar) / 2.0).round().max(0.0) as u32;
        let bottom = ((h + bar) / 2.0).round().min(h) as u32;
        for y in top..bottom {
            image.put_pixel(x as u32, y, BAR);
        }
    }
    image
}

/// Decode a WAV file and draw its waveform.
pub fn waveform_bitmap(bytes: &[u8], options: &WaveformOptions) -> Result<Bitmap, AssetError> {
    let samples = decode_wav(bytes)?;
    let levels = summarize(&samples, options.bars)?;
    Bitmap::new(render_bars(&levels, options.height))
}
