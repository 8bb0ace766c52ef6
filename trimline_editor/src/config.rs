// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor settings.

use kurbo::{Point, Vec2};
use trimline_assets::WaveformOptions;
use trimline_region::{ConfigurationError, HANDLE_WIDTH, Limits, MIN_ANCHOR_GAP, RowRounding};

/// Editor settings.
///
/// The defaults reproduce the stock editor: 10 px handles, a 20 px anchor gap, 200 px
/// rows snapped with [`RowRounding::Floor`], 500 × 200 waveforms, sprites opened with a
/// 300 px window, and new regions placed from (10, 10) stepping 50 px to the right.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Side of each handle's square hit box.
    pub handle_width: f64,
    /// Minimum distance between the two handle origins.
    pub min_anchor_gap: f64,
    /// Height of a snap row; `None` disables snapping.
    pub row_height: Option<f64>,
    /// How a dragged region picks its row.
    pub row_rounding: RowRounding,
    /// How waveforms are drawn.
    pub waveform: WaveformOptions,
    /// Initial visible width of a sprite; `None` shows the whole image.
    pub sprite_clip_width: Option<f64>,
    /// Where the first region is placed.
    pub spawn_x: f64,
    /// Where the first region is placed.
    pub spawn_y: f64,
    /// Horizontal distance between consecutively added regions.
    pub spawn_step: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_width: HANDLE_WIDTH,
            min_anchor_gap: MIN_ANCHOR_GAP,
            row_height: Some(200.0),
            row_rounding: RowRounding::Floor,
            waveform: WaveformOptions::default(),
            sprite_clip_width: Some(300.0),
            spawn_x: 10.0,
            spawn_y: 10.0,
            spawn_step: 50.0,
        }
    }
}

impl EditorConfig {
    /// Handle dimensions as the region engine takes them.
    #[must_use]
    pub fn limits(&self) -> Limits {
        Limits {
            handle_width: self.handle_width,
            min_anchor_gap: self.min_anchor_gap,
        }
    }

    /// Position of the `index`th region added.
    #[must_use]
    pub fn spawn_position(&self, index: usize) -> Point {
        let step = Vec2::new(self.spawn_step, 0.0) * index as f64;
        Point::new(self.spawn_x, self.spawn_y) + step
    }

    /// Reject settings that could never produce valid geometry.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let limits = self.limits();
        limits.validate()?;
        if let Some(row_height) = self.row_height {
            if !row_height.is_finite() || row_height <= 0.0 {
                return Err(ConfigurationError::InvalidRowHeight(row_height));
            }
        }
        if let Some(width) = self.sprite_clip_width {
            if !width.is_finite() || width < limits.min_region_width() {
                return Err(ConfigurationError::InvalidClip {
                    offset_x: 0.0,
                    width,
                    min_width: limits.min_region_width(),
                    asset_width: width,
                });
            }
        }
        if self.waveform.bars == 0 || self.waveform.height == 0 {
            return Err(ConfigurationError::InvalidAsset {
                width: self.waveform.bars as f64,
                height: f64::from(self.waveform.height),
            });
        }
        Ok(())
    }
}
