// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trimline Assets: the bitmaps Trimline regions display.
//!
//! Two kinds of asset are supported:
//!
//! - **Waveforms.** A WAV file is decoded with [`hound`], its first channel is point
//!   sampled into a fixed number of bars and normalized by the peak magnitude, and the
//!   bars are drawn one pixel wide onto a transparent bitmap. See [`WaveformOptions`].
//! - **Sprites.** Any format the [`image`] crate can read, used as-is.
//!
//! [`load`] does all the I/O for one [`AssetSource`]. [`Loader`] runs it on a worker
//! thread so the UI thread never blocks on a decode; only the latest request is ever
//! delivered.
//!
//! The `fetch` feature adds [`AssetSource::Url`] backed by `ureq`.
//!
//! ```rust
//! use trimline_assets::{render_bars, summarize};
//!
//! let samples: Vec<f32> = (0..1_000).map(|i| (i as f32 / 50.0).sin()).collect();
//! let levels = summarize(&samples, 100).unwrap();
//! let image = render_bars(&levels, 40);
//! assert_eq!((image.width(), image.height()), (100, 40));
//! ```

mod error;
mod loader;
mod source;
mod sprite;
mod waveform;

pub use error::AssetError;
pub use loader::{Completion, Loader, Ticket};
pub use source::{AssetKind, AssetSource, load};
pub use sprite::{Bitmap, decode_sprite};
pub use waveform::{WaveformOptions, decode_wav, render_bars, summarize, waveform_bitmap};
