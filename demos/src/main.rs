// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load a waveform or sprite into a headless Trimline editor and replay scripted drags.
//!
//! ```text
//! trimline_demo --wav kick.wav --drag 300,40:200,40 --drag 100,100:100,330
//! ```
//!
//! Each `--drag` presses at the first point, moves to the second in small steps and
//! releases. The final geometry of every region is printed once all drags ran.

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use kurbo::Point;
use tracing::{info, warn};
use trimline_assets::{AssetKind, AssetSource, Loader};
use trimline_editor::{Editor, EditorConfig, EditorError};
use trimline_scene::{NodeId, Scene};

/// Steps each scripted drag is split into.
const DRAG_STEPS: u32 = 12;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// WAV file to show as a waveform.
    #[arg(long, conflicts_with_all = ["image", "url"])]
    wav: Option<PathBuf>,
    /// Image file to show as a sprite.
    #[arg(long, conflicts_with = "url")]
    image: Option<PathBuf>,
    /// URL of an asset to fetch.
    #[arg(long)]
    url: Option<String>,
    /// How to decode `--url`; guessed from the URL's extension when omitted.
    #[arg(long, value_enum, requires = "url")]
    url_kind: Option<UrlKind>,
    /// Surface width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// Surface height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// A drag to replay, as `x0,y0:x1,y1`. May be repeated.
    #[arg(long = "drag")]
    drags: Vec<Drag>,
    /// Debug logging unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum UrlKind {
    Waveform,
    Sprite,
}

impl UrlKind {
    /// `.wav` URLs are waveforms, anything else is treated as an image.
    fn guess(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let is_wav = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
        if is_wav { Self::Waveform } else { Self::Sprite }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Drag {
    from: Point,
    to: Point,
}

impl FromStr for Drag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let point = |p: &str| -> Result<Point, String> {
            let (x, y) = p
                .split_once(',')
                .ok_or_else(|| format!("expected x,y, got {p:?}"))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|err| format!("bad coordinate {v:?}: {err}"))
            };
            Ok(Point::new(parse(x)?, parse(y)?))
        };
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("expected x0,y0:x1,y1, got {s:?}"))?;
        Ok(Self {
            from: point(from)?,
            to: point(to)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
    #[error("failed to read {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings in {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Editor(#[from] EditorError),
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig, DemoError> {
    let Some(path) = path else {
        return Ok(EditorConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| DemoError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

fn source(args: &Args, config: &EditorConfig) -> Option<(AssetSource, AssetKind)> {
    let waveform = AssetKind::Waveform(config.waveform);
    if let Some(path) = &args.wav {
        Some((AssetSource::Path(path.clone()), waveform))
    } else if let Some(path) = &args.image {
        Some((AssetSource::Path(path.clone()), AssetKind::Sprite))
    } else {
        args.url.as_ref().map(|url| {
            let kind = match args.url_kind.unwrap_or_else(|| UrlKind::guess(url)) {
                UrlKind::Waveform => waveform,
                UrlKind::Sprite => AssetKind::Sprite,
            };
            (AssetSource::Url(url.clone()), kind)
        })
    }
}

fn replay(scene: &mut Scene, editor: &mut Editor<NodeId>, drag: Drag) {
    let Some((region, part)) = editor.pointer_down(scene, drag.from) else {
        warn!(at = ?drag.from, "nothing to drag");
        return;
    };
    let mut last = None;
    for step in 1..=DRAG_STEPS {
        let t = f64::from(step) / f64::from(DRAG_STEPS);
        last = editor.pointer_move(scene, drag.from.lerp(drag.to, t));
        scene.flush();
    }
    editor.pointer_up(scene);
    scene.flush();
    info!(
        region = region.index(),
        ?part,
        corrected = ?last,
        "drag replayed"
    );
}

fn run(args: &Args) -> Result<(), DemoError> {
    let config = load_config(args.config.as_deref())?;
    let mut scene = Scene::new(args.width, args.height);
    let mut editor = Editor::new(&mut scene, config)?;

    if let Some((source, kind)) = source(args, editor.config()) {
        let mut loader = Loader::new().map_err(EditorError::from)?;
        editor.request_load(&mut loader, source, kind)?;
        info!(status = %editor.status(), "waiting for asset");
        if let Some(Err(err)) = editor.wait_loader(&mut scene, &mut loader) {
            warn!(%err, "continuing without the asset");
        }
    }
    scene.flush();

    for drag in &args.drags {
        replay(&mut scene, &mut editor, *drag);
    }

    println!("status: {}", editor.status());
    for (index, controller) in editor.regions().iter().enumerate() {
        let region = controller.region();
        let clip = region.clip();
        println!(
            "region {index}: at ({}, {}), {} x {}, showing {}..{} of {}",
            region.position().x,
            region.position().y,
            region.size().width,
            region.size().height,
            clip.offset_x(),
            clip.right_edge(),
            clip.asset().width(),
        );
    }
    let stats = scene.stats();
    println!(
        "frames: {} ({} immediate, {} batched requests)",
        stats.frames, stats.immediate_requests, stats.batched_requests
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let result = logging::init(args.verbose)
        .map_err(DemoError::from)
        .and_then(|()| run(&args));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
