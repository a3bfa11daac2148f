#[macro_use]
extern crate tracing;

use anyhow::{Context, ensure};
use cubist_common::{BoxStream, decompose, encode_stream};
use itertools::Itertools;
use std::{
    fs,
    path::{Path, PathBuf},
};

mod cache;
mod frame;
mod viz;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// The box stream encodes every field as one byte.
const MAX_GRID_EXTENT: usize = 255;

#[derive(argh::FromArgs)]
/// decompose a directory of frames into a box stream
struct Args {
    #[argh(positional)]
    /// path to the directory with frame image files
    path: PathBuf,

    #[argh(option, default = "PathBuf::from(\"boxes.bin\")")]
    /// path to the binary output file
    output: PathBuf,

    #[argh(option, default = "PathBuf::from(\"boxes.json\")")]
    /// path to the human-readable cache; reused when present
    cache: PathBuf,

    #[argh(option, default = "64")]
    /// width frames are shrunk to before decomposition
    max_width: u32,

    #[argh(option, default = "102")]
    /// brightness cutoff; luma above this is foreground
    threshold: u8,

    #[argh(option)]
    /// directory for per-frame visualisation rasters
    viz: Option<PathBuf>,
}

fn frame_paths(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("opening frame directory {}", dir.display()))?
        .map_ok(|entry| entry.path())
        .try_collect()?;
    frame::sort_frame_paths(&mut paths);
    Ok(paths)
}

fn process_frames(args: &Args) -> anyhow::Result<BoxStream> {
    let paths = frame_paths(&args.path)?;
    info!(frames = paths.len(), "decomposing frames");

    if let Some(viz_dir) = &args.viz {
        fs::create_dir_all(viz_dir)
            .with_context(|| format!("creating viz directory {}", viz_dir.display()))?;
    }

    let mut stream = BoxStream::new();
    for (idx, path) in paths.iter().enumerate() {
        let image = image::open(path)
            .with_context(|| format!("opening frame {}", path.display()))?;
        let grid = frame::binarize(&image, args.max_width, args.threshold);
        ensure!(
            grid.width() <= MAX_GRID_EXTENT && grid.height() <= MAX_GRID_EXTENT,
            "frame {}: {}x{} grid exceeds the encodable range",
            path.display(),
            grid.width(),
            grid.height(),
        );

        let boxes = decompose(&grid);
        debug!(frame = idx, boxes = boxes.len(), "frame decomposed");

        if let Some(viz_dir) = &args.viz {
            let out = viz_dir.join(format!("{idx}.png"));
            viz::render(&grid, &boxes)
                .save(&out)
                .with_context(|| format!("writing visualisation {}", out.display()))?;
        }

        stream.push(boxes);
    }

    Ok(stream)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let stream = match cache::load(&args.cache)? {
        Some(stream) => {
            info!(
                frames = stream.len(),
                cache = %args.cache.display(),
                "cache present, skipping frame processing",
            );
            stream
        }
        None => {
            let stream = process_frames(&args)?;
            // A failed cache write costs only the next run's shortcut.
            if let Err(error) = cache::store(&args.cache, &stream) {
                warn!(?error, "failed to write cache");
            }
            stream
        }
    };

    let encoded = encode_stream(&stream).context("encoding box stream")?;
    fs::write(&args.output, &encoded)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(
        frames = stream.len(),
        bytes = encoded.len(),
        output = %args.output.display(),
        "box stream written",
    );

    Ok(())
}
