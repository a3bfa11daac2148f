//! The `boxes.json` cache: a human-readable mirror of the box stream,
//! one outer list per frame, one `[x, y, w, h]` entry per rectangle.
//! Used to skip re-decomposition on repeated runs.

use anyhow::Context;
use cubist_common::BoxStream;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Loads a previously cached box stream. `Ok(None)` when no cache file
/// exists; a present but malformed cache is a hard error.
pub fn load(path: &Path) -> anyhow::Result<Option<BoxStream>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => {
            return Err(error).with_context(|| format!("opening cache {}", path.display()));
        }
    };

    let stream = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("malformed cache {}", path.display()))?;
    Ok(Some(stream))
}

pub fn store(path: &Path, stream: &BoxStream) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("creating cache {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), stream)
        .with_context(|| format!("writing cache {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use cubist_common::{BoxStream, Rect};

    #[test]
    fn cache_format_is_list_of_list_of_tuples() {
        let stream: BoxStream = vec![
            vec![Rect { x: 0, y: 0, w: 2, h: 1 }, Rect { x: 3, y: 0, w: 1, h: 1 }],
            vec![],
        ];
        let json = serde_json::to_string(&stream).unwrap();
        assert_eq!(json, "[[[0,0,2,1],[3,0,1,1]],[]]");

        let back: BoxStream = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stream);
    }

    #[test]
    fn malformed_cache_fails_to_parse() {
        assert!(serde_json::from_str::<BoxStream>("[[[1,2,3]]]").is_err());
        assert!(serde_json::from_str::<BoxStream>("{\"frames\":[]}").is_err());
    }
}
