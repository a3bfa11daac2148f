//! Frame preprocessing: raster image in, binary pixel grid out.

use cubist_common::PixelGrid;
use image::{DynamicImage, imageops::FilterType};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Reduces a frame to a small binary grid: grayscale, resize to
/// `max_width` columns preserving aspect ratio, then threshold.
///
/// A luma value strictly above `threshold` is foreground.
pub fn binarize(image: &DynamicImage, max_width: u32, threshold: u8) -> PixelGrid {
    let (w, h) = (image.width(), image.height());
    let new_height = (max_width * h / w).max(1);

    let gray = image.to_luma8();
    let small = image::imageops::resize(&gray, max_width, new_height, FilterType::CatmullRom);

    PixelGrid::from_fn(max_width as usize, new_height as usize, |x, y| {
        small.get_pixel(x as u32, y as u32).0[0] > threshold
    })
}

/// Orders frame files by numeric stem when possible, so `2.png` comes
/// before `10.png`. Non-numeric names fall back to lexicographic order
/// after all numeric ones.
pub fn sort_frame_paths(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| match (frame_index(a), frame_index(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}

fn frame_index(path: &Path) -> Option<u64> {
    path.file_stem()?.to_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{binarize, sort_frame_paths};
    use image::DynamicImage;
    use std::path::PathBuf;

    #[test]
    fn threshold_is_strict() {
        // Uniform image at exactly the cutoff stays background.
        let flat = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(8, 8, image::Luma([102])));
        let grid = binarize(&flat, 8, 102);
        assert_eq!(grid.foreground_count(), 0);

        let lit = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(8, 8, image::Luma([103])));
        let grid = binarize(&lit, 8, 102);
        assert_eq!(grid.foreground_count(), 64);
    }

    #[test]
    fn resize_preserves_aspect_ratio() {
        let wide = DynamicImage::new_luma8(640, 360);
        let grid = binarize(&wide, 64, 102);
        assert_eq!(grid.width(), 64);
        assert_eq!(grid.height(), 36);
    }

    #[test]
    fn extreme_aspect_ratio_keeps_one_row() {
        let strip = DynamicImage::new_luma8(1000, 2);
        let grid = binarize(&strip, 64, 102);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn frame_paths_sort_numerically() {
        let mut paths: Vec<PathBuf> = ["10.png", "2.png", "0.png", "cover.png"]
            .iter()
            .map(PathBuf::from)
            .collect();
        sort_frame_paths(&mut paths);
        let names: Vec<_> = paths.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(names, ["0.png", "2.png", "10.png", "cover.png"]);
    }
}
