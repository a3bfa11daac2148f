//! Diagnostic rendering: the binarized frame with every selected
//! rectangle filled from a repeating palette, in selection order.

use cubist_common::{PixelGrid, Rect};
use image::{Rgb, RgbImage};

const PALETTE: [Rgb<u8>; 15] = [
    Rgb([255, 0, 0]),     // red
    Rgb([0, 128, 0]),     // green
    Rgb([0, 0, 255]),     // blue
    Rgb([255, 165, 0]),   // orange
    Rgb([255, 255, 0]),   // yellow
    Rgb([128, 0, 128]),   // purple
    Rgb([255, 192, 203]), // pink
    Rgb([0, 255, 255]),   // cyan
    Rgb([128, 128, 128]), // gray
    Rgb([165, 42, 42]),   // brown
    Rgb([128, 0, 0]),     // maroon
    Rgb([255, 105, 180]), // hotpink
    Rgb([255, 215, 0]),   // gold
    Rgb([210, 105, 30]),  // chocolate
    Rgb([0, 128, 0]),     // green again, the original palette repeats it
];

pub fn palette_color(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}

/// Renders the grid (white foreground on black) and paints each box
/// with its palette color.
pub fn render(grid: &PixelGrid, boxes: &[Rect]) -> RgbImage {
    let mut image = RgbImage::from_fn(grid.width() as u32, grid.height() as u32, |x, y| {
        if grid.get(x as usize, y as usize) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });

    for (idx, rect) in boxes.iter().enumerate() {
        let fill = palette_color(idx);
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                image.put_pixel(x, y, fill);
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::{palette_color, render};
    use cubist_common::{PixelGrid, Rect, decompose};
    use image::Rgb;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), palette_color(15));
        assert_eq!(palette_color(3), palette_color(18));
    }

    #[test]
    fn boxes_paint_over_foreground_in_selection_order() {
        let grid = PixelGrid::from_fn(4, 2, |x, _| x < 2);
        let boxes = decompose(&grid);
        assert_eq!(boxes, vec![Rect { x: 0, y: 0, w: 2, h: 2 }]);

        let image = render(&grid, &boxes);
        assert_eq!(*image.get_pixel(0, 0), palette_color(0));
        assert_eq!(*image.get_pixel(1, 1), palette_color(0));
        assert_eq!(*image.get_pixel(2, 0), Rgb([0, 0, 0]));
    }
}
