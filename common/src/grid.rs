/// A binary raster with top-left origin. `true` is foreground.
///
/// Cells are stored row-major in a flat buffer; width and height are
/// fixed at construction and must both be at least 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl PixelGrid {
    /// All-background grid. Panics on a zero dimension.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1, "grid dimensions must be >= 1");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Builds a grid by sampling `f(x, y)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut grid = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.cells[y * width + x] = f(x, y);
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.cells[y * self.width + x] = value;
    }

    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
