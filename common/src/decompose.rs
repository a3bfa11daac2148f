//! Greedy maximal-rectangle decomposition of a binary grid.
//!
//! Each call repeatedly finds the largest rectangle of unclaimed
//! foreground cells and removes it, until no foreground remains. The
//! returned rectangles are pairwise disjoint and their union is exactly
//! the grid's foreground.
//!
//! Selection is fully deterministic: anchors are scanned column-major
//! (outer `x`, inner `y`) and all comparisons are strict, so among
//! equal-area candidates the earliest anchor wins, and at a single
//! anchor the shortest (hence widest) shape wins.

use crate::grid::PixelGrid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An axis-aligned rectangle: top-left corner plus extent.
///
/// Always `w >= 1` and `h >= 1`, fully inside the grid it was selected
/// from. Serializes as the `[x, y, w, h]` 4-tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }
}

impl Serialize for Rect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y, self.w, self.h).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (x, y, w, h) = <(u32, u32, u32, u32)>::deserialize(deserializer)?;
        Ok(Rect { x, y, w, h })
    }
}

/// Visited cells: background already scanned, or claimed by a selected
/// rectangle. Lives only for one `decompose` call.
struct Mask {
    width: usize,
    cells: Vec<bool>,
}

impl Mask {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            cells: vec![false; width * height],
        }
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    #[inline]
    fn set(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x] = true;
    }

    fn claim(&mut self, rect: Rect) {
        for y in rect.y..rect.y + rect.h {
            for x in rect.x..rect.x + rect.w {
                self.set(x as usize, y as usize);
            }
        }
    }
}

/// Decomposes a grid into an ordered list of disjoint rectangles whose
/// union is exactly the foreground.
pub fn decompose(grid: &PixelGrid) -> Vec<Rect> {
    let (width, height) = (grid.width(), grid.height());
    let mut visited = Mask::new(width, height);
    let mut boxes = Vec::new();

    loop {
        let mut best: Option<Rect> = None;

        for x in 0..width {
            for y in 0..height {
                if visited.get(x, y) {
                    continue;
                }
                if !grid.get(x, y) {
                    // Background is consumed cell by cell, never boxed.
                    visited.set(x, y);
                    continue;
                }

                let candidate = grow_anchor(grid, &visited, x, y);
                let improves = match best {
                    Some(rect) => candidate.area() > rect.area(),
                    None => true,
                };
                if improves {
                    best = Some(candidate);
                }
            }
        }

        // No anchor found means the foreground is exhausted.
        let Some(rect) = best else { break };
        visited.claim(rect);
        boxes.push(rect);
    }

    boxes
}

/// Best rectangle whose top-left corner is exactly `(x, y)`.
///
/// Rows are added downward one at a time; `widest` is the running cap on
/// usable width and can only shrink, which bounds the search. Strict
/// area comparison keeps the first (shortest) shape on ties.
fn grow_anchor(grid: &PixelGrid, visited: &Mask, x: usize, y: usize) -> Rect {
    let mut widest = grid.width() - x;
    let mut best_w = 0;
    let mut best_h = 0;

    for h_off in 0..grid.height() - y {
        let row = y + h_off;
        let mut run = 0;
        while run < widest {
            let cx = x + run;
            if visited.get(cx, row) || !grid.get(cx, row) {
                break;
            }
            run += 1;
        }

        widest = widest.min(run);
        if widest == 0 {
            break;
        }
        if widest * (h_off + 1) > best_w * best_h {
            best_w = widest;
            best_h = h_off + 1;
        }
    }

    // The anchor cell itself is unvisited foreground, so the first row
    // always yields at least a 1x1 rectangle.
    Rect {
        x: x as u32,
        y: y as u32,
        w: best_w as u32,
        h: best_h as u32,
    }
}
