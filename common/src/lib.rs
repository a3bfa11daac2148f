//! Shared core for cubist: binary pixel grids, the greedy
//! maximal-rectangle decomposer, and the box-stream byte codec.

pub mod codec;
pub mod decompose;
pub mod grid;

pub use codec::{DecodeError, EncodeError, FRAME_SENTINEL, decode_stream, encode_stream};
pub use decompose::{Rect, decompose};
pub use grid::PixelGrid;

/// One frame's rectangles, in selection order.
pub type FrameBoxes = Vec<Rect>;

/// Rectangle lists for every frame of a video, in frame order.
pub type BoxStream = Vec<FrameBoxes>;
