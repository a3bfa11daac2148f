//! Byte layout of the box stream.
//!
//! Every rectangle is four unsigned bytes `x, y, w, h`; every frame ends
//! with the `0,0,0,0` sentinel quadruple. There is no header and no
//! frame count — a reader splits on sentinels until end of stream.
//!
//! A real rectangle always has `w >= 1` and `h >= 1`, so the sentinel
//! cannot collide with data. The decoder still checks this explicitly
//! instead of assuming it.

use crate::decompose::Rect;
use thiserror::Error;

/// Marks the end of one frame's rectangles.
pub const FRAME_SENTINEL: [u8; 4] = [0, 0, 0, 0];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A coordinate or extent does not fit in one byte. Never wrapped
    /// or truncated.
    #[error("frame {frame}: rectangle {field} = {value} does not fit in one byte")]
    FieldOutOfRange {
        frame: usize,
        field: &'static str,
        value: u32,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Stream length is not a multiple of four bytes.
    #[error("stream length {len} is not a whole number of quadruples")]
    Truncated { len: usize },

    /// A non-sentinel quadruple with a zero extent; only the sentinel
    /// may carry `w = 0` or `h = 0`.
    #[error("byte offset {offset}: rectangle with zero extent")]
    ZeroExtent { offset: usize },

    /// The stream ended inside a frame, without a closing sentinel.
    #[error("stream ended without a frame terminator")]
    MissingTerminator,
}

/// Serializes a box stream: four bytes per rectangle, sentinel per
/// frame, frames in order.
pub fn encode_stream(frames: &[Vec<Rect>]) -> Result<Vec<u8>, EncodeError> {
    let total: usize = frames.iter().map(|f| f.len() + 1).sum();
    let mut out = Vec::with_capacity(total * 4);

    for (frame, boxes) in frames.iter().enumerate() {
        for rect in boxes {
            for (field, value) in [
                ("x", rect.x),
                ("y", rect.y),
                ("w", rect.w),
                ("h", rect.h),
            ] {
                let byte = u8::try_from(value)
                    .map_err(|_| EncodeError::FieldOutOfRange { frame, field, value })?;
                out.push(byte);
            }
        }
        out.extend_from_slice(&FRAME_SENTINEL);
    }

    Ok(out)
}

/// Reassembles a box stream from its byte form, validating framing.
pub fn decode_stream(bytes: &[u8]) -> Result<Vec<Vec<Rect>>, DecodeError> {
    if bytes.len() % 4 != 0 {
        return Err(DecodeError::Truncated { len: bytes.len() });
    }

    let mut frames = Vec::new();
    let mut current = Vec::new();
    let mut open = false;

    for (idx, quad) in bytes.chunks_exact(4).enumerate() {
        if quad == FRAME_SENTINEL {
            frames.push(std::mem::take(&mut current));
            open = false;
            continue;
        }

        let [x, y, w, h] = [quad[0], quad[1], quad[2], quad[3]];
        if w == 0 || h == 0 {
            return Err(DecodeError::ZeroExtent { offset: idx * 4 });
        }
        current.push(Rect {
            x: u32::from(x),
            y: u32::from(y),
            w: u32::from(w),
            h: u32::from(h),
        });
        open = true;
    }

    if open {
        return Err(DecodeError::MissingTerminator);
    }
    Ok(frames)
}
