//! End-to-end checks over decomposition plus the byte codec.

use cubist_common::{BoxStream, PixelGrid, decode_stream, decompose, encode_stream};

/// Binarized frames of a tiny synthetic clip: a 2x2 block sliding one
/// column per frame across a 6x4 grid.
fn sliding_block_frames() -> Vec<PixelGrid> {
    (0..4)
        .map(|offset| {
            PixelGrid::from_fn(6, 4, move |x, y| {
                (offset..offset + 2).contains(&x) && (1..3).contains(&y)
            })
        })
        .collect()
}

#[test]
fn clip_survives_encode_decode() {
    let stream: BoxStream = sliding_block_frames().iter().map(decompose).collect();
    assert_eq!(stream.len(), 4);
    for boxes in &stream {
        assert_eq!(boxes.len(), 1);
        assert_eq!((boxes[0].w, boxes[0].h), (2, 2));
    }

    let bytes = encode_stream(&stream).unwrap();
    // 1 rect + 1 sentinel per frame.
    assert_eq!(bytes.len(), 4 * 8);
    assert_eq!(decode_stream(&bytes).unwrap(), stream);
}

#[test]
fn all_dark_clip_encodes_to_bare_sentinels() {
    let stream: BoxStream = (0..3).map(|_| decompose(&PixelGrid::new(5, 5))).collect();
    let bytes = encode_stream(&stream).unwrap();
    assert_eq!(bytes, [0; 12]);
    assert_eq!(decode_stream(&bytes).unwrap(), vec![vec![]; 3]);
}

#[test]
fn grid_wider_than_a_byte_cannot_be_encoded() {
    let grid = PixelGrid::from_fn(300, 1, |_, _| true);
    let stream = vec![decompose(&grid)];
    assert!(encode_stream(&stream).is_err());
}
