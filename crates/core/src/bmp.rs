//! Uncompressed 32-bit BMP encoding.
//!
//! Emits the classic 14-byte file header plus 40-byte `BITMAPINFOHEADER`,
//! followed by raw `0x00RRGGBB` pixels. BMP stores scanlines bottom-up,
//! which is exactly how [`PixelGrid`] is laid out, so the pixel buffer is
//! emitted without any flip.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::PixelGrid;

/// `"BM"` little-endian.
pub const FILE_TYPE: u16 = 0x4D42;
/// Offset of the pixel array: 14-byte file header + 40-byte info header.
pub const PIXEL_DATA_OFFSET: u32 = 54;
/// `BITMAPINFOHEADER` size field.
pub const INFO_HEADER_BYTES: u32 = 40;

const BITS_PER_PIXEL: u16 = 32;

/// Encode a pixel grid as a complete BMP byte stream.
pub fn encode(grid: &PixelGrid) -> Vec<u8> {
    let pixel_bytes = grid.width * grid.height * 4;
    let file_size = PIXEL_DATA_OFFSET + pixel_bytes;

    let mut out = Vec::with_capacity(file_size as usize);

    // File header.
    out.extend_from_slice(&FILE_TYPE.to_le_bytes());
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved 1
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved 2
    out.extend_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());

    // Info header.
    out.extend_from_slice(&INFO_HEADER_BYTES.to_le_bytes());
    out.extend_from_slice(&(grid.width as i32).to_le_bytes());
    out.extend_from_slice(&(grid.height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&0u32.to_le_bytes()); // image size (unspecified)
    out.extend_from_slice(&0i32.to_le_bytes()); // x pixels per meter
    out.extend_from_slice(&0i32.to_le_bytes()); // y pixels per meter
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    for &px in &grid.pixels {
        out.extend_from_slice(&px.to_le_bytes());
    }

    out
}

/// Create (or overwrite) `path` with the BMP encoding of `grid`.
pub fn write<P: AsRef<Path>>(path: P, grid: &PixelGrid) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    w.write_all(&encode(grid))?;
    w.flush()
}
