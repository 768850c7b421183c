//! Sprite-sheet assembly: a flat CHR tile bank into a square [`PixelGrid`].

use crate::palette;
use crate::tile::{Chr2BppDecoder, TileDecoder, TILE_BYTES, TILE_DIM};
use crate::types::PixelGrid;
use crate::FormatError;

/// Bytes in one CHR bank.
pub const BANK_BYTES: usize = 8192;

/// Bytes per counted sprite: two tiles' worth, one per pattern table.
pub const SPRITE_BYTES: usize = 32;

/// Integer square root, `None` unless `n` is a positive perfect square.
fn exact_sqrt(n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let r = (n as f64).sqrt().round() as usize;
    (r * r == n).then_some(r)
}

/// Side length of the square sheet, in tiles, for a bank of `sprites`
/// 32-byte sprites.
///
/// The sheet holds `side * side` tiles where `side * side == sprites / 2`.
/// A full 8 KiB bank (256 sprites) does not satisfy that relation; it
/// carries two 4 KiB pattern tables, and the sheet renders the first one:
/// `side * side == sprites`, giving the known-good 128x128 output for a
/// one-bank ROM.
fn tiles_per_side(sprites: usize) -> Result<usize, FormatError> {
    exact_sqrt(sprites / 2)
        .or_else(|| exact_sqrt(sprites))
        .ok_or(FormatError::NonSquareTileArrangement(sprites))
}

/// Decode a CHR tile bank into a square sprite sheet.
///
/// The bank is a read-only run of consecutive 16-byte tiles in row-major
/// tile order. The output grid is written in BMP storage order (bottom
/// scanline first) with the tile columns mirrored, so the rightmost
/// source tile of each tile row lands in the leftmost output column.
///
/// Fails with a [`FormatError`] if the buffer is empty, longer than one
/// bank, not sprite-aligned, or not arrangeable as a square sheet. Never
/// reads out of bounds and produces no partial grid on error.
pub fn decode(tile_bank: &[u8]) -> Result<PixelGrid, FormatError> {
    let len = tile_bank.len();
    if len == 0 {
        return Err(FormatError::InvalidBankCount(0));
    }
    if len > BANK_BYTES {
        return Err(FormatError::InvalidBankCount(len.div_ceil(BANK_BYTES)));
    }
    if len % SPRITE_BYTES != 0 {
        return Err(FormatError::MisalignedBufferSize(len));
    }

    let sprites = len / SPRITE_BYTES;
    let side_tiles = tiles_per_side(sprites)?;
    let side_px = side_tiles * TILE_DIM;
    let row_stride = side_tiles * TILE_BYTES;

    let decoder = Chr2BppDecoder;
    let mut grid = PixelGrid::new(side_px as u32, side_px as u32);

    for tile_y in 0..side_tiles {
        // Mirrored so the sheet comes out with the correct orientation.
        for tile_x in (0..side_tiles).rev() {
            let offset = tile_y * row_stride + tile_x * TILE_BYTES;
            let tile = &tile_bank[offset..offset + TILE_BYTES];
            let out_x = (side_tiles - 1 - tile_x) * TILE_DIM;

            for row in 0..TILE_DIM {
                // BMP stores scanlines bottom-up.
                let y = side_px - (tile_y * TILE_DIM + row) - 1;
                let line = y * side_px + out_x;
                for col in 0..TILE_DIM {
                    let intensity = decoder.decode_pixel(tile, col as u8, row as u8);
                    grid.pixels[line + col] = palette::color(intensity);
                }
            }
        }
    }

    Ok(grid)
}
