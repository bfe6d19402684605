//! Fixtures shared by unit tests.

use crate::{
    foundation::core::{RasterImage, Rgba8},
    theme::{Theme, TilePiece, TileSet},
};

/// Opaque tile whose pixels encode the piece and the position inside the tile,
/// so a misplaced or partially overwritten tile is detectable.
pub(crate) fn patterned_tile(piece: TilePiece, width: u32, height: u32) -> RasterImage {
    let id = TilePiece::ALL.iter().position(|p| *p == piece).unwrap() as u8;
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([
            30 + id * 25,
            (x * 13 % 251) as u8,
            (y * 17 % 251) as u8,
            255,
        ])
    });
    RasterImage::new(img).unwrap()
}

/// Opaque content filled with a color no tile uses.
pub(crate) fn content(width: u32, height: u32) -> RasterImage {
    RasterImage::solid(width, height, Rgba8::new(1, 2, 3, 255)).unwrap()
}

/// A dimensionally consistent theme: each corner is exactly as wide as its
/// vertical edge and as tall as its horizontal edge. Edge tiles have lengths
/// that rarely divide content sizes evenly.
pub(crate) fn consistent_theme() -> Theme {
    let (left_w, right_w, top_h, bottom_h) = (3, 4, 5, 2);
    let tiles = TileSet::try_from_fn(|piece| -> Result<RasterImage, ()> {
        let (w, h) = match piece {
            TilePiece::TopLeft => (left_w, top_h),
            TilePiece::TopRight => (right_w, top_h),
            TilePiece::BottomLeft => (left_w, bottom_h),
            TilePiece::BottomRight => (right_w, bottom_h),
            TilePiece::Top => (7, top_h),
            TilePiece::Bottom => (6, bottom_h),
            TilePiece::Left => (left_w, 4),
            TilePiece::Right => (right_w, 3),
        };
        Ok(patterned_tile(piece, w, h))
    })
    .unwrap();
    Theme::from_images("consistent", tiles)
}

pub(crate) fn png_bytes(img: &RasterImage) -> Vec<u8> {
    crate::assets::decode::encode_png(img).unwrap()
}

/// Copy of `img` restricted to the given rectangle.
pub(crate) fn region(img: &RasterImage, x: u32, y: u32, w: u32, h: u32) -> image::RgbaImage {
    image::imageops::crop_imm(img.as_rgba8(), x, y, w, h).to_image()
}
