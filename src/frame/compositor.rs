use image::{RgbaImage, imageops};
use tracing::debug;

use crate::{
    foundation::{
        core::{RasterImage, Rgba8},
        error::ChromeifyResult,
    },
    frame::geometry::{EdgeRun, FrameGeometry},
    theme::Theme,
};

/// Composite `content` inside the theme's border.
///
/// Draw order decides overlaps: content first, then the four edge runs, then
/// the four corners, so a corner always wins over an overshooting edge tile.
/// Pixels nobody draws stay fully transparent.
#[tracing::instrument(
    skip_all,
    fields(theme = theme.name(), content_w = content.width(), content_h = content.height())
)]
pub fn decorate(theme: &Theme, content: &RasterImage) -> ChromeifyResult<RasterImage> {
    compose(theme, content, None)
}

/// Like [`decorate`], but the canvas starts out filled with `fill` so that any
/// pixel left unwritten by the theme shows up.
pub fn decorate_with_gap_fill(
    theme: &Theme,
    content: &RasterImage,
    fill: Rgba8,
) -> ChromeifyResult<RasterImage> {
    compose(theme, content, Some(fill))
}

fn compose(
    theme: &Theme,
    content: &RasterImage,
    fill: Option<Rgba8>,
) -> ChromeifyResult<RasterImage> {
    let geometry = FrameGeometry::compute(theme, content)?;
    let (width, height) = (geometry.outer_width, geometry.outer_height);

    let mut canvas = match fill {
        Some(color) => RgbaImage::from_pixel(width, height, color.to_pixel()),
        None => RgbaImage::new(width, height),
    };

    let (cx, cy) = geometry.content_origin;
    place(&mut canvas, content, cx, cy);

    for run in &geometry.edges {
        let drawn = tile_edge(&mut canvas, theme.piece(run.piece), run);
        debug!(piece = %run.piece, start = run.start, end = run.end, drawn, "edge run");
    }

    for corner in &geometry.corners {
        place(&mut canvas, theme.piece(corner.piece), corner.x, corner.y);
    }

    RasterImage::new(canvas)
}

/// Copy `tile` onto the canvas at `(x, y)`, replacing pixels. Anything outside
/// the canvas is clipped.
fn place(canvas: &mut RgbaImage, tile: &RasterImage, x: i64, y: i64) {
    imageops::replace(canvas, tile.as_rgba8(), x, y);
}

fn tile_edge(canvas: &mut RgbaImage, tile: &RasterImage, run: &EdgeRun) -> usize {
    let mut drawn = 0;
    for along in run.offsets(run.axis.extent(tile)) {
        let (x, y) = run.axis.point(along, run.cross);
        place(canvas, tile, x, y);
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/frame/compositor.rs"]
mod tests;
