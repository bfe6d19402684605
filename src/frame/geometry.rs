use crate::{
    foundation::{
        core::RasterImage,
        error::{ChromeifyError, ChromeifyResult},
    },
    theme::{Theme, TilePiece},
};

/// Direction an edge run advances in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Tile length along this axis (always >= 1).
    pub fn extent(self, tile: &RasterImage) -> i64 {
        match self {
            Axis::Horizontal => i64::from(tile.width()),
            Axis::Vertical => i64::from(tile.height()),
        }
    }

    /// Canvas position of a point `along` this axis at fixed offset `across` it.
    pub fn point(self, along: i64, across: i64) -> (i64, i64) {
        match self {
            Axis::Horizontal => (along, across),
            Axis::Vertical => (across, along),
        }
    }
}

/// One side of the border: copies of `piece` placed at `start`, `start + step`, ...
/// while the position is below `end`. The last copy may overshoot `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeRun {
    pub piece: TilePiece,
    pub axis: Axis,
    pub start: i64,
    pub end: i64,
    /// Fixed offset perpendicular to `axis`.
    pub cross: i64,
}

impl EdgeRun {
    /// Tile start positions along the axis for tiles of length `step`.
    pub fn offsets(&self, step: i64) -> std::iter::StepBy<std::ops::Range<i64>> {
        let step = usize::try_from(step.max(1)).unwrap_or(1);
        (self.start..self.end).step_by(step)
    }

    /// True when the corners leave no room for this edge (no tiles are drawn).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A single unconditional tile draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub piece: TilePiece,
    pub x: i64,
    pub y: i64,
}

/// Layout of a frame around content of a given size. Pure arithmetic on tile
/// dimensions; no pixels are touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameGeometry {
    pub outer_width: u32,
    pub outer_height: u32,
    pub content_origin: (i64, i64),
    /// Top, bottom, left, right, in draw order.
    pub edges: [EdgeRun; 4],
    /// Top-left, top-right, bottom-left, bottom-right, in draw order.
    pub corners: [Placement; 4],
}

impl FrameGeometry {
    pub fn compute(theme: &Theme, content: &RasterImage) -> ChromeifyResult<Self> {
        let tiles = theme.tiles();
        let overflow = || ChromeifyError::validation("frame dimensions overflow");

        let outer_width = tiles
            .left
            .width()
            .checked_add(content.width())
            .and_then(|w| w.checked_add(tiles.right.width()))
            .ok_or_else(overflow)?;
        let outer_height = tiles
            .top
            .height()
            .checked_add(content.height())
            .and_then(|h| h.checked_add(tiles.bottom.height()))
            .ok_or_else(overflow)?;
        (outer_width as usize)
            .checked_mul(outer_height as usize)
            .and_then(|v| v.checked_mul(4))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(overflow)?;

        let w = i64::from(outer_width);
        let h = i64::from(outer_height);
        let width_of = |img: &RasterImage| i64::from(img.width());
        let height_of = |img: &RasterImage| i64::from(img.height());

        let edges = [
            EdgeRun {
                piece: TilePiece::Top,
                axis: Axis::Horizontal,
                start: width_of(&tiles.top_left),
                end: w - width_of(&tiles.top_right),
                cross: 0,
            },
            EdgeRun {
                piece: TilePiece::Bottom,
                axis: Axis::Horizontal,
                start: width_of(&tiles.bottom_left),
                end: w - width_of(&tiles.bottom_right),
                cross: h - height_of(&tiles.bottom),
            },
            EdgeRun {
                piece: TilePiece::Left,
                axis: Axis::Vertical,
                start: height_of(&tiles.top_left),
                end: h - height_of(&tiles.bottom_left),
                cross: 0,
            },
            EdgeRun {
                piece: TilePiece::Right,
                axis: Axis::Vertical,
                start: height_of(&tiles.top_right),
                end: h - height_of(&tiles.bottom_right),
                cross: w - width_of(&tiles.right),
            },
        ];

        let corners = [
            Placement {
                piece: TilePiece::TopLeft,
                x: 0,
                y: 0,
            },
            Placement {
                piece: TilePiece::TopRight,
                x: w - width_of(&tiles.top_right),
                y: 0,
            },
            Placement {
                piece: TilePiece::BottomLeft,
                x: 0,
                y: h - height_of(&tiles.bottom_left),
            },
            Placement {
                piece: TilePiece::BottomRight,
                x: w - width_of(&tiles.bottom_right),
                y: h - height_of(&tiles.bottom_right),
            },
        ];

        Ok(Self {
            outer_width,
            outer_height,
            content_origin: (width_of(&tiles.left), height_of(&tiles.top)),
            edges,
            corners,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/geometry.rs"]
mod tests;
