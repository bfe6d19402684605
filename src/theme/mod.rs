//! Frame themes: eight tile pieces that together draw a browser-window border.

use std::{fmt, path::Path};

use tracing::debug;

use crate::{
    assets::{bundled, decode::decode_image},
    foundation::{
        core::RasterImage,
        error::{ChromeifyError, ChromeifyResult},
    },
};

/// One of the eight tiles of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TilePiece {
    TopLeft,
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl TilePiece {
    pub const ALL: [TilePiece; 8] = [
        TilePiece::TopLeft,
        TilePiece::Top,
        TilePiece::TopRight,
        TilePiece::Left,
        TilePiece::Right,
        TilePiece::BottomLeft,
        TilePiece::Bottom,
        TilePiece::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TilePiece::TopLeft => "top_left",
            TilePiece::Top => "top",
            TilePiece::TopRight => "top_right",
            TilePiece::Left => "left",
            TilePiece::Right => "right",
            TilePiece::BottomLeft => "bottom_left",
            TilePiece::Bottom => "bottom",
            TilePiece::BottomRight => "bottom_right",
        }
    }

    /// File name used when loading a theme from a directory.
    pub fn file_name(self) -> String {
        format!("{}.png", self.name())
    }
}

impl fmt::Display for TilePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per tile piece.
#[derive(Clone, Debug, PartialEq)]
pub struct TileSet<T> {
    pub top_left: T,
    pub top: T,
    pub top_right: T,
    pub left: T,
    pub right: T,
    pub bottom_left: T,
    pub bottom: T,
    pub bottom_right: T,
}

impl<T> TileSet<T> {
    pub fn get(&self, piece: TilePiece) -> &T {
        match piece {
            TilePiece::TopLeft => &self.top_left,
            TilePiece::Top => &self.top,
            TilePiece::TopRight => &self.top_right,
            TilePiece::Left => &self.left,
            TilePiece::Right => &self.right,
            TilePiece::BottomLeft => &self.bottom_left,
            TilePiece::Bottom => &self.bottom,
            TilePiece::BottomRight => &self.bottom_right,
        }
    }

    /// Build a set by calling `f` for every piece in [`TilePiece::ALL`] order,
    /// stopping at the first error.
    pub fn try_from_fn<E>(mut f: impl FnMut(TilePiece) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            top_left: f(TilePiece::TopLeft)?,
            top: f(TilePiece::Top)?,
            top_right: f(TilePiece::TopRight)?,
            left: f(TilePiece::Left)?,
            right: f(TilePiece::Right)?,
            bottom_left: f(TilePiece::BottomLeft)?,
            bottom: f(TilePiece::Bottom)?,
            bottom_right: f(TilePiece::BottomRight)?,
        })
    }

    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(TilePiece, T) -> Result<U, E>,
    ) -> Result<TileSet<U>, E> {
        Ok(TileSet {
            top_left: f(TilePiece::TopLeft, self.top_left)?,
            top: f(TilePiece::Top, self.top)?,
            top_right: f(TilePiece::TopRight, self.top_right)?,
            left: f(TilePiece::Left, self.left)?,
            right: f(TilePiece::Right, self.right)?,
            bottom_left: f(TilePiece::BottomLeft, self.bottom_left)?,
            bottom: f(TilePiece::Bottom, self.bottom)?,
            bottom_right: f(TilePiece::BottomRight, self.bottom_right)?,
        })
    }
}

/// Encoded (PNG/JPEG/GIF) bytes for each piece.
pub type TileSources = TileSet<Vec<u8>>;

/// An immutable, fully decoded theme. Share it behind an `Arc` to decorate
/// many images concurrently.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    name: String,
    tiles: TileSet<RasterImage>,
}

impl Theme {
    pub const DEFAULT_NAME: &'static str = "default";

    pub fn from_images(name: impl Into<String>, tiles: TileSet<RasterImage>) -> Self {
        Self {
            name: name.into(),
            tiles,
        }
    }

    /// Decode all eight pieces. Fails with [`ChromeifyError::AssetLoad`] naming
    /// the first piece that does not decode; no partial theme is returned.
    pub fn from_sources(name: impl Into<String>, sources: TileSources) -> ChromeifyResult<Self> {
        let name = name.into();
        let tiles = sources.try_map(|piece, bytes| decode_piece(piece.name(), &bytes))?;
        debug!(theme = %name, "theme decoded");
        Ok(Self::from_images(name, tiles))
    }

    /// Load `top_left.png`, `top.png`, ... from `dir`. The directory name
    /// becomes the theme name.
    pub fn from_dir(dir: &Path) -> ChromeifyResult<Self> {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        let sources = TileSet::try_from_fn(|piece| {
            let path = dir.join(piece.file_name());
            std::fs::read(&path).map_err(|e| {
                ChromeifyError::asset_load(piece.name(), format!("read '{}': {e}", path.display()))
            })
        })?;
        Self::from_sources(name, sources)
    }

    /// The bundled theme: a title bar with window buttons and a one-pixel
    /// solid border on the remaining sides.
    pub fn default_theme() -> ChromeifyResult<Self> {
        Self::compact(
            Self::DEFAULT_NAME,
            bundled::DEFAULT_TOP_LEFT,
            bundled::DEFAULT_TOP_CENTER,
            bundled::DEFAULT_TOP_RIGHT,
            bundled::DEFAULT_BORDER,
        )
    }

    /// Title bar pieces plus one border image shared by the four lower
    /// pieces. A bad border reports `left`.
    fn compact(
        name: &str,
        top_left: &[u8],
        top: &[u8],
        top_right: &[u8],
        border: &[u8],
    ) -> ChromeifyResult<Self> {
        let top_left = decode_piece(TilePiece::TopLeft.name(), top_left)?;
        let top = decode_piece(TilePiece::Top.name(), top)?;
        let top_right = decode_piece(TilePiece::TopRight.name(), top_right)?;
        let border = decode_piece(TilePiece::Left.name(), border)?;

        Ok(Self::from_images(
            name,
            TileSet {
                top_left,
                top,
                top_right,
                left: border.clone(),
                right: border.clone(),
                bottom_left: border.clone(),
                bottom: border.clone(),
                bottom_right: border,
            },
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tiles(&self) -> &TileSet<RasterImage> {
        &self.tiles
    }

    pub fn piece(&self, piece: TilePiece) -> &RasterImage {
        self.tiles.get(piece)
    }
}

fn decode_piece(label: &str, bytes: &[u8]) -> ChromeifyResult<RasterImage> {
    decode_image(bytes).map_err(|e| ChromeifyError::asset_load(label, e))
}

#[cfg(test)]
#[path = "../../tests/unit/theme/theme.rs"]
mod tests;
