//! chromeify frames screenshots in a themed browser-window border.
//!
//! A [`Theme`] is eight tile images: four corners and four edges that are
//! repeated along each side. [`decorate`] insets a content image by the edge
//! thickness and tiles the border around it, producing a new [`RasterImage`].
//!
//! # Pipeline overview
//!
//! 1. **Decode**: encoded bytes -> [`RasterImage`] ([`decode_image`])
//! 2. **Decorate**: `Theme + RasterImage -> RasterImage` ([`decorate`]); pure and deterministic
//! 3. **Post-process** (optional): [`DropShadow`] behind the frame
//! 4. **Encode**: PNG ([`encode_png`])
//!
//! [`render_png`] runs the whole chain and is what the CLI and the HTTP
//! server (see [`server`]) call.
#![forbid(unsafe_code)]

mod assets;
mod effects;
mod foundation;
mod frame;
mod theme;

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod server;

pub use assets::decode::{decode_image, encode_png, load_image, write_bytes, write_png};
pub use config::ServerConfig;
pub use effects::blur::blur_rgba8_premul;
pub use effects::composite::frame_over_shadow;
pub use effects::shadow::{DropShadow, PostProcessor, ShadowParams};
pub use foundation::core::{RasterImage, Rgba8};
pub use foundation::error::{ChromeifyError, ChromeifyResult};
pub use frame::compositor::{decorate, decorate_with_gap_fill};
pub use frame::geometry::{Axis, EdgeRun, FrameGeometry, Placement};
pub use pipeline::{RenderOpts, render, render_png};
pub use theme::{Theme, TilePiece, TileSet, TileSources};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
