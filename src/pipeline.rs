//! Decode, decorate, post-process, encode: the path shared by the CLI and the
//! HTTP handler.

use tracing::debug;

use crate::{
    assets::decode::{decode_image, encode_png},
    effects::shadow::{DropShadow, PostProcessor},
    foundation::{
        core::{RasterImage, Rgba8},
        error::ChromeifyResult,
    },
    frame::compositor::{decorate, decorate_with_gap_fill},
    theme::Theme,
};

#[derive(Clone, Debug, Default)]
pub struct RenderOpts {
    /// Applied after compositing when set.
    pub drop_shadow: Option<DropShadow>,
    /// Pre-fill color that exposes pixels the theme never draws.
    pub gap_fill: Option<Rgba8>,
}

#[tracing::instrument(skip_all, fields(theme = theme.name()))]
pub fn render(
    theme: &Theme,
    content: &RasterImage,
    opts: &RenderOpts,
) -> ChromeifyResult<RasterImage> {
    let frame = match opts.gap_fill {
        Some(fill) => decorate_with_gap_fill(theme, content, fill)?,
        None => decorate(theme, content)?,
    };
    match &opts.drop_shadow {
        Some(shadow) => {
            debug!(post = shadow.name(), "post-processing frame");
            shadow.process(&frame)
        }
        None => Ok(frame),
    }
}

/// Encoded image in, PNG out.
pub fn render_png(theme: &Theme, encoded: &[u8], opts: &RenderOpts) -> ChromeifyResult<Vec<u8>> {
    let content = decode_image(encoded)?;
    let out = render(theme, &content, opts)?;
    encode_png(&out)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline/pipeline.rs"]
mod tests;
