use image::{RgbaImage, imageops};
use tracing::debug;

use crate::{
    assets::decode::{
        decode_image, encode_png, premultiply_rgba8_in_place, unpremultiply_rgba8_in_place,
    },
    effects::{blur::blur_rgba8_premul, composite::frame_over_shadow},
    foundation::{
        core::{RasterImage, Rgba8},
        error::{ChromeifyError, ChromeifyResult},
    },
};

/// A transform applied to a finished frame before it is encoded.
pub trait PostProcessor: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, frame: &RasterImage) -> ChromeifyResult<RasterImage>;
}

/// Drop-shadow settings. Defaults match the classic `#000`, 30% opacity,
/// sigma 5, no offset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowParams {
    pub color: Rgba8,
    /// 0..=100, multiplied into the frame's alpha.
    pub opacity_percent: f32,
    /// Gaussian standard deviation in pixels.
    pub sigma: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            opacity_percent: 30.0,
            sigma: 5.0,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl ShadowParams {
    /// Upper bound on sigma; keeps the blur kernel and canvas growth sane.
    pub const MAX_SIGMA: f32 = 128.0;

    pub fn validate(&self) -> ChromeifyResult<()> {
        if !self.opacity_percent.is_finite() || !(0.0..=100.0).contains(&self.opacity_percent) {
            return Err(ChromeifyError::validation(
                "shadow opacity_percent must be within 0..=100",
            ));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 || self.sigma > Self::MAX_SIGMA {
            return Err(ChromeifyError::validation(format!(
                "shadow sigma must be within 0..={}",
                Self::MAX_SIGMA
            )));
        }
        Ok(())
    }

    /// Blur radius, and the margin added on every side of the frame.
    pub fn radius(&self) -> u32 {
        (2.0 * self.sigma).ceil() as u32
    }
}

/// Renders a blurred, tinted copy of the frame's silhouette behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct DropShadow {
    params: ShadowParams,
}

impl DropShadow {
    pub fn new(params: ShadowParams) -> ChromeifyResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ShadowParams {
        &self.params
    }

    /// Encoded-in, encoded-out form: PNG/JPEG/GIF bytes to PNG bytes.
    pub fn apply_encoded(&self, encoded: &[u8]) -> ChromeifyResult<Vec<u8>> {
        let frame = decode_image(encoded)
            .map_err(|e| ChromeifyError::post_process(format!("read frame: {e}")))?;
        let shadowed = self.process(&frame)?;
        encode_png(&shadowed)
    }

    fn render(&self, frame: &RasterImage) -> ChromeifyResult<RasterImage> {
        let p = &self.params;
        let (w, h) = frame.dimensions();
        let radius = p.radius();
        let (dx, dy) = (i64::from(p.offset_x), i64::from(p.offset_y));

        let grow = |len: u32, offset: i64| -> ChromeifyResult<u32> {
            u64::from(len)
                .checked_add(2 * u64::from(radius) + offset.unsigned_abs())
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| ChromeifyError::post_process("shadow canvas size overflow"))
        };
        let out_w = grow(w, dx)?;
        let out_h = grow(h, dy)?;

        let r = i64::from(radius);
        let frame_at = (r + (-dx).max(0), r + (-dy).max(0));
        let shadow_at = (r + dx.max(0), r + dy.max(0));

        let mut frame_layer = RgbaImage::new(out_w, out_h);
        imageops::replace(&mut frame_layer, frame.as_rgba8(), frame_at.0, frame_at.1);
        let mut frame_layer = frame_layer.into_raw();
        premultiply_rgba8_in_place(&mut frame_layer);

        let tint = p.color.premultiplied();
        let opacity = p.opacity_percent / 100.0;
        let mut silhouette = RgbaImage::new(w, h);
        for (x, y, px) in frame.as_rgba8().enumerate_pixels() {
            let coverage = f32::from(px.0[3]) / 255.0 * opacity;
            let shade = tint.map(|c| (f32::from(c) * coverage).round().clamp(0.0, 255.0) as u8);
            silhouette.put_pixel(x, y, image::Rgba(shade));
        }
        let mut shadow_layer = RgbaImage::new(out_w, out_h);
        imageops::replace(&mut shadow_layer, &silhouette, shadow_at.0, shadow_at.1);

        let mut out = blur_rgba8_premul(shadow_layer.as_raw(), out_w, out_h, radius, p.sigma)?;
        frame_over_shadow(&mut out, &frame_layer)?;
        unpremultiply_rgba8_in_place(&mut out);

        debug!(out_w, out_h, radius, "drop shadow rendered");
        RasterImage::from_raw(out_w, out_h, out)
    }
}

impl PostProcessor for DropShadow {
    fn name(&self) -> &'static str {
        "dropshadow"
    }

    #[tracing::instrument(skip_all, fields(w = frame.width(), h = frame.height()))]
    fn process(&self, frame: &RasterImage) -> ChromeifyResult<RasterImage> {
        self.render(frame).map_err(|e| match e {
            ChromeifyError::PostProcess(_) => e,
            other => ChromeifyError::post_process(other.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
