use std::{io::Cursor, path::Path};

use anyhow::Context;

use crate::foundation::{
    core::RasterImage,
    error::{ChromeifyError, ChromeifyResult},
};

/// Decode PNG/JPEG/GIF bytes into a straight RGBA8 raster.
pub fn decode_image(bytes: &[u8]) -> ChromeifyResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ChromeifyError::decode(format!("decode image from memory: {e}")))?;
    RasterImage::new(dyn_img.to_rgba8())
        .map_err(|e| ChromeifyError::decode(format!("decoded image is unusable: {e}")))
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> ChromeifyResult<RasterImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes)
}

/// Encode a raster as PNG bytes.
pub fn encode_png(img: &RasterImage) -> ChromeifyResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.as_rgba8()
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| ChromeifyError::encode(format!("encode png: {e}")))?;
    Ok(buf)
}

/// Encode a raster as PNG and write it to `path`, creating parent dirs.
pub fn write_png(path: &Path, img: &RasterImage) -> ChromeifyResult<()> {
    let bytes = encode_png(img)?;
    write_bytes(path, &bytes)
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> ChromeifyResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
