use crate::foundation::error::{ChromeifyError, ChromeifyResult};

/// Lay a premultiplied frame layer over the blurred shadow layer, in place.
///
/// Opacity already lives in the shadow's tint, so the frame always lands at
/// full strength: opaque frame pixels replace the shadow, transparent ones
/// (rounded title-bar corners) let it show through.
pub fn frame_over_shadow(shadow: &mut [u8], frame: &[u8]) -> ChromeifyResult<()> {
    if shadow.len() != frame.len() || !shadow.len().is_multiple_of(4) {
        return Err(ChromeifyError::post_process(format!(
            "frame layer ({} bytes) does not match shadow layer ({} bytes)",
            frame.len(),
            shadow.len()
        )));
    }
    for (s, f) in shadow.chunks_exact_mut(4).zip(frame.chunks_exact(4)) {
        match f[3] {
            0 => {}
            255 => s.copy_from_slice(f),
            fa => {
                let keep = 255 - u16::from(fa);
                for (sc, fc) in s.iter_mut().zip(f) {
                    *sc = fc.saturating_add(scale(*sc, keep));
                }
            }
        }
    }
    Ok(())
}

fn scale(c: u8, by: u16) -> u8 {
    ((u32::from(c) * u32::from(by) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
