use std::{fmt, str::FromStr, sync::Arc};

use image::RgbaImage;

use crate::foundation::error::{ChromeifyError, ChromeifyResult};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Fill used to make unwritten frame pixels stand out.
    pub const GAP_MAGENTA: Self = Self::new(255, 0, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> ChromeifyResult<Self> {
        let digits = s.trim().trim_start_matches('#');
        let bad = || ChromeifyError::validation(format!("invalid hex color '{s}'"));
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);

        let parsed = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(bad()),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::new(r, g, b, a)),
            _ => Err(bad()),
        }
    }

    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }

    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba8 {
    type Err = ChromeifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = ChromeifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_string()
    }
}

/// Immutable decoded bitmap, at least 1x1, straight RGBA8.
///
/// Cloning is cheap: the pixel buffer is shared, so one decoded tile can back
/// any number of concurrent frame renders.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pixels: Arc<RgbaImage>,
}

impl RasterImage {
    pub fn new(pixels: RgbaImage) -> ChromeifyResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ChromeifyError::validation(format!(
                "raster image must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self {
            pixels: Arc::new(pixels),
        })
    }

    /// Wrap tightly packed row-major straight RGBA8 bytes.
    pub fn from_raw(width: u32, height: u32, rgba8: Vec<u8>) -> ChromeifyResult<Self> {
        let pixels = RgbaImage::from_raw(width, height, rgba8).ok_or_else(|| {
            ChromeifyError::validation("raster buffer length does not match width*height*4")
        })?;
        Self::new(pixels)
    }

    pub fn solid(width: u32, height: u32, color: Rgba8) -> ChromeifyResult<Self> {
        Self::new(RgbaImage::from_pixel(width, height, color.to_pixel()))
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Rgba8::new(r, g, b, a)
    }

    pub fn as_rgba8(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba8(self) -> RgbaImage {
        Arc::unwrap_or_clone(self.pixels)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
