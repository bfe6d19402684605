use super::*;

fn png_bytes(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let bytes = png_bytes(1, 1, vec![100, 50, 200, 128]);
    let img = decode_image(&bytes).unwrap();
    assert_eq!(img.dimensions(), (1, 1));
    assert_eq!(img.as_rgba8().as_raw().as_slice(), &[100, 50, 200, 128]);
}

#[test]
fn decode_garbage_is_a_decode_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, ChromeifyError::Decode(_)));
}

#[test]
fn encode_then_decode_preserves_pixels() {
    let src = RasterImage::from_raw(2, 1, vec![1, 2, 3, 255, 9, 8, 7, 0]).unwrap();
    let bytes = encode_png(&src).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
    assert_eq!(decode_image(&bytes).unwrap(), src);
}

#[test]
fn write_png_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("out.png");
    let img = RasterImage::from_raw(1, 1, vec![0, 0, 0, 255]).unwrap();
    write_png(&out, &img).unwrap();
    assert_eq!(load_image(&out).unwrap(), img);
}

#[test]
fn load_missing_file_is_not_a_decode_error() {
    let err = load_image(Path::new("definitely/missing.png")).unwrap_err();
    assert!(matches!(err, ChromeifyError::Other(_)));
}

#[test]
fn premultiply_then_unpremultiply_is_close() {
    let mut px = vec![100u8, 50, 200, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
    unpremultiply_rgba8_in_place(&mut px);
    for (got, want) in px[..3].iter().zip([100u8, 50, 200]) {
        assert!((i16::from(*got) - i16::from(want)).abs() <= 1);
    }
}
