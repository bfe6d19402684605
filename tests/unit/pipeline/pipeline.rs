use super::*;
use crate::{
    effects::shadow::ShadowParams,
    foundation::error::ChromeifyError,
    test_support::{consistent_theme, content, png_bytes},
};

#[test]
fn render_without_options_is_plain_decorate() {
    let theme = consistent_theme();
    let src = content(9, 4);
    let out = render(&theme, &src, &RenderOpts::default()).unwrap();
    assert_eq!(out, decorate(&theme, &src).unwrap());
}

#[test]
fn render_with_shadow_grows_the_frame() {
    let theme = consistent_theme();
    let opts = RenderOpts {
        drop_shadow: Some(DropShadow::new(ShadowParams::default()).unwrap()),
        gap_fill: None,
    };
    let out = render(&theme, &content(9, 4), &opts).unwrap();
    assert_eq!(out.dimensions(), (16 + 20, 11 + 20));
}

#[test]
fn render_png_produces_decodable_png() {
    let theme = consistent_theme();
    let bytes = render_png(&theme, &png_bytes(&content(5, 5)), &RenderOpts::default()).unwrap();
    let out = decode_image(&bytes).unwrap();
    assert_eq!(out.dimensions(), (12, 12));
}

#[test]
fn undecodable_upload_is_a_decode_error() {
    let theme = consistent_theme();
    let err = render_png(&theme, b"GIF89a-but-not-really", &RenderOpts::default()).unwrap_err();
    assert!(matches!(err, ChromeifyError::Decode(_)));
    assert!(err.is_client_error());
}
