use super::*;
use crate::test_support::{consistent_theme, png_bytes};

fn sources_from(theme: &Theme) -> TileSources {
    TileSet::try_from_fn(|piece| -> Result<Vec<u8>, ()> { Ok(png_bytes(theme.piece(piece))) })
        .unwrap()
}

#[test]
fn piece_names_and_file_names_are_stable() {
    let names: Vec<_> = TilePiece::ALL.iter().map(|p| p.file_name()).collect();
    assert_eq!(
        names,
        [
            "top_left.png",
            "top.png",
            "top_right.png",
            "left.png",
            "right.png",
            "bottom_left.png",
            "bottom.png",
            "bottom_right.png"
        ]
    );
}

#[test]
fn from_sources_decodes_every_piece() {
    let reference = consistent_theme();
    let theme = Theme::from_sources("copy", sources_from(&reference)).unwrap();
    assert_eq!(theme.name(), "copy");
    for piece in TilePiece::ALL {
        assert_eq!(theme.piece(piece), reference.piece(piece), "{piece}");
    }
}

#[test]
fn from_sources_fails_atomically_naming_the_bad_piece() {
    let mut sources = sources_from(&consistent_theme());
    sources.bottom_right = b"corrupt".to_vec();

    match Theme::from_sources("broken", sources) {
        Err(ChromeifyError::AssetLoad { piece, .. }) => assert_eq!(piece, "bottom_right"),
        other => panic!("expected asset load error, got {other:?}"),
    }
}

#[test]
fn from_dir_reads_named_files() {
    let reference = consistent_theme();
    let dir = tempfile::tempdir().unwrap();
    let theme_dir = dir.path().join("graphite");
    std::fs::create_dir(&theme_dir).unwrap();
    for piece in TilePiece::ALL {
        std::fs::write(
            theme_dir.join(piece.file_name()),
            png_bytes(reference.piece(piece)),
        )
        .unwrap();
    }

    let theme = Theme::from_dir(&theme_dir).unwrap();
    assert_eq!(theme.name(), "graphite");
    assert_eq!(theme.tiles(), reference.tiles());
}

#[test]
fn from_dir_with_missing_piece_fails() {
    let reference = consistent_theme();
    let dir = tempfile::tempdir().unwrap();
    for piece in TilePiece::ALL {
        if piece == TilePiece::Left {
            continue;
        }
        std::fs::write(
            dir.path().join(piece.file_name()),
            png_bytes(reference.piece(piece)),
        )
        .unwrap();
    }

    let err = Theme::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ChromeifyError::AssetLoad { ref piece, .. } if piece == "left"));
}

#[test]
fn default_theme_reuses_one_border_pixel() {
    let theme = Theme::default_theme().unwrap();
    assert_eq!(theme.name(), Theme::DEFAULT_NAME);

    let border = theme.piece(TilePiece::Left);
    assert_eq!(border.dimensions(), (1, 1));
    for piece in [
        TilePiece::Right,
        TilePiece::BottomLeft,
        TilePiece::Bottom,
        TilePiece::BottomRight,
    ] {
        assert_eq!(theme.piece(piece), border, "{piece}");
    }

    let top = theme.piece(TilePiece::Top);
    assert_eq!(top.width(), 1);
    assert_eq!(theme.piece(TilePiece::TopLeft).height(), top.height());
    assert_eq!(theme.piece(TilePiece::TopRight).height(), top.height());
}

#[test]
fn compact_theme_errors_use_piece_names() {
    let good = png_bytes(consistent_theme().piece(TilePiece::Top));

    let err = Theme::compact("broken", &good, b"junk", &good, &good).unwrap_err();
    assert!(matches!(err, ChromeifyError::AssetLoad { ref piece, .. } if piece == "top"));

    let err = Theme::compact("broken", &good, &good, &good, b"junk").unwrap_err();
    assert!(matches!(err, ChromeifyError::AssetLoad { ref piece, .. } if piece == "left"));
}
