use super::*;

#[test]
fn empty_object_gives_defaults() {
    let cfg = ServerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr.port(), 8080);
    assert_eq!(cfg.max_upload_bytes, 32 * 1024 * 1024);
    assert!(cfg.theme_dir.is_none());
}

#[test]
fn fields_override_defaults() {
    let cfg = ServerConfig::from_json_str(
        r##"{
            "addr": "127.0.0.1:9000",
            "max_upload_bytes": 1024,
            "theme_dir": "themes/graphite",
            "shadow": { "color": "#222", "offset_y": 6 }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:9000".parse().unwrap());
    assert_eq!(cfg.max_upload_bytes, 1024);
    assert_eq!(cfg.theme_dir.as_deref(), Some(Path::new("themes/graphite")));
    assert_eq!(cfg.shadow.offset_y, 6);
    assert_eq!(cfg.shadow.sigma, ShadowParams::default().sigma);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(ServerConfig::from_json_str("not json").is_err());
    assert!(ServerConfig::from_json_str(r#"{"port": 1}"#).is_err());
    assert!(ServerConfig::from_json_str(r#"{"max_upload_bytes": 0}"#).is_err());
    assert!(ServerConfig::from_json_str(r#"{"shadow": {"opacity_percent": -1}}"#).is_err());
}

#[test]
fn from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chromeify.json");
    std::fs::write(&path, r#"{"addr": "127.0.0.1:0"}"#).unwrap();
    assert_eq!(ServerConfig::from_path(&path).unwrap().addr.port(), 0);

    let missing = ServerConfig::from_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, ChromeifyError::Other(_)));
}
