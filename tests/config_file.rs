use signature_pad::{Color, Error, PadConfig};
use tempfile::tempdir;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let cfg = PadConfig::load(&dir.path().join("nope.json")).unwrap();
    assert_eq!(cfg, PadConfig::default());
}

#[test]
fn saved_settings_load_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("signature_pad.json");

    let cfg = PadConfig {
        ink: Color::rgb(0, 0, 0x80),
        line_width: 3,
        page_margin: 12,
        debug_logging: true,
        ..PadConfig::default()
    };
    cfg.save(&path).unwrap();

    assert_eq!(PadConfig::load(&path).unwrap(), cfg);
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ line_width: ").unwrap();

    assert!(matches!(PadConfig::load(&path), Err(Error::Config(_))));
}

#[test]
fn non_utf8_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("binary.json");
    std::fs::write(&path, [0xff, 0xfe, b'{']).unwrap();

    assert!(matches!(PadConfig::load(&path), Err(Error::Io(_))));
}

#[test]
fn huge_line_width_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.json");
    std::fs::write(&path, r#"{ "line_width": 100000 }"#).unwrap();

    assert!(matches!(PadConfig::load(&path), Err(Error::Config(_))));
}
