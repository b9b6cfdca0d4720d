use super::*;
use crate::error::BridgeError;
use crate::fs::mock::MockFs;

// ========================================
// JsonLoader
// ========================================

#[test]
fn test_load_scalar_string() {
    let fs = MockFs::new();
    fs.add_file("/data/color.json", "\"blue\"");
    let loader = JsonLoader::with_fs(fs);

    let value = loader.load(Path::new("/data/color.json")).unwrap();

    assert_eq!(value, SassValue::String("blue".to_string()));
}

#[test]
fn test_load_object_as_map() {
    let fs = MockFs::new();
    fs.add_file("/data/theme.json", r##"{"accent": "#ff0000", "base": 16}"##);
    let loader = JsonLoader::with_fs(fs);

    let value = loader.load(Path::new("/data/theme.json")).unwrap();

    assert_eq!(
        value,
        SassValue::Map(vec![
            (
                "accent".to_string(),
                SassValue::String("#ff0000".to_string())
            ),
            ("base".to_string(), SassValue::Number(16.0)),
        ])
    );
}

#[test]
fn test_load_object_with_unsorted_keys() {
    let fs = MockFs::new();
    fs.add_file("/data/box.json", r#"{"width": 10, "height": 20}"#);
    let loader = JsonLoader::with_fs(fs);

    let value = loader.load(Path::new("/data/box.json")).unwrap();

    assert_eq!(
        value,
        SassValue::Map(vec![
            ("height".to_string(), SassValue::Number(20.0)),
            ("width".to_string(), SassValue::Number(10.0)),
        ])
    );
}

#[test]
fn test_load_array_as_list() {
    let fs = MockFs::new();
    fs.add_file("/data/sizes.json", "[1, 2, 3]");
    let loader = JsonLoader::with_fs(fs);

    let value = loader.load(Path::new("/data/sizes.json")).unwrap();

    assert_eq!(
        value,
        SassValue::List(vec![
            SassValue::Number(1.0),
            SassValue::Number(2.0),
            SassValue::Number(3.0),
        ])
    );
}

#[test]
fn test_load_invalid_json_fails() {
    let fs = MockFs::new();
    fs.add_file("/data/broken.json", "{not json");
    let loader = JsonLoader::with_fs(fs);

    let err = loader.load(Path::new("/data/broken.json")).unwrap_err();

    assert!(matches!(err, BridgeError::Json(_)));
}

#[test]
fn test_load_missing_file_fails() {
    let loader = JsonLoader::with_fs(MockFs::new());

    let err = loader.load(Path::new("/data/missing.json")).unwrap_err();

    assert!(matches!(err, BridgeError::Io(_)));
}

// ========================================
// LoaderHandler
// ========================================

#[test]
fn test_loader_handler_wraps_value() {
    let fs = MockFs::new();
    fs.add_file("/data/flag.json", "true");
    let handler = LoaderHandler::new(JsonLoader::with_fs(fs));

    let output = handler
        .handle(Path::new("/data/flag.json"), Path::new("/styles/main.scss"))
        .unwrap();

    assert_eq!(output, HandlerOutput::Value(SassValue::Boolean(true)));
}
