use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StudioError::frame_render(3, "x")
            .to_string()
            .contains("frame render failed at index 3")
    );
    assert!(
        StudioError::parse("x")
            .to_string()
            .contains("artifact parse failed:")
    );
    assert!(
        StudioError::schema("x")
            .to_string()
            .contains("artifact schema invalid:")
    );
    assert!(
        StudioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StudioError::DegenerateFrameRate
            .to_string()
            .contains("degenerate frame rate")
    );
}

#[test]
fn parse_and_schema_kinds_are_distinct() {
    assert_eq!(StudioError::parse("x").kind(), ErrorKind::ArtifactParseFailed);
    assert_eq!(
        StudioError::schema("x").kind(),
        ErrorKind::ArtifactSchemaInvalid
    );
    assert_ne!(StudioError::parse("x").kind(), StudioError::schema("x").kind());
}

#[test]
fn directory_error_names_the_path() {
    let err = StudioError::DirectoryCreationFailed {
        path: PathBuf::from("/nope/out"),
        source: std::io::Error::other("denied"),
    };
    assert_eq!(err.kind(), ErrorKind::DirectoryCreationFailed);
    let msg = err.to_string();
    assert!(msg.contains("/nope/out"));
    assert!(msg.contains("denied"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StudioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.kind(), ErrorKind::Other);
}
