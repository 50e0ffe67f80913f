use super::*;
use crate::artifact::model::{ArtifactMetadata, encode_frame_data};

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([1, 2, 3, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn artifact(frames: Vec<String>, fps: Option<u32>) -> Artifact {
    let duration = match fps {
        Some(f) if f > 0 => frames.len() as f64 / f64::from(f),
        _ => 0.0,
    };
    Artifact::new(
        ArtifactMetadata {
            title: "t".to_string(),
            description: "d".to_string(),
            duration,
            fps,
            width: 4,
            height: 3,
            created: String::new(),
        },
        frames,
    )
}

#[test]
fn well_formed_artifact_validates() {
    let frame = encode_frame_data(&png(4, 3));
    validate_artifact(&artifact(vec![frame.clone(), frame], Some(10))).unwrap();
}

#[test]
fn shape_errors_carry_json_paths() {
    let v = serde_json::json!({ "metadata": {}, "frames": "nope" });
    let err = check_shape(&v).unwrap_err().to_string();
    assert!(err.contains("$.frames: must be an array"), "{err}");

    let v = serde_json::json!({ "metadata": 3, "frames": [1] });
    let err = check_shape(&v).unwrap_err().to_string();
    assert!(err.contains("$.frames[0]"), "{err}");
    assert!(err.contains("$.metadata: must be an object"), "{err}");

    let err = check_shape(&serde_json::json!([])).unwrap_err().to_string();
    assert!(err.contains("JSON object"));
}

#[test]
fn empty_and_non_base64_frames_are_reported() {
    let a = artifact(vec![String::new(), "@@@".to_string()], None);
    let err = validate_artifact(&a).unwrap_err();
    assert_eq!(err.0.len(), 2);
    assert_eq!(err.0[0].at, "$.frames[0]");
    assert_eq!(err.0[1].at, "$.frames[1]");
    assert!(err.to_string().contains("frame is empty"));
    assert!(err.to_string().contains("invalid base64"));
}

#[test]
fn frame_dimensions_must_match_metadata() {
    let a = artifact(vec![encode_frame_data(&png(5, 3))], Some(10));
    let err = validate_artifact(&a).unwrap_err().to_string();
    assert!(err.contains("image is 5x3, expected 4x3"), "{err}");
}

#[test]
fn base64_that_is_not_an_image_is_rejected() {
    let a = artifact(vec![encode_frame_data(b"definitely not a png")], None);
    assert!(validate_artifact(&a).is_err());
}

#[test]
fn duration_must_match_frame_count() {
    let mut a = artifact(vec![encode_frame_data(&png(4, 3))], Some(10));
    a.metadata.duration = 5.0;
    let err = validate_artifact(&a).unwrap_err().to_string();
    assert!(err.contains("$.metadata.duration"), "{err}");
}

#[test]
fn zero_fps_is_not_a_schema_error() {
    validate_artifact(&artifact(vec![encode_frame_data(&png(4, 3))], Some(0))).unwrap();
}

#[test]
fn wrong_format_and_version_are_reported() {
    let mut a = artifact(vec![], Some(10));
    a.format = "WEBM".to_string();
    a.version = "2.0".to_string();
    let err = validate_artifact(&a).unwrap_err();
    let at: Vec<_> = err.0.iter().map(|v| v.at.as_str()).collect();
    assert_eq!(at, ["$.format", "$.version"]);
}
