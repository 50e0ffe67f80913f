use std::io::Cursor;

use super::*;
use crate::artifact::{ArtifactMetadata, encode_frame_data};
use crate::container::playlist::PLAYLIST_MAX_ENTRIES;
use crate::foundation::error::ErrorKind;

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 50, 60, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn artifact(frames: usize, fps: Option<u32>) -> Artifact {
    let frame = encode_frame_data(&png(2, 2));
    let duration = match fps {
        Some(f) if f > 0 => frames as f64 / f64::from(f),
        _ => 0.0,
    };
    Artifact::new(
        ArtifactMetadata {
            title: "AI Generated Video".to_string(),
            description: "test".to_string(),
            duration,
            fps,
            width: 2,
            height: 2,
            created: "2026-01-01T00:00:00.000Z".to_string(),
        },
        vec![frame; frames],
    )
}

fn targets(dir: &Path) -> ConvertTargets {
    ConvertTargets {
        descriptor: dir.join("out").join("frames.txt"),
        playlist: dir.join("out").join("playlist.m3u8"),
        frames_dir: "frames".to_string(),
    }
}

fn write_artifact(dir: &Path, a: &Artifact) -> PathBuf {
    let path = dir.join("a.mp4");
    std::fs::write(&path, a.to_json_pretty().unwrap()).unwrap();
    path
}

#[test]
fn projection_copies_metadata_and_counts() {
    let a = artifact(3, Some(10));
    let p = Projection::build(&a, "frames").unwrap();
    assert_eq!(p.descriptor.kind, "FRAME_SEQUENCE");
    assert_eq!(p.descriptor.total_frames, 3);
    assert_eq!(p.descriptor.frame_rate, 10);
    assert_eq!(p.descriptor.metadata, a.metadata);
    assert_eq!(p.descriptor.instructions.len(), 4);
    assert_eq!(p.playlist.entries.len(), 3);
    assert!(p.playlist.entries.iter().all(|e| e.duration_secs == 0.1));
}

#[test]
fn missing_fps_defaults_to_ten() {
    let p = Projection::build(&artifact(2, None), "frames").unwrap();
    assert_eq!(p.descriptor.frame_rate, 10);
    assert_eq!(p.playlist.target_duration_secs, 0.1);
}

#[test]
fn zero_fps_is_degenerate_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_artifact(tmp.path(), &artifact(3, Some(0)));
    let t = targets(tmp.path());

    let err = convert(&path, &t).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DegenerateFrameRate);
    assert!(!t.descriptor.exists());
    assert!(!t.playlist.exists());
}

#[test]
fn missing_frames_is_schema_invalid_and_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("a.mp4");
    std::fs::write(
        &path,
        r#"{ "format": "MP4_COMPATIBLE", "version": "1.0",
             "metadata": { "fps": 10, "width": 2, "height": 2 } }"#,
    )
    .unwrap();
    let t = targets(tmp.path());

    let err = convert(&path, &t).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArtifactSchemaInvalid);
    assert!(!t.descriptor.exists());
    assert!(!t.playlist.exists());
}

#[test]
fn garbage_is_a_parse_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("a.mp4");
    std::fs::write(&path, "not json at all").unwrap();

    let err = load_artifact(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArtifactParseFailed);
}

#[test]
fn binary_container_is_a_parse_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("a.mp4");
    std::fs::write(&path, [0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', 0xff, 0xfe]).unwrap();

    let err = load_artifact(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArtifactParseFailed);
}

#[test]
fn missing_artifact_is_an_io_failure() {
    let tmp = tempfile::tempdir().unwrap();
    let err = load_artifact(&tmp.path().join("absent.mp4")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn convert_writes_descriptor_and_capped_playlist() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_artifact(tmp.path(), &artifact(12, Some(10)));
    let t = targets(tmp.path());

    let p = convert(&path, &t).unwrap();
    assert_eq!(p.playlist.entries.len(), PLAYLIST_MAX_ENTRIES);

    let descriptor: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&t.descriptor).unwrap()).unwrap();
    assert_eq!(descriptor["type"], "FRAME_SEQUENCE");
    assert_eq!(descriptor["totalFrames"], 12);
    assert_eq!(descriptor["frameRate"], 10);
    assert_eq!(descriptor["metadata"]["description"], "test");
    assert_eq!(
        descriptor["playbackInstructions"]["web"],
        "Open video_player.html in a web browser"
    );

    let playlist = std::fs::read_to_string(&t.playlist).unwrap();
    assert_eq!(playlist.matches("#EXTINF:0.1,").count(), 10);
    assert!(playlist.contains("frames/frame_010.png"));
    assert!(!playlist.contains("frame_011.png"));
}

#[test]
fn empty_artifact_projects_to_zero_frames() {
    let p = Projection::build(&artifact(0, Some(10)), "frames").unwrap();
    assert_eq!(p.descriptor.total_frames, 0);
    assert_eq!(p.descriptor.metadata.duration, 0.0);
    assert!(p.playlist.entries.is_empty());
}

#[test]
fn export_frames_writes_playlist_targets() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("frames");

    let written = export_frames(&artifact(12, Some(10)), &dir, PLAYLIST_MAX_ENTRIES).unwrap();
    assert_eq!(written.len(), 10);
    assert_eq!(written[0], dir.join("frame_001.png"));
    assert!(dir.join("frame_010.png").exists());
    assert!(!dir.join("frame_011.png").exists());

    let img = image::open(&written[3]).unwrap();
    assert_eq!((img.width(), img.height()), (2, 2));
}

#[test]
fn convert_with_frames_writes_everything() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_artifact(tmp.path(), &artifact(3, Some(10)));
    let t = targets(tmp.path());
    let frames_out = tmp.path().join("out").join("frames");

    let p = convert_with_frames(&path, &t, &frames_out, PLAYLIST_MAX_ENTRIES).unwrap();
    assert_eq!(p.playlist.entries.len(), 3);
    assert!(t.descriptor.exists());
    assert!(t.playlist.exists());
    for entry in &p.playlist.entries {
        assert!(tmp.path().join("out").join(&entry.uri).exists(), "{}", entry.uri);
    }
}

#[test]
fn blocked_frames_dir_writes_no_projection() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_artifact(tmp.path(), &artifact(3, Some(10)));
    let t = targets(tmp.path());
    let frames_out = tmp.path().join("out").join("frames");
    std::fs::create_dir_all(tmp.path().join("out")).unwrap();
    std::fs::write(&frames_out, b"not a directory").unwrap();

    let err = convert_with_frames(&path, &t, &frames_out, PLAYLIST_MAX_ENTRIES).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DirectoryCreationFailed);
    assert!(!t.descriptor.exists());
    assert!(!t.playlist.exists());
}

#[test]
fn undecodable_frame_aborts_export_before_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut a = artifact(2, Some(10));
    a.frames[1] = "@@@".to_string();
    let frames_out = tmp.path().join("frames");

    assert!(export_frames(&a, &frames_out, PLAYLIST_MAX_ENTRIES).is_err());
    assert!(!frames_out.exists());
}
