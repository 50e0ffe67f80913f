use super::*;

#[test]
fn fps_rejects_zero() {
    assert!(Fps::new(0).is_err());
    assert_eq!(Fps::new(10).unwrap().get(), 10);
}

#[test]
fn fps_frame_math_matches_duration() {
    let fps = Fps::new(10).unwrap();
    assert_eq!(fps.frame_duration_secs(), 0.1);
    assert_eq!(fps.frames_to_secs(60), 6.0);
    assert_eq!(fps.frames_to_secs(0), 0.0);
}

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(4, 2).unwrap().rgba_len(), 32);
}

#[test]
fn frame_index_ordinal_is_one_based() {
    assert_eq!(FrameIndex(0).ordinal(), 1);
    assert_eq!(FrameIndex(9).ordinal(), 10);
}

#[test]
fn fps_serializes_as_plain_number() {
    let fps = Fps::new(24).unwrap();
    assert_eq!(serde_json::to_string(&fps).unwrap(), "24");
}
