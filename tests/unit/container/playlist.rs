use super::*;

#[test]
fn frame_file_names_are_one_based_and_padded() {
    assert_eq!(frame_file_name(FrameIndex(0)), "frame_001.png");
    assert_eq!(frame_file_name(FrameIndex(9)), "frame_010.png");
    assert_eq!(frame_file_name(FrameIndex(999)), "frame_1000.png");
}

#[test]
fn three_frames_at_ten_fps() {
    let p = Playlist::from_frames(3, 10, "frames").unwrap();
    assert_eq!(p.entries.len(), 3);
    assert!(p.entries.iter().all(|e| e.duration_secs == 0.1));

    let expected = "#EXTM3U\n\
#EXT-X-VERSION:3\n\
#EXT-X-TARGETDURATION:0.1\n\
#EXT-X-PLAYLIST-TYPE:VOD\n\
#EXTINF:0.1,\n\
frames/frame_001.png\n\
#EXTINF:0.1,\n\
frames/frame_002.png\n\
#EXTINF:0.1,\n\
frames/frame_003.png\n\
#EXT-X-ENDLIST\n";
    assert_eq!(p.to_m3u8(), expected);
}

#[test]
fn long_sequences_are_capped_at_ten_entries() {
    let p = Playlist::from_frames(60, 10, "frames").unwrap();
    assert_eq!(p.entries.len(), PLAYLIST_MAX_ENTRIES);
    assert_eq!(p.entries[0].uri, "frames/frame_001.png");
    assert_eq!(p.entries[9].uri, "frames/frame_010.png");
}

#[test]
fn empty_sequence_has_header_and_end_only() {
    let text = Playlist::from_frames(0, 10, "frames").unwrap().to_m3u8();
    assert!(!text.contains("#EXTINF"));
    assert!(text.ends_with("#EXT-X-ENDLIST\n"));
}

#[test]
fn zero_fps_is_degenerate() {
    let err = Playlist::from_frames(3, 0, "frames").unwrap_err();
    assert!(matches!(err, StudioError::DegenerateFrameRate));
}

#[test]
fn frames_dir_prefix_is_normalized() {
    let p = Playlist::from_frames(1, 1, "out/frames/").unwrap();
    assert_eq!(p.entries[0].uri, "out/frames/frame_001.png");
    assert!(p.to_m3u8().contains("#EXT-X-TARGETDURATION:1\n"));

    let p = Playlist::from_frames(1, 1, "").unwrap();
    assert_eq!(p.entries[0].uri, "frame_001.png");
}
