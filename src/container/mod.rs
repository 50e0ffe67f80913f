//! Frame container: the writer that produces artifacts and the reader that projects them.

pub mod descriptor;
pub mod playlist;
pub mod reader;
pub mod writer;

pub use descriptor::{FRAME_SEQUENCE_TYPE, FrameSequenceDescriptor, PlaybackInstructions};
pub use playlist::{PLAYLIST_MAX_ENTRIES, Playlist, PlaylistEntry, frame_file_name};
pub use reader::{
    ConvertTargets, Projection, convert, convert_with_frames, export_frames, load_artifact,
};
pub use writer::ContainerWriter;
