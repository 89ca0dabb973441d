pub mod frames;
pub mod playback;

pub use frames::{FrameSequence, FrameStore, LoadStatus, StoreAction};
pub use playback::{PlaybackAction, PlaybackClock, TimerSpec};
