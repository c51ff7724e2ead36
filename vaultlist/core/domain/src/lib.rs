pub(crate) mod utils;

mod durations;
mod layouts;
mod sanitizers;
mod thumbnails;
mod urls;

pub use crate::durations::FormattedDuration;
pub use crate::layouts::OutputLayout;
pub use crate::sanitizers::sanitize_filename;
pub use crate::sanitizers::sanitize_tag;
pub use crate::thumbnails::ThumbnailTier;
pub use crate::urls::InvalidPlaylistUrl;
pub use crate::urls::PlaylistUrl;

use crate::utils::aliases::MaybeOwnedString;
use crate::utils::aliases::MaybeOwnedVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: VideoId,
    pub url: MaybeOwnedString,

    pub metadata: VideoMetadata,

    /// Sanitized title, used verbatim as the document's file stem.
    pub filename: MaybeOwnedString,
}

pub type VideoId = MaybeOwnedString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: MaybeOwnedString,
    pub duration: FormattedDuration,
    pub thumbnail_url: MaybeOwnedString,

    /// 1-based position among the entries kept from the playlist.
    pub playlist_index: usize,
}

impl Video {
    pub const DEFAULT_TITLE: &'static str = "No Title";

    pub fn watch_url(id: &str) -> MaybeOwnedString {
        format!("https://www.youtube.com/watch?v={}", id).into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub url: PlaylistUrl,

    pub metadata: PlaylistMetadata,

    pub videos: MaybeOwnedVec<Video>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistMetadata {
    pub title: MaybeOwnedString,

    /// Strictly sanitized title, shared by the output folder and the playlist tag.
    pub name: MaybeOwnedString,

    pub thumbnail_url: Option<MaybeOwnedString>,
}

impl Playlist {
    pub const DEFAULT_TITLE: &'static str = "playlist";

    pub fn tag(&self) -> MaybeOwnedString {
        format!("playlist-{}", self.metadata.name).into()
    }
}
