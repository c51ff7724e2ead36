use ::async_trait::async_trait;
use ::domain::OutputLayout;
use ::domain::PlaylistUrl;

use crate::models::descriptors::Extraction;
use crate::models::notes::BaseNote;
use crate::models::notes::IndexNote;
use crate::models::notes::VideoNote;
use crate::utils::aliases::Fallible;

/// The metadata source. Called exactly once per import.
#[async_trait]
pub trait PlaylistExtractor: Send + Sync {
    async fn extract(self: ::std::sync::Arc<Self>, url: PlaylistUrl) -> Fallible<Extraction>;
}

#[async_trait]
pub trait NoteRepository: Save<VideoNote> + Save<IndexNote> + Save<BaseNote> {
    /// Creates the playlist folders. Must succeed when they already exist.
    async fn prepare(self: ::std::sync::Arc<Self>, layout: &OutputLayout) -> Fallible<()>;
}

#[async_trait]
pub trait Save<Note: Send + Sync>: Send + Sync {
    async fn save(self: ::std::sync::Arc<Self>, note: &Note) -> Fallible<()>;
}
