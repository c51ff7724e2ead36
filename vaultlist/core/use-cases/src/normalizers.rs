use ::domain::sanitize_filename;
use ::domain::sanitize_tag;
use ::domain::Playlist;
use ::domain::PlaylistMetadata;
use ::domain::PlaylistUrl;
use ::domain::ThumbnailTier;
use ::domain::Video;
use ::domain::VideoMetadata;

use crate::errors::ImportError;
use crate::models::descriptors::RawPlaylist;
use crate::models::descriptors::RawVideo;
use crate::utils::aliases::MaybeOwnedString;

/// Turns one raw extraction into a [`Playlist`], walking the entries once.
///
/// Holes in the entry list and entries without an id are skipped without consuming an ordinal, so the
/// kept videos are always numbered `1..=k`.
pub fn normalize(url: PlaylistUrl, playlist: Option<RawPlaylist>) -> Result<Playlist, ImportError> {
    let RawPlaylist { title, thumbnail_url, entries } = playlist.ok_or(ImportError::MetadataUnavailable)?;
    let entries = entries.ok_or(ImportError::MetadataUnavailable)?;

    let title = title.unwrap_or(Playlist::DEFAULT_TITLE.into());
    let name = match sanitize_tag(&title) {
        name if name.is_empty() => Playlist::DEFAULT_TITLE.to_owned(),
        name => name,
    };

    let videos = entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match entry {
            Some(RawVideo { id: Some(id), title, duration, thumbnail_urls }) if !id.trim().is_empty() => {
                Some((id, title, duration, thumbnail_urls))
            },
            Some(_) => {
                ::tracing::warn!(position, "skipping playlist entry without an id");
                None
            },
            None => {
                ::tracing::debug!(position, "skipping missing playlist entry");
                None
            },
        })
        .enumerate()
        .map(|(offset, (id, title, duration, thumbnail_urls))| {
            let tier = ThumbnailTier::select(thumbnail_urls.iter().filter_map(|url| ThumbnailTier::from_url(url)));
            let title = title.unwrap_or(Video::DEFAULT_TITLE.into());

            Video {
                url: Video::watch_url(&id),
                filename: derive_filename(&title, &id),
                metadata: VideoMetadata {
                    duration: duration.into(),
                    thumbnail_url: tier.url_for(&id).into(),
                    playlist_index: offset + 1,
                    title,
                },
                id,
            }
        })
        .collect::<Vec<_>>();

    Ok(Playlist {
        url,
        metadata: PlaylistMetadata { title, name: name.into(), thumbnail_url },
        videos: videos.into(),
    })
}

fn derive_filename(title: &str, id: &str) -> MaybeOwnedString {
    match sanitize_filename(title) {
        filename if filename.trim().is_empty() => id.to_owned().into(),
        filename => filename.into(),
    }
}
