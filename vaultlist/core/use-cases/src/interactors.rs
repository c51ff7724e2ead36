use ::async_trait::async_trait;
use ::domain::OutputLayout;
use ::domain::Playlist;
use ::domain::PlaylistUrl;

use crate::boundaries::Accept;
use crate::boundaries::ImportPlaylistOutputBoundary;
use crate::boundaries::ImportPlaylistRequestModel;
use crate::boundaries::Update;
use crate::errors::ImportError;
use crate::gateways::NoteRepository;
use crate::gateways::PlaylistExtractor;
use crate::gateways::Save;
use crate::models::descriptors::Extraction;
use crate::models::events::ImportOutcome;
use crate::models::events::ImportPercentageUpdatedEvent;
use crate::models::events::ImportPhase;
use crate::models::events::ImportProgressEvent;
use crate::models::events::ImportSummary;
use crate::models::notes::BaseNote;
use crate::models::notes::IndexNote;
use crate::models::notes::VideoNote;
use crate::normalizers::normalize;
use crate::utils::aliases::Fallible;

/// Turns one playlist URL into a folder of linked notes plus a base document.
///
/// Every failure is folded into [`ImportOutcome::Failed`]. Errors raised by the output boundary while
/// activating, reporting the outcome or deactivating are logged and never replace the outcome.
#[derive(::bon::Builder)]
pub struct ImportPlaylistInteractor {
    pub output_boundary: ::std::sync::Arc<dyn ImportPlaylistOutputBoundary>,

    pub extractor: ::std::sync::Arc<dyn PlaylistExtractor>,
    pub notes: ::std::sync::Arc<dyn NoteRepository>,
}

#[async_trait]
impl Accept<ImportPlaylistRequestModel> for ImportPlaylistInteractor {
    type Response = ImportOutcome;

    async fn accept(self: ::std::sync::Arc<Self>, request: ImportPlaylistRequestModel) -> Fallible<ImportOutcome> {
        if let Err(error) = ::std::sync::Arc::clone(&self.output_boundary).activate().await {
            ::tracing::warn!("could not activate output boundary: {:#}", error);
        }

        let outcome = match ::std::sync::Arc::clone(&self).import(request).await {
            Ok(summary) => {
                ::tracing::info!(videos = summary.processed_videos, folder = %summary.main_folder.display(), "playlist imported");
                ImportOutcome::Succeeded(summary)
            },
            Err(error) => {
                let error = ImportError::classify(error);
                ::tracing::error!(kind = ?error.kind(), "playlist import failed: {:#}", error);
                ImportOutcome::Failed(error.into())
            },
        };

        if let Err(error) = self.notify(&outcome).await {
            ::tracing::warn!("could not report import outcome: {:#}", error);
        }

        if let Err(error) = ::std::sync::Arc::clone(&self.output_boundary).deactivate().await {
            ::tracing::warn!("could not deactivate output boundary: {:#}", error);
        }

        Ok(outcome)
    }
}

impl ImportPlaylistInteractor {
    async fn import(self: ::std::sync::Arc<Self>, request: ImportPlaylistRequestModel) -> Fallible<ImportSummary> {
        let ImportPlaylistRequestModel { url, save_directory, base_files_directory, vault_directory } = request;

        self.notify(&ImportProgressEvent::PhaseStarted(ImportPhase::ValidatingUrl)).await?;

        let url = PlaylistUrl::try_from(url).map_err(ImportError::from)?;

        self.notify(&ImportProgressEvent::PhaseStarted(ImportPhase::ExtractingPlaylist)).await?;
        ::tracing::info!(%url, "extracting playlist");

        let Extraction { playlist, diagnostics } = ::std::sync::Arc::clone(&self.extractor).extract(url.clone()).await?;

        for diagnostic in &diagnostics {
            self.notify(diagnostic).await?;
        }

        let playlist = normalize(url, playlist)?;
        let layout = OutputLayout::derive(&playlist.metadata.name, &save_directory, &base_files_directory);

        self.notify(&ImportProgressEvent::PhaseStarted(ImportPhase::CreatingFolders)).await?;
        ::std::sync::Arc::clone(&self.notes).prepare(&layout).await?;

        self.notify(&ImportProgressEvent::PhaseStarted(ImportPhase::CreatingDocuments)).await?;

        let total = playlist.videos.len();
        self.notify(&ImportProgressEvent::PercentageUpdated(ImportPercentageUpdatedEvent::new(0, total))).await?;

        for position in 0..total {
            let phase = ImportPhase::ProcessingVideo { current: position + 1, total };
            self.notify(&ImportProgressEvent::PhaseStarted(phase)).await?;

            let note = link(&playlist, &layout, position);
            ::tracing::debug!(path = %note.path.display(), "writing video note");
            Save::<VideoNote>::save(::std::sync::Arc::clone(&self.notes), &note).await?;

            let event = ImportPercentageUpdatedEvent::new(position + 1, total);
            self.notify(&ImportProgressEvent::PercentageUpdated(event)).await?;
        }

        let index = IndexNote {
            thumbnail_url: playlist.metadata.thumbnail_url.clone(),
            base_filename: layout.base_filename().into_owned().into(),
            path: layout.index_document.clone(),
        };
        Save::<IndexNote>::save(::std::sync::Arc::clone(&self.notes), &index).await?;

        let base = BaseNote {
            videos_folder: layout.vault_relative_videos_folder(vault_directory.as_deref()).into(),
            path: layout.base_document.clone(),
        };
        Save::<BaseNote>::save(::std::sync::Arc::clone(&self.notes), &base).await?;

        self.notify(&ImportProgressEvent::PercentageUpdated(ImportPercentageUpdatedEvent::finished(total))).await?;

        let message = format!(
            "✅ Done!\n📁 Folder created: {}\n📄 File created: {}",
            layout.main_folder.display(),
            layout.index_document.display(),
        );

        Ok(ImportSummary {
            message: message.into(),
            main_folder: layout.main_folder,
            index_document: layout.index_document,
            base_document: layout.base_document,
            processed_videos: total,
        })
    }

    async fn notify<Event>(&self, event: &Event) -> Fallible<()>
    where
        Event: Send + Sync,
        dyn ImportPlaylistOutputBoundary: Update<Event>,
    {
        Update::<Event>::update(::std::sync::Arc::clone(&self.output_boundary), event).await
    }
}

/// Second pass: wires one collected video to its neighbours and to the playlist index one level up.
fn link(playlist: &Playlist, layout: &OutputLayout, position: usize) -> VideoNote {
    let video = &playlist.videos[position];

    let previous_link = position
        .checked_sub(1)
        .and_then(|previous| playlist.videos.get(previous))
        .map(|previous| previous.filename.clone());

    let next_link = playlist.videos.get(position + 1).map(|next| next.filename.clone());

    let index_link = layout
        .index_document
        .file_stem()
        .map(|stem| format!("../{}", stem.to_string_lossy()))
        .unwrap_or_else(|| format!("../{}", playlist.metadata.name));

    VideoNote {
        path: layout.video_document(&video.filename).into(),
        video: video.clone(),
        playlist_tag: playlist.tag(),
        index_link: index_link.into(),
        previous_link,
        next_link,
    }
}
